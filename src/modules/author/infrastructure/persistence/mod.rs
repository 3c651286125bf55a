pub mod author_repository_impl;

pub use author_repository_impl::AuthorRepositoryImpl;
