pub mod editorial_repository_impl;

pub use editorial_repository_impl::EditorialRepositoryImpl;
