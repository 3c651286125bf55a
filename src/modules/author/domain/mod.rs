pub mod entities;
pub mod repositories;

pub use entities::author::Author;
pub use repositories::author_repository::AuthorRepository;
