pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::author_books_service::AuthorBooksService;
pub use application::service::AuthorService;
pub use domain::{Author, AuthorRepository};
pub use infrastructure::persistence::AuthorRepositoryImpl;
