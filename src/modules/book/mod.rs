pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::book_authors_service::BookAuthorsService;
pub use application::book_editorial_service::BookEditorialService;
pub use application::service::BookService;
pub use domain::{Book, BookRepository};
pub use infrastructure::persistence::BookRepositoryImpl;
