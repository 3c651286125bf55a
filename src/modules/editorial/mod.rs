pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::editorial_books_service::EditorialBooksService;
pub use application::service::EditorialService;
pub use domain::{Editorial, EditorialRepository};
pub use infrastructure::persistence::EditorialRepositoryImpl;
