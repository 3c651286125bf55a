pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::ReviewService;
pub use domain::{Review, ReviewRepository};
pub use infrastructure::persistence::ReviewRepositoryImpl;
