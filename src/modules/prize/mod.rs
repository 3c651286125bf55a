pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::prize_author_service::PrizeAuthorService;
pub use application::service::PrizeService;
pub use domain::{Prize, PrizeRepository};
pub use infrastructure::persistence::PrizeRepositoryImpl;
