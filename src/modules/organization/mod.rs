pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::OrganizationService;
pub use domain::{Organization, OrganizationCategory, OrganizationRepository};
pub use infrastructure::persistence::OrganizationRepositoryImpl;
