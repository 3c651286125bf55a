// Shared kernel used by every catalog module

pub mod domain; // Cross-module value objects
pub mod errors; // Shared error types
pub mod utils; // Logging and validation helpers
