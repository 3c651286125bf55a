use serde::Serialize;
use thiserror::Error;

/// Error surface of the catalog core.
///
/// Every service operation either succeeds or fails with one of these two
/// kinds: a dangling id (`NotFound`) or a mutation that would break a
/// domain invariant (`IllegalOperation`). Validation always runs before
/// the final store write, so a failed operation leaves nothing partially
/// mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Illegal operation: {0}")]
    IllegalOperation(String),
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
