//! Store error types.

use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Transient failure reaching the store; the caller may retry
    #[error("store unavailable")]
    Unavailable,

    /// Write-time referential check failed: the listing points at a
    /// location that does not exist
    #[error("location {0} does not exist")]
    UnknownLocation(Uuid),

    /// Location names are unique
    #[error("location name already exists: {0}")]
    DuplicateLocationName(String),
}
