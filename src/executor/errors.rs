//! Executor error types.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for query execution
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Errors surfaced while executing a query plan.
///
/// The executor adds no retry or masking of its own; storage failures
/// propagate unchanged for the transport layer to classify.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The storage layer could not be reached or failed mid-read
    #[error("storage unavailable: {0}")]
    Storage(#[from] StoreError),
}
