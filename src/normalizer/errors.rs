//! Normalizer error types.

use thiserror::Error;

/// Result type for normalization
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Errors produced while normalizing a raw filter request.
///
/// Every variant is a client error: the request was structurally wrong
/// and retrying it unchanged can never succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The mandatory location scope is missing or empty
    #[error("locationId is required")]
    MissingLocation,

    /// The location scope is not a valid identifier
    #[error("locationId is not a valid id: {0}")]
    InvalidLocation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NormalizeError::MissingLocation.to_string(),
            "locationId is required"
        );
        assert_eq!(
            NormalizeError::InvalidLocation("abc".to_string()).to_string(),
            "locationId is not a valid id: abc"
        );
    }
}
