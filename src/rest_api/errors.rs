//! # REST API Errors
//!
//! Error types for the REST API module. This is where engine and store
//! failures get their transport-level classification.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::executor::ExecutorError;
use crate::normalizer::NormalizeError;
use crate::store::StoreError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Structurally invalid request (missing locationId etc.)
    #[error("{0}")]
    InvalidRequest(#[from] NormalizeError),

    /// Resource not found
    #[error("resource not found")]
    NotFound,

    // ==================
    // Storage-derived
    // ==================
    /// Store rejected or failed the operation
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl From<ExecutorError> for ApiError {
    fn from(err: ExecutorError) -> Self {
        match err {
            ExecutorError::Storage(store) => ApiError::Store(store),
        }
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(StoreError::UnknownLocation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::DuplicateLocationName(_)) => StatusCode::CONFLICT,
        }
    }
}

/// Error response body, mirroring the success envelope shape.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            Self {
                success: false,
                message: "Server Error".to_string(),
                error: Some(err.to_string()),
            }
        } else {
            Self {
                success: false,
                message: err.to_string(),
                error: None,
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
