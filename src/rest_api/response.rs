//! # Response Formatting
//!
//! Standard success envelopes for the REST API.

use serde::Serialize;

use crate::executor::{Pagination, ResultEnvelope};
use crate::model::ListingView;

/// Plain data response: `{ success: true, data }`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Search response: one page of listings plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResponse {
    pub success: bool,
    pub data: Vec<ListingView>,
    pub pagination: Pagination,
}

impl From<ResultEnvelope> for FilterResponse {
    fn from(envelope: ResultEnvelope) -> Self {
        Self {
            success: true,
            data: envelope.data,
            pagination: envelope.pagination,
        }
    }
}

/// Delete acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: bool,
}

impl DeletedResponse {
    pub fn deleted() -> Self {
        Self {
            success: true,
            deleted: true,
        }
    }
}
