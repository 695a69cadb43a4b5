//! Result envelope and pagination metadata.

use serde::Serialize;

use crate::model::ListingView;

/// Pagination metadata for one result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    /// Computes metadata from the total match count and the requested
    /// window. `total_pages` is 0 when nothing matched; the current page
    /// is never clamped — requesting past the end is the caller's call
    /// and simply yields an empty page.
    pub fn compute(total_count: u64, current_page: u32, page_size: u32) -> Self {
        let page_size = u64::from(page_size.max(1));
        let total_pages = total_count.div_ceil(page_size);
        Self {
            total_count,
            total_pages,
            current_page,
            has_next_page: u64::from(current_page) < total_pages,
            has_prev_page: current_page > 1,
        }
    }
}

/// One page of matching listings plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope {
    pub data: Vec<ListingView>,
    pub pagination: Pagination,
}

impl ResultEnvelope {
    /// An envelope for a query that matched nothing.
    pub fn empty(current_page: u32, page_size: u32) -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination::compute(0, current_page, page_size),
        }
    }
}
