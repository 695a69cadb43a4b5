//! # Raw Filter Request
//!
//! Wire shape of a search request as the caller sends it. Everything is
//! optional and loosely typed; the normalizer decides what survives.

use serde::Deserialize;
use serde_json::Value;

/// A search request as received from the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    /// Mandatory scope: every query targets exactly one location.
    pub location_id: Option<String>,

    #[serde(default)]
    pub filters: RawFilters,

    pub search_query: Option<String>,
    pub sort_option: Option<String>,

    /// 1-based page number, default 1.
    pub page: Option<i64>,

    /// Requested page size. Capped server-side.
    pub limit: Option<i64>,
}

/// The optional filter block of a [`FilterRequest`].
///
/// A missing key, an empty array and an explicit value are three distinct
/// states; `Option` keeps absence observable so the normalizer can apply
/// its drop rules instead of guessing from falsy values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilters {
    pub property_type: Option<Vec<String>>,
    pub furnishing_status: Option<Vec<String>>,
    pub allowed_for: Option<Vec<String>>,
    pub suitable_for: Option<Vec<String>>,
    pub facilities: Option<Vec<String>>,
    pub parking: Option<Vec<String>>,
    pub rent_range: Option<RawRentRange>,
    pub pet_allowed: Option<bool>,
    pub ready_for_rent: Option<bool>,
}

/// Rent bounds as sent by the caller.
///
/// Bounds arrive as arbitrary JSON values (numbers, numeric strings,
/// garbage); each side is parsed independently by the normalizer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRentRange {
    pub min: Option<Value>,
    pub max: Option<Value>,
}
