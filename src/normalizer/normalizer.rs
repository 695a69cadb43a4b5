//! # Normalizer
//!
//! Turns a [`FilterRequest`] into a canonical [`FilterSpec`] by applying
//! the drop/keep rules documented on the module. Pure transform.

use std::collections::BTreeSet;

use serde_json::Value;
use uuid::Uuid;

use super::errors::{NormalizeError, NormalizeResult};
use super::request::{FilterRequest, RawRentRange};
use super::spec::{FilterSpec, RentBounds, SortOption};

/// Server-side pagination bounds.
///
/// The caller may request a smaller page but can never exceed `max_size`;
/// unbounded result-set requests are a hardening concern, not a feature.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 10,
            max_size: 50,
        }
    }
}

/// Validates and normalizes raw filter requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    limits: PageLimits,
}

impl Normalizer {
    pub fn new(limits: PageLimits) -> Self {
        Self { limits }
    }

    /// Produces the canonical spec for a raw request, or rejects it.
    pub fn normalize(&self, request: &FilterRequest) -> NormalizeResult<FilterSpec> {
        let location_id = self.normalize_location(request.location_id.as_deref())?;

        let filters = &request.filters;
        let mut spec = FilterSpec::all_in_location(
            location_id,
            normalize_page(request.page),
            self.normalize_page_size(request.limit),
        );

        spec.property_type = normalize_set(filters.property_type.as_deref());
        spec.furnishing_status = normalize_set(filters.furnishing_status.as_deref());
        spec.allowed_for = normalize_set(filters.allowed_for.as_deref());
        spec.suitable_for = normalize_set(filters.suitable_for.as_deref());
        spec.facilities = normalize_set(filters.facilities.as_deref());
        spec.parking = normalize_set(filters.parking.as_deref());

        spec.rent_range = normalize_rent_range(filters.rent_range.as_ref());

        // Explicit presence only: a missing boolean is no constraint.
        spec.pet_allowed = filters.pet_allowed;
        spec.ready_for_rent = filters.ready_for_rent;

        spec.search = normalize_search(request.search_query.as_deref());
        spec.sort = SortOption::parse(request.sort_option.as_deref().unwrap_or(""));

        Ok(spec)
    }

    fn normalize_location(&self, raw: Option<&str>) -> NormalizeResult<Uuid> {
        let raw = raw.map(str::trim).unwrap_or("");
        if raw.is_empty() {
            return Err(NormalizeError::MissingLocation);
        }
        Uuid::parse_str(raw).map_err(|_| NormalizeError::InvalidLocation(raw.to_string()))
    }

    fn normalize_page_size(&self, raw: Option<i64>) -> u32 {
        match raw {
            Some(n) if n >= 1 => (n as u64).min(self.limits.max_size as u64) as u32,
            _ => self.limits.default_size,
        }
    }
}

/// Non-empty sequences become sets (duplicates collapsed); everything
/// else is dropped.
fn normalize_set(raw: Option<&[String]>) -> Option<BTreeSet<String>> {
    let values: BTreeSet<String> = raw?
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn normalize_page(raw: Option<i64>) -> u32 {
    match raw {
        Some(n) if n >= 1 => n.min(u32::MAX as i64) as u32,
        _ => 1,
    }
}

fn normalize_search(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalize_rent_range(raw: Option<&RawRentRange>) -> Option<RentBounds> {
    let range = raw?;
    RentBounds::new(parse_bound(range.min.as_ref()), parse_bound(range.max.as_ref()))
}

/// Parses one rent bound. Accepts non-negative integers and numeric
/// strings; anything else drops that bound only.
fn parse_bound(raw: Option<&Value>) -> Option<u32> {
    match raw? {
        Value::Number(n) => {
            let n = n.as_i64()?;
            u32::try_from(n).ok()
        }
        Value::String(s) => {
            let n: i64 = s.trim().parse().ok()?;
            u32::try_from(n).ok()
        }
        _ => None,
    }
}
