//! # Canonical Filter Specification
//!
//! The minimal set of active constraints for one query. Built fresh per
//! request by the [`Normalizer`](super::Normalizer), consumed by the
//! planner, then discarded. Contains only constraints the caller actually
//! supplied; an absent field means "no constraint on that dimension".

use std::collections::BTreeSet;

use uuid::Uuid;

/// Sort directives accepted by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Ascending rent
    PriceLow,
    /// Descending rent
    PriceHigh,
    /// Descending creation time (default)
    #[default]
    Newest,
    /// Ascending creation time
    Oldest,
}

impl SortOption {
    /// Parses a caller-supplied sort string. Anything outside the
    /// enumerated set normalizes to [`SortOption::Newest`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "priceLow" => SortOption::PriceLow,
            "priceHigh" => SortOption::PriceHigh,
            "oldest" => SortOption::Oldest,
            _ => SortOption::Newest,
        }
    }
}

/// Inclusive rent bounds. At least one side is present; a spec with both
/// sides absent is never constructed (the constraint is dropped instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentBounds {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl RentBounds {
    /// Returns `None` when both bounds are absent.
    pub fn new(min: Option<u32>, max: Option<u32>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            None
        } else {
            Some(Self { min, max })
        }
    }
}

/// The canonical, minimal filter specification for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Mandatory scope: the location being searched.
    pub location_id: Uuid,

    pub property_type: Option<BTreeSet<String>>,
    pub furnishing_status: Option<BTreeSet<String>>,
    pub allowed_for: Option<BTreeSet<String>>,
    pub suitable_for: Option<BTreeSet<String>>,
    pub facilities: Option<BTreeSet<String>>,
    pub parking: Option<BTreeSet<String>>,

    pub rent_range: Option<RentBounds>,

    /// Present only when the caller explicitly supplied a value.
    /// `None` means unconstrained, not `false`.
    pub pet_allowed: Option<bool>,
    pub ready_for_rent: Option<bool>,

    /// Trimmed, non-empty free-text search term.
    pub search: Option<String>,

    pub sort: SortOption,

    /// 1-based page number, always >= 1.
    pub page: u32,
    /// Records per page, always >= 1.
    pub page_size: u32,
}

impl FilterSpec {
    /// A spec with no constraints beyond the location scope.
    pub fn all_in_location(location_id: Uuid, page: u32, page_size: u32) -> Self {
        Self {
            location_id,
            property_type: None,
            furnishing_status: None,
            allowed_for: None,
            suitable_for: None,
            facilities: None,
            parking: None,
            rent_range: None,
            pet_allowed: None,
            ready_for_rent: None,
            search: None,
            sort: SortOption::default(),
            page,
            page_size,
        }
    }

    /// Number of records to skip for the requested page.
    pub fn skip(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }
}
