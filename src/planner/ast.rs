//! # Query Plan AST
//!
//! Typed predicates over listing fields. The executor evaluates these
//! strictly; no coercion beyond what each variant documents.

use std::collections::BTreeSet;

use uuid::Uuid;

/// Set-valued or scalar listing fields usable in membership predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    PropertyType,
    FurnishingStatus,
    AllowedFor,
    SuitableFor,
    Facilities,
    Parking,
}

impl SetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetField::PropertyType => "propertyType",
            SetField::FurnishingStatus => "furnishingStatus",
            SetField::AllowedFor => "allowedFor",
            SetField::SuitableFor => "suitableFor",
            SetField::Facilities => "facilities",
            SetField::Parking => "parking",
        }
    }
}

/// A single sub-predicate. A plan combines its predicates with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Record belongs to the given location.
    LocationIs(Uuid),

    /// Record's field intersects the given set (OR within the filter).
    /// Scalar fields (propertyType, furnishingStatus) are treated as
    /// one-element sets.
    IntersectsAny { field: SetField, values: BTreeSet<String> },

    /// rent >= bound (inclusive)
    RentAtLeast(u32),
    /// rent <= bound (inclusive)
    RentAtMost(u32),

    PetAllowed(bool),
    ReadyForRent(bool),

    /// Case-insensitive substring match, OR across the fixed text fields
    /// (size, propertyType, tags, additionalInfo). Tag matching is
    /// per-element substring, not whole-tag equality.
    MatchesText(String),
}

/// Sortable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rent,
    CreatedAt,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Primary sort for a plan. Ties always break by record id ascending so
/// pagination stays deterministic across repeated identical queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// A fully-resolved storage query: predicate conjunction, sort, window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub predicates: Vec<Predicate>,
    pub sort: SortSpec,
    pub skip: usize,
    pub limit: usize,
}

impl QueryPlan {
    /// The location scope of this plan.
    ///
    /// Every plan built by the planner starts with a location predicate;
    /// this is a convenience for stores that partition by location.
    pub fn location_id(&self) -> Option<Uuid> {
        self.predicates.iter().find_map(|p| match p {
            Predicate::LocationIs(id) => Some(*id),
            _ => None,
        })
    }
}
