//! # Query Planner
//!
//! Builds a [`QueryPlan`] from a canonical [`FilterSpec`]. The planner
//! trusts the normalizer: values here are already validated, and any
//! malformed constraint reaching this point is a normalizer defect.

use crate::normalizer::{FilterSpec, SortOption};

use super::ast::{Predicate, QueryPlan, SetField, SortKey, SortSpec};

/// Translates filter specifications into storage queries.
pub struct QueryPlanner;

impl QueryPlanner {
    /// Builds the plan for a spec. Infallible: every canonical spec has
    /// exactly one plan.
    pub fn plan(spec: &FilterSpec) -> QueryPlan {
        let mut predicates = vec![Predicate::LocationIs(spec.location_id)];

        let set_filters = [
            (SetField::PropertyType, &spec.property_type),
            (SetField::FurnishingStatus, &spec.furnishing_status),
            (SetField::AllowedFor, &spec.allowed_for),
            (SetField::SuitableFor, &spec.suitable_for),
            (SetField::Facilities, &spec.facilities),
            (SetField::Parking, &spec.parking),
        ];
        for (field, values) in set_filters {
            if let Some(values) = values {
                predicates.push(Predicate::IntersectsAny {
                    field,
                    values: values.clone(),
                });
            }
        }

        if let Some(bounds) = spec.rent_range {
            if let Some(min) = bounds.min {
                predicates.push(Predicate::RentAtLeast(min));
            }
            if let Some(max) = bounds.max {
                predicates.push(Predicate::RentAtMost(max));
            }
        }

        if let Some(pet) = spec.pet_allowed {
            predicates.push(Predicate::PetAllowed(pet));
        }
        if let Some(ready) = spec.ready_for_rent {
            predicates.push(Predicate::ReadyForRent(ready));
        }

        if let Some(term) = &spec.search {
            predicates.push(Predicate::MatchesText(term.to_lowercase()));
        }

        QueryPlan {
            predicates,
            sort: Self::resolve_sort(spec.sort),
            skip: spec.skip(),
            limit: spec.page_size as usize,
        }
    }

    fn resolve_sort(option: SortOption) -> SortSpec {
        match option {
            SortOption::PriceLow => SortSpec::asc(SortKey::Rent),
            SortOption::PriceHigh => SortSpec::desc(SortKey::Rent),
            SortOption::Newest => SortSpec::desc(SortKey::CreatedAt),
            SortOption::Oldest => SortSpec::asc(SortKey::CreatedAt),
        }
    }
}
