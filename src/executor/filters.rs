//! Predicate filtering for query execution
//!
//! Evaluates plan predicates against listings strictly. No coercion:
//! each predicate variant matches exactly what it documents.

use crate::model::Listing;
use crate::planner::{Predicate, SetField};

/// Evaluates predicates against listings
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a listing matches all predicates (AND semantics)
    pub fn matches(listing: &Listing, predicates: &[Predicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(listing, pred))
    }

    fn matches_predicate(listing: &Listing, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::LocationIs(id) => listing.location_id == *id,
            Predicate::IntersectsAny { field, values } => {
                Self::intersects(listing, *field, values)
            }
            Predicate::RentAtLeast(min) => listing.rent >= *min,
            Predicate::RentAtMost(max) => listing.rent <= *max,
            Predicate::PetAllowed(expected) => listing.pet_allowed == *expected,
            Predicate::ReadyForRent(expected) => listing.ready_for_rent == *expected,
            Predicate::MatchesText(term) => Self::matches_text(listing, term),
        }
    }

    /// Set-membership: OR within the filter's value set.
    fn intersects(
        listing: &Listing,
        field: SetField,
        values: &std::collections::BTreeSet<String>,
    ) -> bool {
        match field {
            // Scalar fields act as one-element sets
            SetField::PropertyType => values.contains(&listing.property_type),
            SetField::FurnishingStatus => values.contains(&listing.furnishing_status),
            SetField::AllowedFor => listing.allowed_for.iter().any(|v| values.contains(v)),
            SetField::SuitableFor => listing.suitable_for.iter().any(|v| values.contains(v)),
            SetField::Facilities => listing.facilities.iter().any(|v| values.contains(v)),
            SetField::Parking => listing.parking.iter().any(|v| values.contains(v)),
        }
    }

    /// Case-insensitive substring search, OR across the fixed text-field
    /// set. `term` is already lowercased by the planner.
    fn matches_text(listing: &Listing, term: &str) -> bool {
        listing.size.to_lowercase().contains(term)
            || listing.property_type.to_lowercase().contains(term)
            || listing
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(term))
            || listing.additional_info.to_lowercase().contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn listing() -> Listing {
        let now = chrono::Utc::now();
        Listing {
            id: Uuid::new_v4(),
            location_id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            size: "Single Room".to_string(),
            property_type: "PG".to_string(),
            furnishing_status: "Furnished".to_string(),
            rent: 7500,
            security_deposit: 15000,
            floor_number: String::new(),
            facilities: vec!["AC".to_string(), "Fridge".to_string()],
            parking: vec!["Bike".to_string()],
            distance_to_bus_stop: String::new(),
            distance_to_metro: String::new(),
            nearest_bus_stop: String::new(),
            nearest_metro: String::new(),
            allowed_for: vec!["Bachelors".to_string()],
            bachelors_allowed: 2,
            family_members_allowed: 0,
            mixed_members_allowed: 0,
            extra_charges: String::new(),
            ready_for_rent: true,
            suitable_for: vec!["Students".to_string()],
            map_link: String::new(),
            pet_allowed: false,
            tags: vec!["Near Infopark".to_string()],
            additional_info: "close to infopark road".to_string(),
            images: vec![],
            videos: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_location_predicate() {
        let listing = listing();
        assert!(PredicateFilter::matches(
            &listing,
            &[Predicate::LocationIs(listing.location_id)]
        ));
        assert!(!PredicateFilter::matches(
            &listing,
            &[Predicate::LocationIs(Uuid::new_v4())]
        ));
    }

    #[test]
    fn test_intersects_is_or_within_filter() {
        let listing = listing();
        // Has AC but not WiFi: any overlap matches
        let pred = Predicate::IntersectsAny {
            field: SetField::Facilities,
            values: set(&["WiFi", "AC"]),
        };
        assert!(PredicateFilter::matches(&listing, &[pred]));

        let pred = Predicate::IntersectsAny {
            field: SetField::Facilities,
            values: set(&["WiFi", "Geyser"]),
        };
        assert!(!PredicateFilter::matches(&listing, &[pred]));
    }

    #[test]
    fn test_scalar_field_as_one_element_set() {
        let listing = listing();
        let pred = Predicate::IntersectsAny {
            field: SetField::PropertyType,
            values: set(&["Flat", "PG"]),
        };
        assert!(PredicateFilter::matches(&listing, &[pred]));

        let pred = Predicate::IntersectsAny {
            field: SetField::PropertyType,
            values: set(&["Flat"]),
        };
        assert!(!PredicateFilter::matches(&listing, &[pred]));
    }

    #[test]
    fn test_rent_bounds_inclusive() {
        let listing = listing();
        assert!(PredicateFilter::matches(&listing, &[Predicate::RentAtLeast(7500)]));
        assert!(PredicateFilter::matches(&listing, &[Predicate::RentAtMost(7500)]));
        assert!(!PredicateFilter::matches(&listing, &[Predicate::RentAtLeast(7501)]));
        assert!(!PredicateFilter::matches(&listing, &[Predicate::RentAtMost(7499)]));
    }

    #[test]
    fn test_boolean_predicates_exact() {
        let listing = listing();
        assert!(PredicateFilter::matches(&listing, &[Predicate::PetAllowed(false)]));
        assert!(!PredicateFilter::matches(&listing, &[Predicate::PetAllowed(true)]));
        assert!(PredicateFilter::matches(&listing, &[Predicate::ReadyForRent(true)]));
    }

    #[test]
    fn test_text_search_over_tags_and_info() {
        let listing = listing();
        // Substring of a tag element, case-insensitive
        assert!(PredicateFilter::matches(
            &listing,
            &[Predicate::MatchesText("infopark".to_string())]
        ));
        // Substring of additionalInfo
        assert!(PredicateFilter::matches(
            &listing,
            &[Predicate::MatchesText("infopark road".to_string())]
        ));
        // Substring of size
        assert!(PredicateFilter::matches(
            &listing,
            &[Predicate::MatchesText("single".to_string())]
        ));
        assert!(!PredicateFilter::matches(
            &listing,
            &[Predicate::MatchesText("seaview".to_string())]
        ));
    }

    #[test]
    fn test_predicates_and_across_fields() {
        let listing = listing();
        let preds = vec![
            Predicate::LocationIs(listing.location_id),
            Predicate::IntersectsAny {
                field: SetField::Facilities,
                values: set(&["AC"]),
            },
            Predicate::RentAtMost(8000),
        ];
        assert!(PredicateFilter::matches(&listing, &preds));

        let preds = vec![
            Predicate::LocationIs(listing.location_id),
            Predicate::IntersectsAny {
                field: SetField::Facilities,
                values: set(&["AC"]),
            },
            Predicate::RentAtMost(7000), // fails
        ];
        assert!(!PredicateFilter::matches(&listing, &preds));
    }
}
