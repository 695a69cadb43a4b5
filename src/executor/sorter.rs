//! Result sorting for query execution
//!
//! Sorts listings deterministically: primary key per the sort spec,
//! ties broken by record id ascending so pagination never shifts between
//! repeated identical queries.

use std::cmp::Ordering;

use crate::model::Listing;
use crate::planner::{SortDirection, SortKey, SortSpec};

/// Sorts listing result sets
pub struct ListingSorter;

impl ListingSorter {
    /// Sorts listings in place according to the sort specification.
    pub fn sort(listings: &mut [Listing], spec: &SortSpec) {
        listings.sort_by(|a, b| {
            let ordering = match spec.key {
                SortKey::Rent => a.rent.cmp(&b.rent),
                SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            let ordering = match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            // Secondary key is direction-independent
            match ordering {
                Ordering::Equal => a.id.cmp(&b.id),
                other => other,
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn listing(rent: u32, age_minutes: i64) -> Listing {
        let created = Utc::now() - Duration::minutes(age_minutes);
        Listing {
            id: Uuid::new_v4(),
            location_id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            size: String::new(),
            property_type: String::new(),
            furnishing_status: String::new(),
            rent,
            security_deposit: 0,
            floor_number: String::new(),
            facilities: vec![],
            parking: vec![],
            distance_to_bus_stop: String::new(),
            distance_to_metro: String::new(),
            nearest_bus_stop: String::new(),
            nearest_metro: String::new(),
            allowed_for: vec!["Mixed".to_string()],
            bachelors_allowed: 0,
            family_members_allowed: 0,
            mixed_members_allowed: 0,
            extra_charges: String::new(),
            ready_for_rent: true,
            suitable_for: vec![],
            map_link: String::new(),
            pet_allowed: false,
            tags: vec![],
            additional_info: String::new(),
            images: vec![],
            videos: vec![],
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_sort_by_rent_ascending() {
        let mut listings = vec![listing(9000, 0), listing(5000, 0), listing(7000, 0)];
        ListingSorter::sort(&mut listings, &SortSpec::asc(SortKey::Rent));

        let rents: Vec<u32> = listings.iter().map(|l| l.rent).collect();
        assert_eq!(rents, vec![5000, 7000, 9000]);
    }

    #[test]
    fn test_sort_by_rent_descending() {
        let mut listings = vec![listing(5000, 0), listing(9000, 0), listing(7000, 0)];
        ListingSorter::sort(&mut listings, &SortSpec::desc(SortKey::Rent));

        let rents: Vec<u32> = listings.iter().map(|l| l.rent).collect();
        assert_eq!(rents, vec![9000, 7000, 5000]);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut listings = vec![listing(0, 30), listing(0, 10), listing(0, 20)];
        ListingSorter::sort(&mut listings, &SortSpec::desc(SortKey::CreatedAt));

        assert!(listings[0].created_at > listings[1].created_at);
        assert!(listings[1].created_at > listings[2].created_at);
    }

    #[test]
    fn test_ties_break_by_id_ascending() {
        let mut listings = vec![listing(5000, 0), listing(5000, 0), listing(5000, 0)];
        // Fix timestamps so only the id decides
        let created = listings[0].created_at;
        for l in &mut listings {
            l.created_at = created;
        }

        ListingSorter::sort(&mut listings, &SortSpec::asc(SortKey::Rent));
        let asc_ids: Vec<Uuid> = listings.iter().map(|l| l.id).collect();
        let mut expected = asc_ids.clone();
        expected.sort();
        assert_eq!(asc_ids, expected);

        // Same tiebreak regardless of direction
        ListingSorter::sort(&mut listings, &SortSpec::desc(SortKey::Rent));
        let desc_ids: Vec<Uuid> = listings.iter().map(|l| l.id).collect();
        assert_eq!(desc_ids, expected);
    }
}
