//! # Data Model
//!
//! Listing and Location records as stored and served.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rentable unit (room, flat or PG) belonging to one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,

    /// The location this listing belongs to. Must reference an existing
    /// [`Location`] at write time.
    pub location_id: Uuid,

    pub title: String,
    pub description: String,

    /// e.g. "Single Room", "1 RK"
    pub size: String,
    /// e.g. "Room", "Flat", "PG"
    pub property_type: String,
    /// e.g. "Furnished", "Semi-furnished", "Unfurnished"
    pub furnishing_status: String,

    /// Monthly rent. Non-negative by construction.
    pub rent: u32,
    pub security_deposit: u32,
    #[serde(default)]
    pub floor_number: String,

    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub parking: Vec<String>,

    #[serde(default)]
    pub distance_to_bus_stop: String,
    #[serde(default)]
    pub distance_to_metro: String,
    #[serde(default)]
    pub nearest_bus_stop: String,
    #[serde(default)]
    pub nearest_metro: String,

    /// Who can stay. Never empty: defaults to `["Mixed"]`.
    #[serde(default = "default_allowed_for")]
    pub allowed_for: Vec<String>,

    #[serde(default)]
    pub bachelors_allowed: u32,
    #[serde(default)]
    pub family_members_allowed: u32,
    #[serde(default)]
    pub mixed_members_allowed: u32,

    #[serde(default)]
    pub extra_charges: String,
    #[serde(default = "default_true")]
    pub ready_for_rent: bool,
    #[serde(default)]
    pub suitable_for: Vec<String>,
    #[serde(default)]
    pub map_link: String,
    #[serde(default)]
    pub pet_allowed: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub additional_info: String,

    /// Media arrays keep insertion order; never used for filtering.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_allowed_for() -> Vec<String> {
    vec!["Mixed".to_string()]
}

fn default_true() -> bool {
    true
}

impl Listing {
    /// Restores the `allowed_for` invariant after deserialization or a
    /// partial update left it empty.
    pub fn enforce_allowed_for(&mut self) {
        if self.allowed_for.is_empty() {
            self.allowed_for = default_allowed_for();
        }
    }
}

/// A named place listings belong to. Names are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized location fields attached to listings on the read side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub name: String,
    pub city: String,
}

impl From<&Location> for LocationSummary {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            city: location.city.clone(),
        }
    }
}

/// A listing joined with its location summary for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingView {
    #[serde(flatten)]
    pub listing: Listing,
    pub location: Option<LocationSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_listing() -> Listing {
        let now = Utc::now();
        Listing {
            id: Uuid::new_v4(),
            location_id: Uuid::new_v4(),
            title: "Cozy 1RK".to_string(),
            description: String::new(),
            size: "1 RK".to_string(),
            property_type: "Flat".to_string(),
            furnishing_status: "Furnished".to_string(),
            rent: 9000,
            security_deposit: 20000,
            floor_number: "2".to_string(),
            facilities: vec!["AC".to_string()],
            parking: vec![],
            distance_to_bus_stop: String::new(),
            distance_to_metro: String::new(),
            nearest_bus_stop: String::new(),
            nearest_metro: String::new(),
            allowed_for: vec![],
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
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_allowed_for_never_empty() {
        let mut listing = sample_listing();
        listing.enforce_allowed_for();
        assert_eq!(listing.allowed_for, vec!["Mixed".to_string()]);
    }

    #[test]
    fn test_listing_serializes_camel_case() {
        let listing = sample_listing();
        let value = serde_json::to_value(&listing).unwrap();
        assert!(value.get("propertyType").is_some());
        assert!(value.get("furnishingStatus").is_some());
        assert!(value.get("property_type").is_none());
    }

    #[test]
    fn test_location_summary_from_location() {
        let now = Utc::now();
        let location = Location {
            id: Uuid::new_v4(),
            name: "Kakkanad".to_string(),
            city: "Kochi".to_string(),
            description: String::new(),
            image: String::new(),
            created_at: now,
            updated_at: now,
        };
        let summary = LocationSummary::from(&location);
        assert_eq!(summary.name, "Kakkanad");
        assert_eq!(summary.city, "Kochi");
    }
}
