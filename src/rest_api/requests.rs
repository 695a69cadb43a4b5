//! # Write Payloads
//!
//! Bodies accepted by the create endpoints. Identifier and timestamps
//! are assigned server-side.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::model::{Listing, Location};

/// Body for `POST /api/rooms`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListing {
    pub location_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub size: String,
    pub property_type: String,
    pub furnishing_status: String,
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
    #[serde(default)]
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
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl CreateListing {
    /// Materializes a listing with a fresh id and timestamps. The
    /// `allowed_for` invariant is restored here, before the store sees
    /// the record.
    pub fn into_listing(self) -> Listing {
        let now = Utc::now();
        let mut listing = Listing {
            id: Uuid::new_v4(),
            location_id: self.location_id,
            title: self.title,
            description: self.description,
            size: self.size,
            property_type: self.property_type,
            furnishing_status: self.furnishing_status,
            rent: self.rent,
            security_deposit: self.security_deposit,
            floor_number: self.floor_number,
            facilities: self.facilities,
            parking: self.parking,
            distance_to_bus_stop: self.distance_to_bus_stop,
            distance_to_metro: self.distance_to_metro,
            nearest_bus_stop: self.nearest_bus_stop,
            nearest_metro: self.nearest_metro,
            allowed_for: self.allowed_for,
            bachelors_allowed: self.bachelors_allowed,
            family_members_allowed: self.family_members_allowed,
            mixed_members_allowed: self.mixed_members_allowed,
            extra_charges: self.extra_charges,
            ready_for_rent: self.ready_for_rent,
            suitable_for: self.suitable_for,
            map_link: self.map_link,
            pet_allowed: self.pet_allowed,
            tags: self.tags,
            additional_info: self.additional_info,
            images: self.images,
            videos: self.videos,
            created_at: now,
            updated_at: now,
        };
        listing.enforce_allowed_for();
        listing
    }
}

/// Body for `POST /api/locations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocation {
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl CreateLocation {
    pub fn into_location(self) -> Location {
        let now = Utc::now();
        Location {
            id: Uuid::new_v4(),
            name: self.name,
            city: self.city,
            description: self.description,
            image: self.image,
            created_at: now,
            updated_at: now,
        }
    }
}
