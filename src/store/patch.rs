//! # Listing Patch
//!
//! Typed partial update for a listing. Every field is optional; only the
//! fields the caller supplies are applied.

use serde::Deserialize;

use crate::model::Listing;

/// Partial update payload for `PATCH /api/rooms/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub size: Option<String>,
    pub property_type: Option<String>,
    pub furnishing_status: Option<String>,
    pub rent: Option<u32>,
    pub security_deposit: Option<u32>,
    pub floor_number: Option<String>,
    pub facilities: Option<Vec<String>>,
    pub parking: Option<Vec<String>>,
    pub distance_to_bus_stop: Option<String>,
    pub distance_to_metro: Option<String>,
    pub nearest_bus_stop: Option<String>,
    pub nearest_metro: Option<String>,
    pub allowed_for: Option<Vec<String>>,
    pub bachelors_allowed: Option<u32>,
    pub family_members_allowed: Option<u32>,
    pub mixed_members_allowed: Option<u32>,
    pub extra_charges: Option<String>,
    pub ready_for_rent: Option<bool>,
    pub suitable_for: Option<Vec<String>>,
    pub map_link: Option<String>,
    pub pet_allowed: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub additional_info: Option<String>,
    pub images: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
}

impl ListingPatch {
    /// Applies the supplied fields to a listing. Restores the
    /// `allowed_for` invariant and bumps `updated_at`.
    pub fn apply(self, listing: &mut Listing) {
        macro_rules! set {
            ($field:ident) => {
                if let Some(value) = self.$field {
                    listing.$field = value;
                }
            };
        }

        set!(title);
        set!(description);
        set!(size);
        set!(property_type);
        set!(furnishing_status);
        set!(rent);
        set!(security_deposit);
        set!(floor_number);
        set!(facilities);
        set!(parking);
        set!(distance_to_bus_stop);
        set!(distance_to_metro);
        set!(nearest_bus_stop);
        set!(nearest_metro);
        set!(allowed_for);
        set!(bachelors_allowed);
        set!(family_members_allowed);
        set!(mixed_members_allowed);
        set!(extra_charges);
        set!(ready_for_rent);
        set!(suitable_for);
        set!(map_link);
        set!(pet_allowed);
        set!(tags);
        set!(additional_info);
        set!(images);
        set!(videos);

        listing.enforce_allowed_for();
        listing.updated_at = chrono::Utc::now();
    }
}
