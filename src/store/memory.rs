//! # In-Memory Store
//!
//! `RwLock`-guarded maps keyed by id. Evaluates plan queries the way a
//! document store would server-side: predicate filter, then sort, then
//! window. Carries a fault-injection switch so the unavailable path is
//! testable end to end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::executor::{ListingSorter, PredicateFilter};
use crate::model::{Listing, Location};
use crate::planner::QueryPlan;

use super::errors::{StoreError, StoreResult};
use super::patch::ListingPatch;
use super::ListingStore;

/// In-memory document store for listings and locations.
#[derive(Default)]
pub struct MemoryStore {
    listings: RwLock<HashMap<Uuid, Listing>>,
    locations: RwLock<HashMap<Uuid, Location>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fault injection: while set, every operation fails with
    /// [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn guard(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }

    /// All listings matching the plan's predicates, unsorted.
    fn matching(&self, plan: &QueryPlan) -> StoreResult<Vec<Listing>> {
        let listings = self.listings.read().map_err(|_| StoreError::Unavailable)?;
        Ok(listings
            .values()
            .filter(|l| PredicateFilter::matches(l, &plan.predicates))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn count_matches(&self, plan: &QueryPlan) -> StoreResult<u64> {
        self.guard()?;
        Ok(self.matching(plan)?.len() as u64)
    }

    async fn fetch_page(&self, plan: &QueryPlan) -> StoreResult<Vec<Listing>> {
        self.guard()?;
        let mut matches = self.matching(plan)?;
        ListingSorter::sort(&mut matches, &plan.sort);
        Ok(matches.into_iter().skip(plan.skip).take(plan.limit).collect())
    }

    async fn get_listing(&self, id: Uuid) -> StoreResult<Option<Listing>> {
        self.guard()?;
        let listings = self.listings.read().map_err(|_| StoreError::Unavailable)?;
        Ok(listings.get(&id).cloned())
    }

    async fn list_listings(&self) -> StoreResult<Vec<Listing>> {
        self.guard()?;
        let listings = self.listings.read().map_err(|_| StoreError::Unavailable)?;
        let mut all: Vec<Listing> = listings.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn listings_in_location(&self, location_id: Uuid) -> StoreResult<Vec<Listing>> {
        self.guard()?;
        let listings = self.listings.read().map_err(|_| StoreError::Unavailable)?;
        let mut matches: Vec<Listing> = listings
            .values()
            .filter(|l| l.location_id == location_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(matches)
    }

    async fn insert_listing(&self, mut listing: Listing) -> StoreResult<Listing> {
        self.guard()?;
        {
            let locations = self.locations.read().map_err(|_| StoreError::Unavailable)?;
            if !locations.contains_key(&listing.location_id) {
                return Err(StoreError::UnknownLocation(listing.location_id));
            }
        }
        listing.enforce_allowed_for();

        let mut listings = self.listings.write().map_err(|_| StoreError::Unavailable)?;
        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn update_listing(&self, id: Uuid, patch: ListingPatch) -> StoreResult<Option<Listing>> {
        self.guard()?;
        let mut listings = self.listings.write().map_err(|_| StoreError::Unavailable)?;
        match listings.get_mut(&id) {
            Some(listing) => {
                patch.apply(listing);
                Ok(Some(listing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_listing(&self, id: Uuid) -> StoreResult<bool> {
        self.guard()?;
        let mut listings = self.listings.write().map_err(|_| StoreError::Unavailable)?;
        Ok(listings.remove(&id).is_some())
    }

    async fn get_location(&self, id: Uuid) -> StoreResult<Option<Location>> {
        self.guard()?;
        let locations = self.locations.read().map_err(|_| StoreError::Unavailable)?;
        Ok(locations.get(&id).cloned())
    }

    async fn list_locations(&self) -> StoreResult<Vec<Location>> {
        self.guard()?;
        let locations = self.locations.read().map_err(|_| StoreError::Unavailable)?;
        let mut all: Vec<Location> = locations.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn insert_location(&self, location: Location) -> StoreResult<Location> {
        self.guard()?;
        let mut locations = self.locations.write().map_err(|_| StoreError::Unavailable)?;
        if locations.values().any(|l| l.name == location.name) {
            return Err(StoreError::DuplicateLocationName(location.name));
        }
        locations.insert(location.id, location.clone());
        Ok(location)
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::model::{Listing, Location};

    pub fn location_named(name: &str) -> Location {
        let now = Utc::now();
        Location {
            id: Uuid::new_v4(),
            name: name.to_string(),
            city: "Kochi".to_string(),
            description: String::new(),
            image: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn listing_in(location_id: Uuid) -> Listing {
        let now = Utc::now();
        Listing {
            id: Uuid::new_v4(),
            location_id,
            title: "Room near the metro".to_string(),
            description: String::new(),
            size: "Single Room".to_string(),
            property_type: "Room".to_string(),
            furnishing_status: "Semi-furnished".to_string(),
            rent: 6000,
            security_deposit: 12000,
            floor_number: "1".to_string(),
            facilities: vec!["Fridge".to_string()],
            parking: vec!["Bike".to_string()],
            distance_to_bus_stop: "300m".to_string(),
            distance_to_metro: "1km".to_string(),
            nearest_bus_stop: String::new(),
            nearest_metro: String::new(),
            allowed_for: vec!["Mixed".to_string()],
            bachelors_allowed: 0,
            family_members_allowed: 0,
            mixed_members_allowed: 2,
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
}
