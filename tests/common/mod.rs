//! Shared fixtures for integration tests.

use std::sync::Arc;

use serde_json::{json, Value};
use uuid::Uuid;

use roomlet::executor::{QueryExecutor, ResultEnvelope};
use roomlet::model::{Listing, Location};
use roomlet::normalizer::{FilterRequest, Normalizer};
use roomlet::rest_api::{CreateListing, CreateLocation};
use roomlet::store::{ListingStore, MemoryStore};

/// A fresh store with one location to scope queries to.
pub async fn store_with_location() -> (Arc<MemoryStore>, Location) {
    let store = Arc::new(MemoryStore::new());
    let location: CreateLocation = serde_json::from_value(json!({
        "name": "Kakkanad",
        "city": "Kochi"
    }))
    .unwrap();
    let location = store.insert_location(location.into_location()).await.unwrap();
    (store, location)
}

/// Inserts a listing built from a base payload merged with `overrides`.
pub async fn add_listing(store: &Arc<MemoryStore>, location_id: Uuid, overrides: Value) -> Listing {
    let mut body = json!({
        "locationId": location_id,
        "title": "Room",
        "size": "Single Room",
        "propertyType": "Room",
        "furnishingStatus": "Semi-furnished",
        "rent": 6000,
        "securityDeposit": 12000
    });
    if let (Some(base), Some(extra)) = (body.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    let listing: CreateListing = serde_json::from_value(body).unwrap();
    store.insert_listing(listing.into_listing()).await.unwrap()
}

/// Runs a raw filter request through the whole engine.
pub async fn search(store: &Arc<MemoryStore>, body: Value) -> ResultEnvelope {
    let request: FilterRequest = serde_json::from_value(body).unwrap();
    let spec = Normalizer::default().normalize(&request).unwrap();
    QueryExecutor::new(Arc::clone(store))
        .execute(&spec)
        .await
        .unwrap()
}

/// Ids of the returned page, in order.
pub fn page_ids(envelope: &ResultEnvelope) -> Vec<Uuid> {
    envelope.data.iter().map(|view| view.listing.id).collect()
}
