//! Storage subsystem for roomlet
//!
//! The store owns listings and locations and answers plan-shaped queries
//! (predicate + sort + skip/limit pushed down, the way a document store
//! evaluates them server-side). Durability and replication are the
//! storage engine's concern, not modeled here.
//!
//! # Invariants
//!
//! - A listing's location must exist at write time
//! - Location names are unique
//! - `allowed_for` is restored to `["Mixed"]` whenever a write would
//!   leave it empty

mod errors;
mod memory;
mod patch;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use patch::ListingPatch;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Listing, Location};
use crate::planner::QueryPlan;

/// Document-store operations over listings and locations.
///
/// All reads are independent; no method holds state across calls. The
/// count and fetch halves of a search may be issued concurrently against
/// the same plan.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Total number of listings matching the plan's predicates,
    /// ignoring skip/limit.
    async fn count_matches(&self, plan: &QueryPlan) -> StoreResult<u64>;

    /// The sorted page of listings selected by the plan's predicates
    /// and window. Returns at most `plan.limit` records.
    async fn fetch_page(&self, plan: &QueryPlan) -> StoreResult<Vec<Listing>>;

    async fn get_listing(&self, id: Uuid) -> StoreResult<Option<Listing>>;
    async fn list_listings(&self) -> StoreResult<Vec<Listing>>;
    async fn listings_in_location(&self, location_id: Uuid) -> StoreResult<Vec<Listing>>;
    async fn insert_listing(&self, listing: Listing) -> StoreResult<Listing>;
    async fn update_listing(&self, id: Uuid, patch: ListingPatch) -> StoreResult<Option<Listing>>;
    async fn delete_listing(&self, id: Uuid) -> StoreResult<bool>;

    async fn get_location(&self, id: Uuid) -> StoreResult<Option<Location>>;
    async fn list_locations(&self) -> StoreResult<Vec<Location>>;
    async fn insert_location(&self, location: Location) -> StoreResult<Location>;
}
