//! roomlet - room and flat listing backend
//!
//! The core is a filtered-search-and-pagination query engine: a
//! normalizer that canonicalizes raw filter requests, a planner that
//! turns specs into predicate/sort/window plans, and an executor that
//! runs them against a document store and assembles paginated result
//! envelopes. A thin axum REST surface sits on top.

pub mod cli;
pub mod executor;
pub mod model;
pub mod normalizer;
pub mod planner;
pub mod rest_api;
pub mod store;
