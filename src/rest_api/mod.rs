//! REST API subsystem for roomlet
//!
//! Axum-based HTTP surface over the store and the query engine.
//!
//! # Endpoints
//!
//! - `POST /api/rooms/filter` — filtered search with pagination (the
//!   query engine's entry point)
//! - `GET/POST /api/rooms`, `GET/PATCH/DELETE /api/rooms/:id` — CRUD
//! - `GET /api/rooms/location/:id` — unfiltered listings for a location
//! - `GET/POST /api/locations`
//!
//! Responses mirror the `{ success, data, pagination? }` envelope; errors
//! carry `{ success: false, message, error? }` with the status class
//! decided by [`ApiError`].

mod config;
mod errors;
mod handlers;
mod requests;
mod response;
mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use requests::{CreateListing, CreateLocation};
pub use response::{DataResponse, DeletedResponse, FilterResponse};
pub use server::{serve, ApiServer};
