//! # Request Handlers
//!
//! Thin translation between HTTP and the engine/store: extract, call,
//! wrap in the response envelope. No business logic lives here.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use crate::executor::QueryExecutor;
use crate::model::{Listing, ListingView, Location, LocationSummary};
use crate::normalizer::{FilterRequest, Normalizer};
use crate::store::{ListingPatch, ListingStore};

use super::errors::{ApiError, ApiResult};
use super::requests::{CreateListing, CreateLocation};
use super::response::{DataResponse, DeletedResponse, FilterResponse};

/// Shared per-request context.
pub(super) struct ApiState<S> {
    pub store: Arc<S>,
    pub executor: QueryExecutor<S>,
    pub normalizer: Normalizer,
}

pub(super) async fn filter_listings<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Json(request): Json<FilterRequest>,
) -> ApiResult<Json<FilterResponse>> {
    let spec = state.normalizer.normalize(&request)?;
    let envelope = state.executor.execute(&spec).await?;
    Ok(Json(FilterResponse::from(envelope)))
}

pub(super) async fn list_rooms<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
) -> ApiResult<Json<DataResponse<Vec<Listing>>>> {
    let listings = state.store.list_listings().await?;
    Ok(Json(DataResponse::new(listings)))
}

pub(super) async fn get_room<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DataResponse<ListingView>>> {
    let listing = state.store.get_listing(id).await?.ok_or(ApiError::NotFound)?;
    let location = state.store.get_location(listing.location_id).await?;
    let view = ListingView {
        listing,
        location: location.as_ref().map(LocationSummary::from),
    };
    Ok(Json(DataResponse::new(view)))
}

pub(super) async fn create_room<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Json(body): Json<CreateListing>,
) -> ApiResult<(StatusCode, Json<DataResponse<Listing>>)> {
    let listing = state.store.insert_listing(body.into_listing()).await?;
    info!(listing_id = %listing.id, "listing created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(listing))))
}

pub(super) async fn update_room<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ListingPatch>,
) -> ApiResult<Json<DataResponse<Listing>>> {
    let listing = state
        .store
        .update_listing(id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(DataResponse::new(listing)))
}

pub(super) async fn delete_room<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeletedResponse>> {
    if !state.store.delete_listing(id).await? {
        return Err(ApiError::NotFound);
    }
    info!(listing_id = %id, "listing deleted");
    Ok(Json(DeletedResponse::deleted()))
}

pub(super) async fn rooms_in_location<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DataResponse<Vec<Listing>>>> {
    // An unknown location legitimately yields an empty list
    let listings = state.store.listings_in_location(id).await?;
    Ok(Json(DataResponse::new(listings)))
}

pub(super) async fn list_locations<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
) -> ApiResult<Json<DataResponse<Vec<Location>>>> {
    let locations = state.store.list_locations().await?;
    Ok(Json(DataResponse::new(locations)))
}

pub(super) async fn create_location<S: ListingStore + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Json(body): Json<CreateLocation>,
) -> ApiResult<(StatusCode, Json<DataResponse<Location>>)> {
    let location = state.store.insert_location(body.into_location()).await?;
    info!(location_id = %location.id, name = %location.name, "location created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(location))))
}
