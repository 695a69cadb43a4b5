//! # REST API HTTP Server
//!
//! Axum-based HTTP server wiring the handlers to the store and engine.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::executor::QueryExecutor;
use crate::normalizer::Normalizer;
use crate::store::ListingStore;

use super::config::ServerConfig;
use super::handlers::{
    create_location, create_room, delete_room, filter_listings, get_room, list_locations,
    list_rooms, rooms_in_location, update_room, ApiState,
};

/// REST API server
pub struct ApiServer<S> {
    state: Arc<ApiState<S>>,
    config: ServerConfig,
}

impl<S: ListingStore + 'static> ApiServer<S> {
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        let state = Arc::new(ApiState {
            executor: QueryExecutor::new(Arc::clone(&store)),
            normalizer: Normalizer::new(config.page_limits()),
            store,
        });
        Self { state, config }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/rooms/filter", post(filter_listings))
            .route("/api/rooms", get(list_rooms).post(create_room))
            .route(
                "/api/rooms/:id",
                get(get_room).patch(update_room).delete(delete_room),
            )
            .route("/api/rooms/location/:id", get(rooms_in_location))
            .route("/api/locations", get(list_locations).post(create_location))
            .layer(cors_layer(&self.config.cors_origins))
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.state))
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Binds and serves until the process exits.
pub async fn serve<S: ListingStore + 'static>(
    store: Arc<S>,
    config: ServerConfig,
) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let server = ApiServer::new(store, config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, server.router()).await
}
