//! HTTP router assembly.

use crate::ingestion::handlers::handle_ingest;
use crate::search::handlers::handle_search;
use crate::storage::memory::ProductStore;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Extension},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

pub const ENDPOINT_INGEST: &str = "/api/ingest";
pub const ENDPOINT_SEARCH: &str = "/api/search";

/// Builds the service router around a shared store.
pub fn create_app(store: Arc<ProductStore>) -> Router {
    let routes = Router::new()
        .route(ENDPOINT_INGEST, post(handle_ingest))
        .route(ENDPOINT_SEARCH, get(handle_search));

    with_service_layers(routes, store)
}

/// Wraps `routes` in the layers every endpoint shares.
///
/// Ingest bodies are unbounded. Every origin is allowed. A panicking handler
/// yields a 500 instead of taking the connection down.
pub fn with_service_layers(routes: Router, store: Arc<ProductStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(DefaultBodyLimit::disable())
        .layer(Extension(store))
        .layer(CatchPanicLayer::new())
        .layer(cors)
}
