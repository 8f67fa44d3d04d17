// ABOUTME: Router construction for the crawl service.
// ABOUTME: Wires the crawl and health handlers with CORS and request tracing layers.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use doogle_extract::Extractor;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the application router around a shared extractor.
///
/// CORS is permissive: the browser front end calls this service cross-origin.
pub fn app(extractor: Arc<Extractor>) -> Router {
    Router::new()
        .route("/api/crawl", post(handlers::crawl))
        .route("/healthz", get(handlers::health))
        .layer(Extension(extractor))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
