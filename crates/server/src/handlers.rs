// ABOUTME: Request handlers for the crawl service.
// ABOUTME: Maps extractor outcomes onto the wire contract: 200 with content, 400 for missing URL, 500 otherwise.

use std::sync::Arc;

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use doogle_extract::Extractor;
use serde::Deserialize;
use tracing::warn;

/// Body of `POST /api/crawl`.
#[derive(Debug, Deserialize)]
pub struct CrawlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Handle `POST /api/crawl`.
///
/// A missing or empty `url` is rejected up front with 400 before any fetch is
/// attempted. Every extraction failure becomes a 500 with the underlying
/// error text; the caller treats that as "content unavailable for this URL"
/// and falls back to its search-result snippet.
pub async fn crawl(
    Extension(extractor): Extension<Arc<Extractor>>,
    Json(payload): Json<CrawlRequest>,
) -> impl IntoResponse {
    let url = match payload.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Missing URL" })),
            )
                .into_response();
        }
    };

    match extractor.extract(&url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            warn!(url = %url, error = %e, "crawl failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Failed to crawl URL",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
