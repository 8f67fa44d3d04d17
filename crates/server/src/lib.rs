// ABOUTME: Library entry point for the Doogle crawl service.
// ABOUTME: Exposes the router construction so integration tests can drive it in-process.

//! HTTP front for the Doogle content extractor.
//!
//! A single endpoint, `POST /api/crawl`, takes `{"url": "..."}` and answers
//! with the page's extracted main content. Callers that enrich several search
//! results invoke it once per URL; concurrency policy lives with the caller.

pub mod handlers;
pub mod routes;

pub use crate::routes::app;
