// ABOUTME: Binary entry point for the Doogle crawl service.
// ABOUTME: Initializes tracing, builds the shared extractor, and serves the router on PORT.

use std::net::SocketAddr;
use std::sync::Arc;

use doogle_extract::Extractor;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let extractor = Arc::new(Extractor::builder().build());
    let app = doogle_server::app(extractor);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "crawl service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
