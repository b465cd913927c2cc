//! HTTP service wiring.
//!
//! Exposes two endpoints:
//! - `/analyze` - fetch one page and return its extracted SEO report
//! - `/status` - JSON counters for uptime, requests, errors, and warnings
//!
//! Every response carries permissive CORS headers so browser front ends
//! on any origin can call the service directly.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use crate::config::Config;
use crate::fetch::init_client;
use handlers::{analyze_handler, preflight_handler, status_handler};
pub use types::AppState;

/// Builds the service and blocks serving requests until shutdown.
pub async fn serve(config: Config) -> Result<(), anyhow::Error> {
    let client = init_client(&config)?;
    let state = AppState::new(client);

    let app = Router::new()
        .route("/analyze", get(analyze_handler).options(preflight_handler))
        .route("/status", get(status_handler).options(preflight_handler))
        .with_state(state);

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind analysis server to {}: {}", addr, e))?;

    log::info!("Analysis server listening on http://{}/", addr);
    log::info!("  - Analyze: http://{}/analyze?url=example.com", addr);
    log::info!("  - Status: http://{}/status", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Analysis server error: {}", e))?;

    Ok(())
}
