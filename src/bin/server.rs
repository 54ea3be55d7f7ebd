//! Netpulse HTTP Server Binary
//!
//! Entry point for the outage-dashboard REST API server. It loads the
//! configuration, builds the OONI client and CSV store, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin netpulse-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `DATA_DIR`: Directory of per-city CSV files (default: data)
//! - `OONI_BASE_URL`: OONI API base URL (default: https://api.ooni.io)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use netpulse::config::ServerConfig;
use netpulse::data::FsSeriesStore;
use netpulse::http::{create_router, AppState};
use netpulse::ooni::OoniClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting Netpulse HTTP Server");

    let config = ServerConfig::load();
    info!(data_dir = %config.data_dir.display(), ooni = %config.ooni_base_url, "Configuration loaded");

    let store = Arc::new(FsSeriesStore::new(&config.data_dir));
    let ooni = Arc::new(OoniClient::new(
        &config.ooni_base_url,
        config.upstream_timeout(),
    )?);
    let state = AppState::new(store, ooni);

    let app = create_router(state, &config.data_dir);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
