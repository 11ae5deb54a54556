//! Quote Gateway server.
//!
//! Serves `GET /api/stock?symbol=<S>` by forwarding the symbol to the
//! market-data provider and answering with a normalized JSON quote. The
//! provider API key is read from `ALPHA_VANTAGE_API_KEY` (or `.env`) and
//! never leaves the server.
//!
//! Usage example (CLI):
//! ```bash
//! ALPHA_VANTAGE_API_KEY=... quote_gateway --bind 0.0.0.0:8888
//! ```
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use quote_common::{QuoteError, Result};
use quote_gateway::{AlphaVantageClient, Gateway, GatewayConfig, router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    dotenv::dotenv().ok();
    init_logger();
    let config = GatewayConfig::parse();

    if config.api_key.as_deref().is_none_or(str::is_empty) {
        warn!("ALPHA_VANTAGE_API_KEY is not set; quote requests will fail until it is configured");
    }

    let provider = AlphaVantageClient::new(config.upstream_url.clone(), config.upstream_timeout())
        .map_err(|e| QuoteError::Transport(format!("Failed to build upstream client: {}", e)))?;
    let gateway = Gateway::new(Arc::new(provider), config.api_key.clone());

    let listener = TcpListener::bind(&config.bind).await?;
    info!("Quote gateway listening on: {}", listener.local_addr()?);
    info!("Upstream provider: {}", config.upstream_url);

    axum::serve(listener, router(gateway)).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
