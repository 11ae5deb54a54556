//! Command-line and environment configuration for the Quote Gateway.
//!
//! Every flag can also be supplied through the environment, which is how the
//! hosting platform injects the provider API key. A `.env` file in the working
//! directory is loaded before parsing.
use std::time::Duration;

use clap::Parser;
use quote_common::net::{GATEWAY_PORT, addr};

use crate::upstream::DEFAULT_UPSTREAM_URL;

/// Parsed gateway configuration.
#[derive(Debug, Parser)]
#[command(version, about = "HTTP gateway serving single-symbol stock quotes", long_about = None)]
pub struct GatewayConfig {
    /// Socket address to listen on.
    #[clap(long, env = "QUOTE_GATEWAY_BIND", default_value_t = addr("0.0.0.0", GATEWAY_PORT))]
    pub bind: String,

    /// Upstream market-data endpoint.
    #[clap(long, env = "ALPHA_VANTAGE_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Seconds to wait for the upstream provider before failing the request.
    #[clap(long, env = "ALPHA_VANTAGE_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,

    /// Provider API key. Never sent to clients.
    #[clap(long, env = "ALPHA_VANTAGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl GatewayConfig {
    /// Upstream request timeout.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
