//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quote_common::net::{GATEWAY_PORT, addr};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Looks up stock quotes through the quote gateway", long_about = None)]
pub struct Args {
    /// Base URL of the quote gateway.
    #[clap(long, env = "QUOTE_GATEWAY_URL", default_value_t = format!("http://{}", addr("127.0.0.1", GATEWAY_PORT)))]
    pub gateway_url: String,

    /// Seconds to wait for the gateway before giving up on a search.
    #[clap(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Look up a single symbol and exit instead of reading symbols from stdin.
    #[clap(long)]
    pub symbol: Option<String>,
}

impl Args {
    /// Gateway request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
