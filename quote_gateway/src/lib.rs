//! Quote Gateway library.
//!
//! A stateless HTTP front for the market-data provider. It shields the
//! provider's API key and response shape from clients:
//!
//! - `config`: CLI/environment configuration (`GatewayConfig`).
//! - `upstream`: the `QuoteProvider` seam, the `reqwest` client, and the
//!   tagged decoding of provider replies.
//! - `model`: normalization of a provider quote into `NormalizedQuote`.
//! - `error`: the `GatewayError` taxonomy and its HTTP mapping.
//! - `handler`: the axum router for `/api/stock`.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod upstream;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use handler::{Gateway, router};
pub use upstream::{AlphaVantageClient, QuoteProvider};
