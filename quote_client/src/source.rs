//! Fetching quotes from the gateway over HTTP.
//!
//! `QuoteSource` is the seam the controller depends on. `GatewayClient` calls
//! `GET <gateway>/api/stock?symbol=<S>` and turns every failure into a
//! `QuoteError` whose `Display` is the message to show the user.
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use quote_common::net::{SYMBOL_PARAM, stock_url};
use quote_common::{ErrorBody, NormalizedQuote, QuoteError};

/// Message used when a failed response carries no usable `error` field.
pub const BACKEND_ERROR: &str = "Backend error";

/// Source of normalized quotes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetches the quote for an already validated, upper-cased symbol.
    async fn fetch_quote(&self, symbol: &str) -> Result<NormalizedQuote, QuoteError>;
}

/// HTTP client for the quote gateway.
pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GatewayClient {
    /// Creates a client for the gateway at `base_url` (e.g.
    /// `http://127.0.0.1:8888`). Requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, QuoteError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;
        Ok(Self {
            http,
            endpoint: stock_url(base_url),
        })
    }

    /// Absolute URL of the quote endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QuoteSource for GatewayClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<NormalizedQuote, QuoteError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[(SYMBOL_PARAM, symbol)])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        debug!("Gateway answered {} for {}", status, symbol);
        if status.is_success() {
            return response.json::<NormalizedQuote>().await.map_err(transport);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| BACKEND_ERROR.to_string());
        Err(QuoteError::Gateway(message))
    }
}

fn transport(e: reqwest::Error) -> QuoteError {
    QuoteError::Transport(e.without_url().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> GatewayClient {
        GatewayClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_appends_stock_path() {
        let client = GatewayClient::new("http://localhost:8888/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8888/api/stock");
    }

    #[tokio::test]
    async fn success_decodes_normalized_quote() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/stock")
            .match_query(Matcher::UrlEncoded("symbol".into(), "IBM".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "symbol": "IBM",
                    "name": "IBM Corporation",
                    "price": "182.52",
                    "change": "-1.03",
                    "changePercent": "-0.56%",
                    "volume": "3,512,776",
                    "high": "184.10",
                    "low": "181.75",
                    "open": "183.40",
                    "lastUpdated": "2024-05-03"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let quote = client_for(&server).fetch_quote("IBM").await.unwrap();

        mock.assert_async().await;
        assert_eq!(quote.symbol, "IBM");
        assert_eq!(quote.change_percent, "-0.56%");
    }

    #[tokio::test]
    async fn failure_uses_gateway_error_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/stock")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(json!({ "error": "API rate limit exceeded. Please try again later." }).to_string())
            .create_async()
            .await;

        let err = client_for(&server).fetch_quote("IBM").await.unwrap_err();

        assert_eq!(err.to_string(), "API rate limit exceeded. Please try again later.");
    }

    #[tokio::test]
    async fn failure_without_error_field_is_backend_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/stock")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let err = client_for(&server).fetch_quote("IBM").await.unwrap_err();

        assert!(matches!(&err, QuoteError::Gateway(message) if message == BACKEND_ERROR));
    }

    #[tokio::test]
    async fn unreachable_gateway_is_transport_error() {
        let client = GatewayClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

        let err = client.fetch_quote("IBM").await.unwrap_err();

        assert!(matches!(err, QuoteError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
