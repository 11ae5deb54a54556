//! Outbound calls to the market-data provider.
//!
//! `QuoteProvider` is the seam the gateway depends on; `AlphaVantageClient`
//! is the production implementation issuing
//! `GET <base>?function=GLOBAL_QUOTE&symbol=<S>&apikey=<KEY>`.
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::error::GatewayError;

pub mod payload;

pub use payload::{RawQuote, UpstreamPayload};

/// Provider endpoint used when none is configured.
pub const DEFAULT_UPSTREAM_URL: &str = "https://www.alphavantage.co/query";
/// Provider function returning the latest quote for one symbol.
pub const GLOBAL_QUOTE: &str = "GLOBAL_QUOTE";

/// Source of raw quote payloads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Performs exactly one upstream request for `symbol`.
    ///
    /// Returns `GatewayError::UpstreamTransportFailure` when no JSON payload
    /// could be obtained; everything else is reported through the payload
    /// variant.
    async fn fetch_global_quote(&self, symbol: &str, api_key: &str) -> Result<UpstreamPayload, GatewayError>;
}

/// `reqwest`-backed provider client.
pub struct AlphaVantageClient {
    http: reqwest::Client,
    base_url: String,
}

impl AlphaVantageClient {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    async fn fetch_global_quote(&self, symbol: &str, api_key: &str) -> Result<UpstreamPayload, GatewayError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("function", GLOBAL_QUOTE), ("symbol", symbol), ("apikey", api_key)])
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamTransportFailure(format!(
                "Upstream provider responded with {}",
                status.as_u16()
            )));
        }

        let body: Value = response.json().await.map_err(transport_failure)?;
        debug!("Upstream body for {}: {}", symbol, body);
        Ok(UpstreamPayload::classify(body))
    }
}

fn transport_failure(e: reqwest::Error) -> GatewayError {
    // reqwest's Display includes the full URL, which carries the API key.
    let reason = if e.is_timeout() {
        "Upstream provider timed out".to_string()
    } else if e.is_decode() {
        "Upstream provider returned an unreadable body".to_string()
    } else {
        format!("Upstream request failed: {}", e.without_url())
    };
    GatewayError::UpstreamTransportFailure(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> AlphaVantageClient {
        AlphaVantageClient::new(format!("{}/query", server.url()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn sends_global_quote_query_and_classifies_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/query")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("function".into(), "GLOBAL_QUOTE".into()),
                Matcher::UrlEncoded("symbol".into(), "IBM".into()),
                Matcher::UrlEncoded("apikey".into(), "demo".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "Global Quote": {} }).to_string())
            .create_async()
            .await;

        let payload = client_for(&server).fetch_global_quote("IBM", "demo").await.unwrap();

        mock.assert_async().await;
        assert_eq!(payload, UpstreamPayload::EmptyQuote);
    }

    #[tokio::test]
    async fn non_success_status_is_transport_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/query")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let err = client_for(&server).fetch_global_quote("IBM", "demo").await.unwrap_err();

        assert_eq!(
            err,
            GatewayError::UpstreamTransportFailure("Upstream provider responded with 503".to_string())
        );
    }

    #[tokio::test]
    async fn non_json_body_is_transport_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/query")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = client_for(&server).fetch_global_quote("IBM", "demo").await.unwrap_err();

        assert!(matches!(err, GatewayError::UpstreamTransportFailure(_)));
    }

    #[tokio::test]
    async fn silent_upstream_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let silent = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });
        let client = AlphaVantageClient::new(format!("http://{}/query", addr), Duration::from_millis(200)).unwrap();

        let err = client.fetch_global_quote("IBM", "secret-key-123").await.unwrap_err();
        silent.abort();

        assert_eq!(
            err,
            GatewayError::UpstreamTransportFailure("Upstream provider timed out".to_string())
        );
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.details().unwrap_or_default().contains("secret-key-123"));
    }

    #[tokio::test]
    async fn symbol_is_forwarded_without_normalization() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/query")
            .match_query(Matcher::UrlEncoded("symbol".into(), "brk.b".into()))
            .with_status(200)
            .with_body(json!({ "Error Message": "Invalid API call." }).to_string())
            .create_async()
            .await;

        let payload = client_for(&server).fetch_global_quote("brk.b", "demo").await.unwrap();

        mock.assert_async().await;
        assert!(matches!(payload, UpstreamPayload::ErrorMarker(_)));
    }
}
