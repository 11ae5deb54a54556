//! HTTP surface of the gateway: `GET|OPTIONS /api/stock?symbol=<S>`.
//!
//! The handler checks its preconditions in a fixed order (method, preflight,
//! symbol, API key), performs one upstream call, and dispatches on the tagged
//! `UpstreamPayload`. Every response, including failures and preflight,
//! carries the same CORS header set and a JSON content type.
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use log::{error, info, warn};
use quote_common::NormalizedQuote;
use quote_common::net::STOCK_PATH;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::model::quote::normalize;
use crate::upstream::{QuoteProvider, UpstreamPayload};

/// Headers attached to every gateway response.
pub fn cors_headers() -> [(HeaderName, &'static str); 4] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
        (header::CONTENT_TYPE, "application/json"),
    ]
}

/// Serializes `body` as JSON with `status` and the CORS header set.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, cors_headers(), Json(body)).into_response()
}

fn preflight_response() -> Response {
    (StatusCode::OK, cors_headers(), "").into_response()
}

#[derive(Debug, Default, Deserialize)]
struct StockQuery {
    symbol: Option<String>,
}

/// Stateless quote lookup shared by all requests.
pub struct Gateway {
    provider: Arc<dyn QuoteProvider>,
    api_key: Option<String>,
}

impl Gateway {
    /// Creates a gateway. An absent or empty `api_key` is reported per
    /// request rather than at startup.
    pub fn new(provider: Arc<dyn QuoteProvider>, api_key: Option<String>) -> Self {
        Self { provider, api_key }
    }

    /// Looks up one symbol. Validation failures never reach the provider.
    pub async fn lookup(&self, symbol: Option<&str>) -> Result<NormalizedQuote, GatewayError> {
        let symbol = symbol
            .filter(|s| !s.is_empty())
            .ok_or(GatewayError::MissingSymbol)?;
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GatewayError::MissingServerConfig)?;

        info!("Fetching data for symbol: {}", symbol);

        let payload = self
            .provider
            .fetch_global_quote(symbol, api_key)
            .await
            .inspect_err(|e| error!("Error fetching stock data for {}: {:?}", symbol, e.details()))?;

        match payload {
            UpstreamPayload::WellFormedQuote(raw) => normalize(&raw),
            UpstreamPayload::ErrorMarker(message) => {
                warn!("Provider rejected symbol {}: {}", symbol, message);
                Err(GatewayError::InvalidSymbol)
            }
            UpstreamPayload::RateLimited(note) => {
                warn!("Provider rate limit hit: {}", note);
                Err(GatewayError::UpstreamRateLimited)
            }
            UpstreamPayload::EmptyQuote => Err(GatewayError::NoDataForSymbol),
            UpstreamPayload::Malformed(reason) => {
                error!("Unexpected upstream payload for {}: {}", symbol, reason);
                Err(GatewayError::UnexpectedUpstreamShape(reason))
            }
        }
    }
}

/// Builds the router serving the quote endpoint. All methods are routed to
/// the handler so that unsupported ones get the JSON 405 body.
pub fn router(gateway: Gateway) -> Router {
    Router::new()
        .route(STOCK_PATH, any(stock_handler))
        .with_state(Arc::new(gateway))
}

async fn stock_handler(
    State(gateway): State<Arc<Gateway>>,
    method: Method,
    query: Result<Query<StockQuery>, QueryRejection>,
) -> Response {
    if method != Method::GET && method != Method::OPTIONS {
        return GatewayError::MethodNotAllowed.into_response();
    }
    if method == Method::OPTIONS {
        return preflight_response();
    }

    let symbol = query.ok().and_then(|Query(q)| q.symbol);
    match gateway.lookup(symbol.as_deref()).await {
        Ok(quote) => json_response(StatusCode::OK, &quote),
        Err(e) => e.into_response(),
    }
}
