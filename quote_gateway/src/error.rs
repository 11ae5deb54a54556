//! Gateway failure taxonomy.
//!
//! Every way a quote request can fail maps to exactly one HTTP status and one
//! `ErrorBody`. The `Display` text of each variant is the `error` message the
//! client will show, so it is part of the public contract.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quote_common::ErrorBody;
use thiserror::Error;

use crate::handler::json_response;

/// Terminal failure for the current request. None of these are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Request method other than GET or OPTIONS.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// `symbol` query parameter missing or empty.
    #[error("Stock symbol is required")]
    MissingSymbol,

    /// No upstream API key in the server configuration.
    #[error("API key not configured on server")]
    MissingServerConfig,

    /// The upstream call failed before yielding a JSON payload.
    #[error("Failed to fetch stock data")]
    UpstreamTransportFailure(String),

    /// The provider flagged the symbol as invalid.
    #[error("Invalid stock symbol")]
    InvalidSymbol,

    /// The provider reported a rate-limit note.
    #[error("API rate limit exceeded. Please try again later.")]
    UpstreamRateLimited,

    /// The provider returned no quote object, or an empty one.
    #[error("No data found for this symbol")]
    NoDataForSymbol,

    /// The quote object was present but could not be decoded.
    #[error("Failed to fetch stock data")]
    UnexpectedUpstreamShape(String),
}

impl GatewayError {
    /// HTTP status reported for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::MissingSymbol => StatusCode::BAD_REQUEST,
            GatewayError::MissingServerConfig
            | GatewayError::UpstreamTransportFailure(_)
            | GatewayError::UnexpectedUpstreamShape(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidSymbol | GatewayError::NoDataForSymbol => StatusCode::NOT_FOUND,
            GatewayError::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Diagnostic detail, present only for upstream failures.
    pub fn details(&self) -> Option<&str> {
        match self {
            GatewayError::UpstreamTransportFailure(details)
            | GatewayError::UnexpectedUpstreamShape(details) => Some(details),
            _ => None,
        }
    }

    /// JSON body sent to the caller.
    pub fn to_body(&self) -> ErrorBody {
        match self.details() {
            Some(details) => ErrorBody::with_details(self.to_string(), details),
            None => ErrorBody::new(self.to_string()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        json_response(self.status(), &self.to_body())
    }
}
