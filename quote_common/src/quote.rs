//! Quote payloads exchanged between the gateway and its clients.
//!
//! `NormalizedQuote` is the only shape a client may depend on: every value is
//! already formatted for display, so the client passes fields through
//! verbatim. Failures are reported as an `ErrorBody`.
use serde::{Deserialize, Serialize};

/// Display-ready quote for a single symbol, serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuote {
    /// Symbol as reported by the upstream provider.
    pub symbol: String,
    /// Company name. Currently synthesized as `"<symbol> Corporation"`.
    pub name: String,
    /// Last price, two decimals.
    pub price: String,
    /// Absolute change, two decimals, sign only when negative.
    pub change: String,
    /// Relative change, always signed, with a trailing `%`.
    pub change_percent: String,
    /// Session volume with comma digit grouping.
    pub volume: String,
    /// Session high, two decimals.
    pub high: String,
    /// Session low, two decimals.
    pub low: String,
    /// Session open, two decimals.
    pub open: String,
    /// Latest trading day, verbatim from the provider.
    pub last_updated: String,
}

/// JSON error reply: `{"error": "...", "details": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message shown to the user.
    pub error: String,
    /// Optional diagnostic detail; omitted from the JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    /// Creates an error body without details.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Creates an error body carrying diagnostic details.
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn normalized_quote_uses_camel_case_keys() {
        let quote = NormalizedQuote {
            symbol: "IBM".to_string(),
            name: "IBM Corporation".to_string(),
            price: "182.52".to_string(),
            change: "-1.03".to_string(),
            change_percent: "-0.56%".to_string(),
            volume: "3,512,776".to_string(),
            high: "184.10".to_string(),
            low: "181.75".to_string(),
            open: "183.40".to_string(),
            last_updated: "2024-05-03".to_string(),
        };

        let value: Value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["changePercent"], "-0.56%");
        assert_eq!(value["lastUpdated"], "2024-05-03");
        assert!(value.get("change_percent").is_none());
    }

    #[test]
    fn error_body_omits_missing_details() {
        let body = serde_json::to_value(ErrorBody::new("Method not allowed")).unwrap();
        assert_eq!(body, json!({ "error": "Method not allowed" }));

        let body = serde_json::to_value(ErrorBody::with_details("Failed to fetch stock data", "timeout")).unwrap();
        assert_eq!(body, json!({ "error": "Failed to fetch stock data", "details": "timeout" }));
    }

    #[test]
    fn error_body_decodes_without_details() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Invalid stock symbol"}"#).unwrap();
        assert_eq!(body.error, "Invalid stock symbol");
        assert_eq!(body.details, None);
    }
}
