//! Decoding of the provider's `GLOBAL_QUOTE` reply.
//!
//! The provider answers with HTTP 200 for almost everything, signalling
//! problems through marker fields in the JSON body. `UpstreamPayload::classify`
//! turns the body into one tagged variant so the gateway never probes fields
//! ad hoc.
use serde::Deserialize;
use serde_json::Value;

/// Marker set when the provider does not recognise the symbol.
pub const ERROR_MARKER: &str = "Error Message";
/// Marker set when the caller exceeded the provider's call frequency.
pub const RATE_LIMIT_MARKER: &str = "Note";
/// Key holding the quote object.
pub const QUOTE_KEY: &str = "Global Quote";

/// Quote object for one symbol, as sent by the provider. All values are text.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: String,
    #[serde(rename = "02. open")]
    pub open: String,
    #[serde(rename = "03. high")]
    pub high: String,
    #[serde(rename = "04. low")]
    pub low: String,
    #[serde(rename = "05. price")]
    pub price: String,
    #[serde(rename = "06. volume")]
    pub volume: String,
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: String,
    #[serde(rename = "09. change")]
    pub change: String,
    #[serde(rename = "10. change percent")]
    pub change_percent: String,
}

/// Outcome of decoding one provider reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamPayload {
    /// A complete quote object.
    WellFormedQuote(RawQuote),
    /// The provider rejected the symbol; carries its message.
    ErrorMarker(String),
    /// The provider is throttling us; carries its note.
    RateLimited(String),
    /// No quote object, or an empty one.
    EmptyQuote,
    /// The quote object exists but does not have the expected shape.
    Malformed(String),
}

impl UpstreamPayload {
    /// Classifies a decoded JSON body. Markers take precedence over the quote
    /// object, the error marker over the rate-limit marker. A marker only
    /// counts when it carries a value: `null`, `false`, `0` and `""` are
    /// treated as absent.
    pub fn classify(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return UpstreamPayload::Malformed("upstream body is not a JSON object".to_string());
        };

        if let Some(message) = fields.get(ERROR_MARKER).filter(|v| is_set(v)) {
            return UpstreamPayload::ErrorMarker(marker_text(message));
        }
        if let Some(note) = fields.get(RATE_LIMIT_MARKER).filter(|v| is_set(v)) {
            return UpstreamPayload::RateLimited(marker_text(note));
        }

        match fields.remove(QUOTE_KEY) {
            None | Some(Value::Null) => UpstreamPayload::EmptyQuote,
            Some(Value::Object(quote)) if quote.is_empty() => UpstreamPayload::EmptyQuote,
            Some(quote) => match serde_json::from_value::<RawQuote>(quote) {
                Ok(raw) => UpstreamPayload::WellFormedQuote(raw),
                Err(e) => UpstreamPayload::Malformed(format!("unexpected quote shape: {}", e)),
            },
        }
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn marker_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
