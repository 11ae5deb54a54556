//! Normalization of a provider quote into the public `NormalizedQuote`.
//!
//! Prices are re-rendered with two decimals, the change percent gets an
//! explicit sign, the volume is digit-grouped, and the symbol and trading day
//! are copied verbatim. Any numeric field that fails to parse makes the whole
//! quote an `UnexpectedUpstreamShape`.

use quote_common::format::{decimal_field, grouped_volume, signed_percent};
use quote_common::{NormalizedQuote, QuoteError};

use crate::error::GatewayError;
use crate::upstream::RawQuote;

/// Builds the display name for a symbol. No company-name lookup is made.
pub fn display_name(symbol: &str) -> String {
    format!("{} Corporation", symbol)
}

/// Converts a provider quote into the gateway's output contract.
pub fn normalize(raw: &RawQuote) -> Result<NormalizedQuote, GatewayError> {
    build(raw).map_err(|e| GatewayError::UnexpectedUpstreamShape(e.to_string()))
}

fn build(raw: &RawQuote) -> Result<NormalizedQuote, QuoteError> {
    Ok(NormalizedQuote {
        symbol: raw.symbol.clone(),
        name: display_name(&raw.symbol),
        price: decimal_field(&raw.price)?,
        change: decimal_field(&raw.change)?,
        change_percent: signed_percent(&raw.change_percent)?,
        volume: grouped_volume(&raw.volume)?,
        high: decimal_field(&raw.high)?,
        low: decimal_field(&raw.low)?,
        open: decimal_field(&raw.open)?,
        last_updated: raw.latest_trading_day.clone(),
    })
}
