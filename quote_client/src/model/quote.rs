//! Result card contents derived from a gateway quote.
//!
//! The gateway already formats every field. The only thing the client derives
//! is the direction of the move: a sign prefix on the change and a polarity
//! that selects the card's colour class and icon.
use quote_common::NormalizedQuote;
use quote_common::format::parse_decimal;
use strum_macros::Display;

/// Direction of the day's move. Displays as the CSS class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Polarity {
    /// Change is zero or positive.
    Positive,
    /// Change is negative or not a number.
    Negative,
}

impl Polarity {
    /// Classifies a formatted change value. Zero counts as positive.
    pub fn of_change(change: &str) -> Self {
        match parse_decimal(change) {
            Ok(value) if value >= 0.0 => Polarity::Positive,
            _ => Polarity::Negative,
        }
    }

    /// Trend icon shown next to the change.
    pub fn icon(self) -> &'static str {
        match self {
            Polarity::Positive => "📈",
            Polarity::Negative => "📉",
        }
    }
}

/// Everything the result card shows for one quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name, or the symbol when the gateway sent none.
    pub name: String,
    /// Last price, without currency sign.
    pub price: String,
    /// Change with an explicit `+` for non-negative moves.
    pub change: String,
    /// Signed change percent, verbatim from the gateway.
    pub change_percent: String,
    /// Grouped volume, verbatim.
    pub volume: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Session open.
    pub open: String,
    /// Latest trading day.
    pub last_updated: String,
    /// Direction of the move.
    pub polarity: Polarity,
}

impl From<NormalizedQuote> for ResultCard {
    fn from(quote: NormalizedQuote) -> Self {
        let polarity = Polarity::of_change(&quote.change);
        let change = match polarity {
            Polarity::Positive if !quote.change.starts_with('+') => format!("+{}", quote.change),
            _ => quote.change,
        };
        let name = if quote.name.is_empty() {
            quote.symbol.clone()
        } else {
            quote.name
        };

        ResultCard {
            symbol: quote.symbol,
            name,
            price: quote.price,
            change,
            change_percent: quote.change_percent,
            volume: quote.volume,
            high: quote.high,
            low: quote.low,
            open: quote.open,
            last_updated: quote.last_updated,
            polarity,
        }
    }
}
