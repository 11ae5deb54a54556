//! Domain models for the quote gateway.
//!
//! - `quote`: turns a provider `RawQuote` into the public `NormalizedQuote`.

pub mod quote;
