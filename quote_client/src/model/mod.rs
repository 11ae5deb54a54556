//! Data model types used by the client.
//!
//! - `quote`: the display-ready `ResultCard` derived from a gateway quote,
//!   and its change `Polarity`.
pub mod quote;
