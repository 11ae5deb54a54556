//!
//! Common types and utilities shared by the quote gateway and client.
//!
//! This crate aggregates:
//! - `error`: unified error type `QuoteError` used across the workspace.
//! - `result`: handy `Result<T, QuoteError>` alias.
//! - `quote`: the `NormalizedQuote` and `ErrorBody` JSON contract.
//! - `format`: fixed-precision, signed-percent and digit-grouping helpers.
//! - `net`: endpoint paths and default addresses.
#![warn(missing_docs)]
pub mod error;
pub mod format;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::{ErrorBody, NormalizedQuote};
pub use result::Result;
