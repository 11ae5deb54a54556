//! Quote Client library.
//!
//! The search flow lives in [`controller::SearchController`]: it validates the
//! typed symbol, fetches the quote through a [`source::QuoteSource`] and drives
//! a [`view::QuoteView`] through the idle, loading, result and error states.
#![warn(missing_docs)]
pub mod args;
pub mod controller;
pub mod model;
pub mod source;
pub mod view;

pub use args::Args;
pub use controller::{Disposition, Key, SearchController, SearchState, UiEvent};
pub use model::quote::{Polarity, ResultCard};
pub use source::{GatewayClient, QuoteSource};
pub use view::{HtmlView, QuoteView, TerminalView};
