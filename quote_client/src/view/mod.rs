//! View regions driven by the search controller.
//!
//! A host page exposes four regions: a loading indicator, the submit control,
//! an error banner and a result container. `QuoteView` is the handle the
//! controller writes to; hosts supply their own implementation.
//!
//! - `markup`: HTML rendering into in-memory regions, for browser-style hosts.
//! - `terminal`: line-oriented rendering to any `Write`.
use crate::model::quote::ResultCard;

pub mod markup;
pub mod terminal;

pub use markup::HtmlView;
pub use terminal::TerminalView;

/// Writable handles onto the host page's regions.
pub trait QuoteView {
    /// Shows or hides the loading indicator.
    fn set_loading(&mut self, visible: bool);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Shows the error banner with `message`.
    fn show_error(&mut self, message: &str);

    /// Hides the error banner.
    fn hide_error(&mut self);

    /// Writes the result card into the result container.
    fn render_result(&mut self, card: &ResultCard);

    /// Empties the result container.
    fn clear_result(&mut self);
}
