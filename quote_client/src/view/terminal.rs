//! Line-oriented view for terminal hosts.
//!
//! Regions map to printed lines: the loading indicator prints once when shown,
//! the error banner prints its message, and the result card prints as a small
//! table. The submit control has no terminal counterpart.
use std::io::Write;

use log::{debug, warn};

use crate::model::quote::ResultCard;
use crate::view::QuoteView;

/// Renders view updates to `out`.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    /// Wraps a writer such as `io::stdout()`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> QuoteView for TerminalView<W> {
    fn set_loading(&mut self, visible: bool) {
        if visible {
            self.print("Loading...");
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        debug!("Submit enabled: {}", enabled);
    }

    fn show_error(&mut self, message: &str) {
        self.print(&format!("❌ {}", message));
    }

    fn hide_error(&mut self) {}

    fn render_result(&mut self, card: &ResultCard) {
        let text = format!(
            "{symbol} - {name}\n\
             Price     ${price}\n\
             Change    {icon} {change} ({percent})\n\
             Volume    {volume}\n\
             Day High  ${high}\n\
             Day Low   ${low}\n\
             Open      ${open}\n\
             Updated   {updated}",
            symbol = card.symbol,
            name = card.name,
            price = card.price,
            icon = card.polarity.icon(),
            change = card.change,
            percent = card.change_percent,
            volume = card.volume,
            high = card.high,
            low = card.low,
            open = card.open,
            updated = card.last_updated,
        );
        self.print(&text);
    }

    fn clear_result(&mut self) {}
}
