//! Search controller: the client's single piece of mutable state.
//!
//! The controller owns whether a search is in flight and keeps the view in
//! exactly one of three visual states: idle/result, loading, or error.
//!
//! ```text
//!   Idle ──submit──▶ Loading ──ok──▶ Result ──submit──▶ Loading ...
//!                      │
//!                      └──err──▶ Error ──submit──▶ Loading ...
//! ```
//!
//! An empty symbol never reaches the network and goes straight to Error.
//! Leaving Loading always re-enables submit and hides the spinner. A trigger
//! arriving while Loading is dropped, not queued.
use log::{debug, error, info};
use quote_common::{NormalizedQuote, QuoteError};

use crate::model::quote::ResultCard;
use crate::source::QuoteSource;
use crate::view::QuoteView;

/// Banner text for an empty symbol.
pub const EMPTY_SYMBOL_MESSAGE: &str = "Please enter a stock symbol";

/// Current visual state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// Nothing searched yet.
    Idle,
    /// A request for the contained symbol is in flight.
    Loading(String),
    /// The last search succeeded.
    Result(ResultCard),
    /// The last search failed with the contained message.
    Error(String),
}

/// Key pressed in the symbol field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter/Return.
    Enter,
    /// Any other key.
    Char(char),
}

/// User interaction with the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent<'a> {
    /// The form was submitted with `input` in the symbol field.
    Submit {
        /// Raw field contents.
        input: &'a str,
    },
    /// A key was pressed in the symbol field.
    KeyPress {
        /// The key.
        key: Key,
        /// Raw field contents.
        input: &'a str,
    },
}

/// What the host should do with the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The controller handled the event; suppress the default action so an
    /// Enter keypress does not also submit the form.
    PreventDefault,
    /// Not ours; let the default action run.
    PassThrough,
}

/// Trims and upper-cases raw field input.
pub fn normalize_symbol(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Coordinates one search at a time between a quote source and a view.
pub struct SearchController<S, V> {
    source: S,
    view: V,
    state: SearchState,
}

impl<S: QuoteSource, V: QuoteView> SearchController<S, V> {
    /// Creates a controller in the Idle state.
    pub fn new(source: S, view: V) -> Self {
        Self {
            source,
            view,
            state: SearchState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The view handle.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Whether a search is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading(_))
    }

    /// Routes a form event. Submit and Enter are equivalent triggers; other
    /// keys pass through untouched.
    pub async fn dispatch(&mut self, event: UiEvent<'_>) -> Disposition {
        match event {
            UiEvent::Submit { input } | UiEvent::KeyPress { key: Key::Enter, input } => {
                self.search(input).await;
                Disposition::PreventDefault
            }
            UiEvent::KeyPress { key: Key::Char(_), .. } => Disposition::PassThrough,
        }
    }

    /// Runs one full search for raw `input`.
    pub async fn search(&mut self, input: &str) {
        let Some(symbol) = self.begin_search(input) else {
            return;
        };
        let outcome = self.source.fetch_quote(&symbol).await;
        self.finish_search(outcome);
    }

    /// Validates `input` and enters Loading. Returns the symbol to fetch, or
    /// `None` when nothing should be requested (empty input, or a search is
    /// already in flight).
    pub fn begin_search(&mut self, input: &str) -> Option<String> {
        if self.is_loading() {
            debug!("Search already in flight; ignoring submit");
            return None;
        }

        let symbol = normalize_symbol(input);
        if symbol.is_empty() {
            self.show_error(EMPTY_SYMBOL_MESSAGE);
            return None;
        }

        info!("Searching for symbol: {}", symbol);
        self.view.set_loading(true);
        self.view.set_submit_enabled(false);
        self.view.hide_error();
        self.view.clear_result();
        self.state = SearchState::Loading(symbol.clone());
        Some(symbol)
    }

    /// Leaves Loading with the fetch outcome. Ignored when no search is in
    /// flight.
    pub fn finish_search(&mut self, outcome: Result<NormalizedQuote, QuoteError>) {
        if !self.is_loading() {
            debug!("No search in flight; dropping outcome");
            return;
        }

        self.view.set_loading(false);
        self.view.set_submit_enabled(true);

        match outcome {
            Ok(quote) => {
                debug!("Stock data received: {:?}", quote);
                let card = ResultCard::from(quote);
                self.view.render_result(&card);
                self.state = SearchState::Result(card);
            }
            Err(e) => {
                error!("Search error: {}", e);
                self.show_error(&e.to_string());
            }
        }
    }

    fn show_error(&mut self, message: &str) {
        self.view.clear_result();
        self.view.show_error(message);
        self.state = SearchState::Error(message.to_string());
    }
}
