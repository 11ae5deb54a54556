//! Quote Client: looks up stock quotes through the quote gateway and prints
//! them to the terminal.
//!
//! Each line typed on stdin is one search, as if Enter had been pressed in the
//! symbol field. With `--symbol` a single search runs and the client exits.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --gateway-url http://127.0.0.1:8888
//! quote_client --symbol IBM
//! ```
use std::io;

use clap::Parser;
use log::info;
use quote_client::{Args, GatewayClient, Key, SearchController, SearchState, TerminalView, UiEvent};
use quote_common::{QuoteError, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let source = GatewayClient::new(&args.gateway_url, args.timeout())?;
    info!("Using gateway endpoint: {}", source.endpoint());
    let mut controller = SearchController::new(source, TerminalView::new(io::stdout()));

    if let Some(symbol) = args.symbol.as_deref() {
        controller.dispatch(UiEvent::Submit { input: symbol }).await;
        return match controller.state() {
            SearchState::Error(message) => Err(QuoteError::Gateway(message.clone())),
            _ => Ok(()),
        };
    }

    info!("Enter a stock symbol (e.g. AAPL, GOOGL, MSFT). Press Ctrl+C to exit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                controller
                    .dispatch(UiEvent::KeyPress { key: Key::Enter, input: &line })
                    .await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received. Shutting down client...");
                break;
            }
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
