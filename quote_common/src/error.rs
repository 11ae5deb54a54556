//! Error types shared between gateway and client.
//!
//! The `QuoteError` enum unifies common failure cases for I/O, numeric
//! parsing and the two ways a quote lookup can fail from the client's
//! point of view: the gateway answered with an error, or it could not be
//! reached at all.
use std::io;

use thiserror::Error;

/// Unified error type shared by gateway and client.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A numeric field could not be parsed; carries the offending text.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The gateway answered with a non-success status. Displays the bare
    /// message the gateway chose.
    #[error("{0}")]
    Gateway(String),

    /// The request never produced a usable response (connect error,
    /// timeout, undecodable body). Displays the bare transport message.
    #[error("{0}")]
    Transport(String),
}
