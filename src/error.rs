//! Error types for the cobble engine.
//!
//! A single `thiserror` enum covers configuration, deck construction and
//! session flow. Drawing from an empty deck is not an error; it is reported
//! as `None` by `Deck::next_card`.

use std::path::PathBuf;

use thiserror::Error;

use crate::session::Phase;

/// The main error type for the cobble crate.
#[derive(Error, Debug)]
pub enum Error {
    // ============ Configuration Errors ============
    /// The plane order derived from symbols-per-card is not a usable prime.
    #[error("order {order} is not prime: symbols per card minus one must be a prime number")]
    InvalidOrder {
        /// The rejected order.
        order: u32,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what is invalid.
        message: String,
    },

    /// Reading or writing a configuration file or symbol directory failed.
    #[error("cannot access {}: {source}", .path.display())]
    ConfigIo {
        /// The file or directory involved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("cannot parse config file {}: {source}", .path.display())]
    ConfigParse {
        /// The offending file.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    // ============ Deck Errors ============
    /// The symbol pool is smaller than the plane requires.
    #[error("not enough symbols: plane needs index {index} but only {available} symbols were supplied ({required} required)")]
    InsufficientSymbols {
        /// The first out-of-range point index.
        index: usize,
        /// Number of symbols the plane needs.
        required: usize,
        /// Number of symbols supplied.
        available: usize,
    },

    /// Two cards from the same deck share no symbol.
    #[error("cards {left} and {right} share no symbol")]
    NoCommonSymbol {
        /// Identifier of the first card.
        left: u32,
        /// Identifier of the second card.
        right: u32,
    },

    // ============ Session Errors ============
    /// The operation is not allowed in the current phase.
    #[error("{operation} is not allowed during {phase:?}")]
    InvalidPhase {
        /// The attempted operation.
        operation: &'static str,
        /// The phase the session was in.
        phase: Phase,
    },
}

/// A specialized `Result` type for cobble operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidConfig` error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
