//! Error types shared between the store and the command-line front end.
//!
//! The `QuoteError` enum covers the two store failures (an unreadable resource and a
//! query against an empty set) plus the single-line parse and JSON rendering failures,
//! so callers can propagate one error type with `?`.
use std::io;

use thiserror::Error;

/// Unified error type for loading, querying and rendering quotes.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The quote resource could not be opened or read (missing file, permissions,
    /// invalid UTF-8). Fatal at startup.
    #[error("Failed to load quotes from {source_name}: {source}")]
    Load {
        /// File path or other label identifying the resource.
        source_name: String,
        /// Underlying read failure.
        #[source]
        source: io::Error,
    },

    /// A query needing at least one quote was made against an empty store.
    #[error("Quote store is empty")]
    EmptyStore,

    /// A single line did not match `"<text>" - *<author>*`.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Failure while encoding JSON via serde_json. Raised by the command-line front end
    /// when rendering results; the store itself never produces it.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Wraps an I/O failure on the named resource as [`QuoteError::Load`].
    pub fn load(source_name: impl Into<String>, source: io::Error) -> Self {
        QuoteError::Load {
            source_name: source_name.into(),
            source,
        }
    }
}
