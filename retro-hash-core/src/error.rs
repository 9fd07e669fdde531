use thiserror::Error;

use crate::platform::Platform;

/// Errors that can occur while fingerprinting a game.
///
/// Recipe failures carry the human-readable message the diagnostics surface
/// expects; the fingerprint is never produced on failure.
#[derive(Debug, Error)]
pub enum HashError {
    /// I/O error while reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file or disc track could not be opened
    #[error("Could not open {0}")]
    CannotOpen(String),

    /// A required region of the input could not be read
    #[error("Could not read {0}")]
    CannotRead(String),

    /// Signature mismatch, missing required file, or failed size sanity check
    #[error("{0}")]
    InvalidFormat(String),

    /// A disc recipe ran without a disc reader installed on the context
    #[error("no disc reader registered for {0}")]
    NoDiscReader(&'static str),

    /// The console has no recipe for this input kind
    #[error("unsupported console for {kind} hash: {console}")]
    Unsupported {
        console: Platform,
        kind: &'static str,
    },

    /// The playlist had no non-empty, non-comment entries
    #[error("playlist contains no disc entries")]
    EmptyPlaylist,

    /// Every candidate console was tried and none produced a fingerprint
    #[error("no candidate console produced a hash")]
    Exhausted,
}

impl HashError {
    pub fn cannot_open(what: impl Into<String>) -> Self {
        Self::CannotOpen(what.into())
    }

    pub fn cannot_read(what: impl Into<String>) -> Self {
        Self::CannotRead(what.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}
