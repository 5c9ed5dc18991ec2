//! Error types for treedot operations.
//!
//! Fallible operations return [`Result<T>`]. Misuse of a visitor (calling
//! `leave` with nothing entered) is a caller bug and panics instead.

use thiserror::Error;

/// Result type alias for treedot operations.
pub type Result<T> = std::result::Result<T, DotError>;

/// Error type for rendering and configuration.
#[derive(Error, Debug)]
pub enum DotError {
    /// The visitor was finished while some entered nodes were never left
    #[error("Incomplete traversal: {open} node(s) entered but never left")]
    IncompleteTraversal {
        /// Number of unmatched `enter` calls
        open: usize,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Detailed error message
        message: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl DotError {
    /// Create a configuration error from a message and its source.
    pub fn config(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Config {
            message: message.into(),
            source,
        }
    }
}
