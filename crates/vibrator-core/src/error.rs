//! Error types shared by every vibrator crate.
//!
//! The taxonomy is deliberately small: a control-node write failed, the
//! requested operation is not implemented by this hardware, the upward
//! completion callback failed, or the settings could not be used.

use std::path::PathBuf;

/// Result type alias for vibrator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the vibrator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing a value to a driver control node failed.
    ///
    /// Returned unchanged to the caller of `on`/`off`; the remaining writes
    /// of the sequence are not attempted.
    #[error("Failed to write {value:?} to {}: {source}", .node.display())]
    NodeWrite {
        node: PathBuf,
        value: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation is not supported by this hardware. Never transient.
    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: &'static str },

    /// The completion callback reported a failure.
    #[error("Completion callback failed: {0}")]
    Callback(String),

    /// Settings are malformed or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new node write error.
    pub fn node_write(
        node: impl Into<PathBuf>,
        value: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::NodeWrite {
            node: node.into(),
            value: value.into(),
            source,
        }
    }

    /// Create a new unsupported operation error.
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Create a new callback failure.
    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback(message.into())
    }

    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check whether this error is the fixed "unsupported operation" signal.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
