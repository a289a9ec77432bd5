//! Error types for Blink Adapter
//!
//! Provides a unified error type for codec, transport, and adapter failures.

use thiserror::Error;

/// Result type alias using BlinkError
pub type Result<T> = std::result::Result<T, BlinkError>;

/// Unified error type for Blink Adapter operations
#[derive(Debug, Error)]
pub enum BlinkError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("cannot connect to store at {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// A `VALUE` line whose payload is not valid base64. Carries the raw line
    /// so callers can show it unmodified.
    #[error("malformed response {line:?}: {reason}")]
    MalformedResponse { line: String, reason: String },

    #[error("store replied with status: {0}")]
    ProtocolStatus(String),

    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BlinkError {
    /// True for failures of the transport itself (connect, write, read).
    ///
    /// The interactive client ends its session on these.
    pub fn is_transport(&self) -> bool {
        matches!(self, BlinkError::Connect { .. } | BlinkError::Io(_))
    }
}
