//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol. Pure functions, no
//! I/O.
//!
//! ## Value Encoding
//! Values travel as standard base64 with padding, so a request or response
//! line never carries a raw newline between its terminators.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bytes::Bytes;

use crate::error::{BlinkError, Result};
use super::{Command, Reply};

/// Prefix of a response line that carries a value
pub const VALUE_PREFIX: &str = "VALUE ";

// =============================================================================
// Request Lines
// =============================================================================

/// One request, newline-terminated, ready for the wire.
///
/// The only newline in the line is the terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine(String);

impl RequestLine {
    /// Wrap an operator-typed line verbatim (after trimming).
    ///
    /// The line is not parsed; the store decides what it means. Empty text
    /// and embedded line breaks are rejected.
    pub fn raw(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BlinkError::InvalidRequest("empty request".to_string()));
        }
        if text.contains(['\n', '\r']) {
            return Err(BlinkError::InvalidRequest(
                "request contains a line break".to_string(),
            ));
        }
        Ok(RequestLine(format!("{text}\n")))
    }

    /// Bytes to write, terminator included
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The line without its terminator
    pub fn as_str(&self) -> &str {
        self.0.trim_end_matches('\n')
    }

    /// First token, for logging
    pub fn command_name(&self) -> &str {
        self.as_str().split_whitespace().next().unwrap_or("")
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode a command as a request line
///
/// Format: `COMMAND[ key[ base64(value)]]\n`
pub fn encode_request(command: &Command) -> RequestLine {
    let name = command.command_type();
    let line = match command {
        Command::Get { key } | Command::Delete { key } => format!("{name} {key}\n"),
        Command::Set { key, value } => format!("{name} {key} {}\n", encode_value(value)),
        Command::Usage | Command::Quit => format!("{name}\n"),
    };
    RequestLine(line)
}

// =============================================================================
// Response Lines
// =============================================================================

/// Decode one response line
///
/// A `VALUE ` line has its payload base64-decoded; anything else is a status
/// returned verbatim (trimmed).
pub fn decode_response(line: &str) -> Result<Reply> {
    let line = line.trim_end_matches(['\n', '\r']);

    match line.strip_prefix(VALUE_PREFIX) {
        Some(payload) => BASE64
            .decode(payload.trim())
            .map(|value| Reply::Value(Bytes::from(value)))
            .map_err(|e| BlinkError::MalformedResponse {
                line: line.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(Reply::Status(line.trim().to_string())),
    }
}

// =============================================================================
// Values
// =============================================================================

/// Base64-encode a value for the wire
pub fn encode_value(value: &[u8]) -> String {
    BASE64.encode(value)
}

/// Decode a base64 payload back into raw bytes
pub fn decode_value(payload: &str) -> Result<Bytes> {
    BASE64
        .decode(payload)
        .map(Bytes::from)
        .map_err(|e| BlinkError::MalformedResponse {
            line: payload.to_string(),
            reason: e.to_string(),
        })
}
