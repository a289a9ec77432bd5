//! Response definitions
//!
//! Represents decoded reply lines from the store.

use bytes::Bytes;

/// Status token for a missing key
pub const NOT_FOUND: &str = "NOT_FOUND";

/// A decoded response line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `VALUE <base64>`, payload already decoded
    Value(Bytes),

    /// Any other line, trimmed but otherwise verbatim
    Status(String),
}

impl Reply {
    /// The status text, or `None` for a value
    pub fn status(&self) -> Option<&str> {
        match self {
            Reply::Status(status) => Some(status),
            Reply::Value(_) => None,
        }
    }

    /// Status begins with `OK`
    pub fn is_ok(&self) -> bool {
        self.status().is_some_and(|s| s.starts_with("OK"))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(NOT_FOUND)
    }

    pub fn is_deleted(&self) -> bool {
        self.status() == Some("DELETED")
    }

    /// Byte count from a `USAGE <n>` reply
    pub fn usage_bytes(&self) -> Option<u64> {
        self.status()?
            .strip_prefix("USAGE ")
            .and_then(|n| n.trim().parse().ok())
    }
}
