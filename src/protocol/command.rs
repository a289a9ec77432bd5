//! Command definitions
//!
//! Represents requests sent to the store.

use std::fmt;

use bytes::Bytes;

use crate::error::{BlinkError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Set,
    Delete,
    Usage,
    Quit,
}

impl CommandType {
    /// Wire name of the command
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Get => "GET",
            CommandType::Set => "SET",
            CommandType::Delete => "DELETE",
            CommandType::Usage => "USAGE",
            CommandType::Quit => "QUIT",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated key: non-empty, no whitespace, no control characters.
///
/// Anything else would break the single-line framing of a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() || key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(BlinkError::InvalidKey(key));
        }
        Ok(Key(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A store command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get a value by key
    Get { key: Key },

    /// Store a value (arbitrary bytes) under a key
    Set { key: Key, value: Bytes },

    /// Delete a key
    Delete { key: Key },

    /// Ask the store for its memory usage
    Usage,

    /// End the session
    Quit,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Set { .. } => CommandType::Set,
            Command::Delete { .. } => CommandType::Delete,
            Command::Usage => CommandType::Usage,
            Command::Quit => CommandType::Quit,
        }
    }

    /// The key this command addresses, if any
    pub fn key(&self) -> Option<&Key> {
        match self {
            Command::Get { key } | Command::Set { key, .. } | Command::Delete { key } => Some(key),
            Command::Usage | Command::Quit => None,
        }
    }
}
