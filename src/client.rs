//! Typed store client
//!
//! Wraps an [`Exchange`] and turns status lines into typed results. Each call
//! is exactly one exchange.

use std::sync::Arc;

use bytes::Bytes;

use crate::error::{BlinkError, Result};
use crate::network::Exchange;
use crate::protocol::{encode_request, Command, Key, Reply};

/// Cheap to clone; clones share the underlying exchange
#[derive(Clone)]
pub struct StoreClient {
    exchange: Arc<dyn Exchange>,
}

impl StoreClient {
    pub fn new(exchange: Arc<dyn Exchange>) -> Self {
        Self { exchange }
    }

    /// `GET key`: `Some(value)`, or `None` on `NOT_FOUND`
    pub fn get(&self, key: &Key) -> Result<Option<Bytes>> {
        match self.call(Command::Get { key: key.clone() })? {
            Reply::Value(value) => Ok(Some(value)),
            reply if reply.is_not_found() => Ok(None),
            reply => Err(unexpected(reply)),
        }
    }

    /// `SET key value`: succeeds on any status beginning with `OK`
    pub fn set(&self, key: &Key, value: Bytes) -> Result<()> {
        match self.call(Command::Set { key: key.clone(), value })? {
            reply if reply.is_ok() => Ok(()),
            reply => Err(unexpected(reply)),
        }
    }

    /// `DELETE key`: `true` if the key was removed, `false` if it was absent
    pub fn delete(&self, key: &Key) -> Result<bool> {
        match self.call(Command::Delete { key: key.clone() })? {
            reply if reply.is_ok() || reply.is_deleted() => Ok(true),
            reply if reply.is_not_found() => Ok(false),
            reply => Err(unexpected(reply)),
        }
    }

    /// `USAGE`: bytes currently held by the store
    pub fn usage(&self) -> Result<u64> {
        let reply = self.call(Command::Usage)?;
        reply.usage_bytes().ok_or_else(|| unexpected(reply))
    }

    fn call(&self, command: Command) -> Result<Reply> {
        self.exchange.exchange(&encode_request(&command))
    }
}

fn unexpected(reply: Reply) -> BlinkError {
    match reply {
        Reply::Status(status) => BlinkError::ProtocolStatus(status),
        Reply::Value(value) => {
            BlinkError::ProtocolStatus(format!("unexpected VALUE reply ({} bytes)", value.len()))
        }
    }
}
