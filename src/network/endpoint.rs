//! Store endpoints
//!
//! Where the store listens: a TCP `host:port` or a Unix socket path.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::BlinkError;

/// Scheme prefix selecting a Unix domain socket
const UNIX_PREFIX: &str = "unix:";

/// Address of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// TCP socket
    Tcp { host: String, port: u16 },

    /// Unix domain socket (Unix platforms only)
    Unix(PathBuf),
}

impl Endpoint {
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Endpoint::Tcp {
            host: host.into(),
            port,
        }
    }

    pub fn unix(path: impl Into<PathBuf>) -> Self {
        Endpoint::Unix(path.into())
    }
}

impl FromStr for Endpoint {
    type Err = BlinkError;

    /// Parses `host:port` or `unix:/path/to.sock`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(path) = s.strip_prefix(UNIX_PREFIX) {
            if path.is_empty() {
                return Err(BlinkError::Config("unix endpoint needs a path".to_string()));
            }
            return Ok(Endpoint::unix(path));
        }

        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| BlinkError::Config(format!("expected host:port, got {s:?}")))?;
        if host.is_empty() {
            return Err(BlinkError::Config(format!("missing host in {s:?}")));
        }
        let port = port
            .parse::<u16>()
            .map_err(|e| BlinkError::Config(format!("invalid port in {s:?}: {e}")))?;

        Ok(Endpoint::tcp(host, port))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tcp { host, port } => write!(f, "{host}:{port}"),
            Endpoint::Unix(path) => write!(f, "{UNIX_PREFIX}{}", path.display()),
        }
    }
}
