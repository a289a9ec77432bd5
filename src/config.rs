//! Configuration for Blink Adapter
//!
//! Built once at process start and handed to each adapter. Library code never
//! reads the environment; the binaries map flags and env vars onto this.

use std::time::Duration;

use crate::network::Endpoint;

/// Default store host
pub const DEFAULT_STORE_HOST: &str = "127.0.0.1";

/// Default store port
pub const DEFAULT_STORE_PORT: u16 = 8765;

/// Default gateway listen port (`PORT`)
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Main configuration shared by the adapters
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Where the store listens
    pub store: Endpoint,

    /// Deadline for each connect/write/read step (milliseconds, 0 = none)
    pub timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Gateway Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen host
    pub listen_host: String,

    /// HTTP listen port
    pub listen_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Endpoint::tcp(DEFAULT_STORE_HOST, DEFAULT_STORE_PORT),
            timeout_ms: 5000,
            listen_host: "0.0.0.0".to_string(),
            listen_port: DEFAULT_LISTEN_PORT,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Exchange deadline, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    /// `host:port` the gateway binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store endpoint
    pub fn store(mut self, endpoint: Endpoint) -> Self {
        self.config.store = endpoint;
        self
    }

    /// Set the exchange deadline (in milliseconds, 0 disables it)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the gateway listen host
    pub fn listen_host(mut self, host: impl Into<String>) -> Self {
        self.config.listen_host = host.into();
        self
    }

    /// Set the gateway listen port
    pub fn listen_port(mut self, port: u16) -> Self {
        self.config.listen_port = port;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
