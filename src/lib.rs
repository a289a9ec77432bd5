//! # Blink Adapter
//!
//! Client-side adapters for Blink Store, a key-value store that speaks a
//! line-oriented text protocol over TCP (or a Unix socket):
//! - Protocol codec with base64 value encoding
//! - Store connector: one short-lived connection per exchange
//! - Interactive command client
//! - HTTP gateway mapping `GET /key` and `POST /key` onto `GET`/`SET`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐        ┌──────────────────────┐
//! │  Interactive Client  │        │     HTTP Gateway     │
//! │     (blink-cli)      │        │   (blink-gateway)    │
//! └──────────┬───────────┘        └──────────┬───────────┘
//!            │ raw lines                     │ GET / SET
//!            │                    ┌──────────▼───────────┐
//!            │                    │     StoreClient      │
//!            │                    └──────────┬───────────┘
//!            └──────────────┬────────────────┘
//!                           │ Exchange
//!                ┌──────────▼───────────┐
//!                │   Store Connector    │
//!                │ (connect/write/read) │
//!                └──────────┬───────────┘
//!                           │ request line ⇄ response line
//!                ┌──────────▼───────────┐
//!                │      Blink Store     │
//!                └──────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;
pub mod repl;
pub mod gateway;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BlinkError, Result};
pub use config::Config;
pub use client::StoreClient;
pub use network::{Connector, Endpoint, Exchange};
pub use protocol::{Command, Key, Reply, RequestLine};
pub use repl::{Repl, SessionEnd};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Blink Adapter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
