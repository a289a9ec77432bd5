//! Network Module
//!
//! Transport side of the adapter.
//!
//! ## Architecture
//! - `Endpoint` names the store (TCP or Unix socket)
//! - `Connector` opens one connection per exchange
//! - `Exchange` is the seam adapters are written against

mod endpoint;
mod connector;

pub use endpoint::Endpoint;
pub use connector::{exchange_over, send, Connector, Exchange, MAX_RESPONSE_LINE};
