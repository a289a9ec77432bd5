//! Protocol Module
//!
//! Defines the line-oriented text protocol spoken by Blink Store.
//!
//! ## Request Format
//! ```text
//! ┌──────────┬───┬──────────┬───┬──────────────────┬────┐
//! │ COMMAND  │ ␠ │   key    │ ␠ │  base64(value)   │ \n │
//! └──────────┴───┴──────────┴───┴──────────────────┴────┘
//! ```
//! The key and value parts are present only for commands that take them.
//!
//! ### Commands
//! - `GET <key>`
//! - `SET <key> <base64>`
//! - `DELETE <key>`
//! - `USAGE`
//! - `QUIT` (local to the interactive client, never sent by the gateway)
//!
//! ## Response Format
//! One line per request:
//! - `VALUE <base64>`  - a stored value
//! - `OK`, `NOT_FOUND`, `DELETED`, `USAGE <bytes>` - status tokens
//! - `ERROR <message>` - store-side failure

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType, Key};
pub use response::{Reply, NOT_FOUND};
pub use codec::{
    decode_response, decode_value, encode_request, encode_value, RequestLine,
    VALUE_PREFIX,
};
