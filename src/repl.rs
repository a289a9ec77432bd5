//! Interactive client
//!
//! Reads operator lines and forwards each one verbatim to the store, one
//! exchange per line, printing whatever comes back.
//!
//! ## Session
//! ```text
//!   Running ──line──▶ Running
//!      │
//!      ├── QUIT (local, never sent) ──▶ Terminated(Quit)
//!      ├── end of input ──────────────▶ Terminated(EndOfInput)
//!      └── connect / I/O failure ─────▶ Terminated(TransportLost)
//! ```

use std::io::{self, BufRead, Write};

use crate::error::BlinkError;
use crate::network::Exchange;
use crate::protocol::{CommandType, Reply, RequestLine};

/// Printed before the first prompt
pub const BANNER: &str = "Commands: GET <key> | SET <key> <value> | DELETE <key> | USAGE | QUIT";

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
    TransportLost,
}

/// Line-at-a-time client over any [`Exchange`]
pub struct Repl<E> {
    exchange: E,
}

impl<E: Exchange> Repl<E> {
    pub fn new(exchange: E) -> Self {
        Self { exchange }
    }

    /// Run until `QUIT`, end of input, or a transport failure.
    ///
    /// Store output goes to `out`; errors go to `err`. Transport failures are
    /// not retried.
    pub fn run<R, W, X>(&self, input: R, out: &mut W, err: &mut X) -> io::Result<SessionEnd>
    where
        R: BufRead,
        W: Write,
        X: Write,
    {
        writeln!(out, "{BANNER}")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if is_quit(line) {
                tracing::debug!("Operator quit");
                return Ok(SessionEnd::Quit);
            }

            let request = match RequestLine::raw(line) {
                Ok(request) => request,
                Err(e) => {
                    writeln!(err, "error: {e}")?;
                    continue;
                }
            };

            match self.exchange.exchange(&request) {
                Ok(reply) => render(out, &reply)?,
                // Undecodable value: show what the store actually sent
                Err(BlinkError::MalformedResponse { line, .. }) => writeln!(out, "{line}")?,
                Err(e) if e.is_transport() => {
                    writeln!(err, "error: {e}")?;
                    err.flush()?;
                    return Ok(SessionEnd::TransportLost);
                }
                Err(e) => writeln!(err, "error: {e}")?,
            }
            out.flush()?;
        }

        Ok(SessionEnd::EndOfInput)
    }
}

fn is_quit(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|cmd| cmd.eq_ignore_ascii_case(CommandType::Quit.as_str()))
}

fn render<W: Write>(out: &mut W, reply: &Reply) -> io::Result<()> {
    match reply {
        Reply::Value(value) => writeln!(out, "{}", String::from_utf8_lossy(value)),
        Reply::Status(status) => writeln!(out, "{status}"),
    }
}
