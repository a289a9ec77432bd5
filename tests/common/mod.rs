//! Test doubles shared by the integration tests
//!
//! - `FakeStore`: a real TCP listener that answers each connection with the
//!   next scripted line and records what it was sent
//! - `ScriptedExchange`: an in-process `Exchange` that counts calls

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use blink_adapter::error::{BlinkError, Result};
use blink_adapter::network::{Endpoint, Exchange};
use blink_adapter::protocol::{encode_value, Reply, RequestLine};
use parking_lot::Mutex;

// =============================================================================
// Fake Store (real sockets)
// =============================================================================

pub struct FakeStore {
    endpoint: Endpoint,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeStore {
    /// Serve one connection per scripted reply, then stop accepting.
    ///
    /// Each reply is written verbatim, so include the trailing `\n` unless the
    /// test wants a truncated line.
    pub fn start(replies: &[&str]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let replies: Vec<String> = replies.iter().map(|r| r.to_string()).collect();
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for reply in replies {
                let (stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                if reader.read_line(&mut line).is_err() {
                    continue;
                }
                recorded.lock().push(line);

                let mut writer = stream;
                let _ = writer.write_all(reply.as_bytes());
                let _ = writer.flush();
            }
        });

        Self {
            endpoint: Endpoint::tcp("127.0.0.1", port),
            requests,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint.clone()
    }

    /// Request lines received so far, terminators included
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

/// A store that accepts and then says nothing for `hold`
pub fn silent_store(hold: Duration) -> Endpoint {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(hold);
            drop(stream);
        }
    });
    Endpoint::tcp("127.0.0.1", port)
}

/// An address with nothing listening on it
pub fn refused_endpoint() -> Endpoint {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Endpoint::tcp("127.0.0.1", port)
}

/// `VALUE <base64>\n` for the given bytes
pub fn value_line(value: &[u8]) -> String {
    format!("VALUE {}\n", encode_value(value))
}

// =============================================================================
// Scripted Exchange (no sockets)
// =============================================================================

pub enum Scripted {
    Reply(Reply),
    Malformed(String),
    ConnectRefused,
    Reset,
}

pub struct ScriptedExchange {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedExchange {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    /// Request lines seen, without terminators
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl Exchange for ScriptedExchange {
    fn exchange(&self, request: &RequestLine) -> Result<Reply> {
        self.requests.lock().push(request.as_str().to_string());

        match self.script.lock().pop_front() {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Malformed(line)) => Err(BlinkError::MalformedResponse {
                line,
                reason: "invalid base64".to_string(),
            }),
            Some(Scripted::ConnectRefused) => Err(BlinkError::Connect {
                addr: "127.0.0.1:1".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
            }),
            Some(Scripted::Reset) | None => Err(BlinkError::Io(std::io::Error::from(
                std::io::ErrorKind::ConnectionReset,
            ))),
        }
    }
}
