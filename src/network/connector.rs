//! Store Connector
//!
//! Performs one request/response exchange over a fresh connection.
//!
//! ## Lifecycle
//! connect → write one request line → read one response line → drop.
//! The stream is owned by the exchange, so it is closed on every exit path.
//! There is no pooling and no retry.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{BlinkError, Result};
use crate::protocol::{decode_response, Reply, RequestLine};

use super::Endpoint;

/// Longest response line accepted (64 MB)
pub const MAX_RESPONSE_LINE: u64 = 64 * 1024 * 1024;

/// Anything that can carry one request line to the store and bring back the
/// decoded reply.
pub trait Exchange: Send + Sync {
    fn exchange(&self, request: &RequestLine) -> Result<Reply>;
}

impl<E: Exchange + ?Sized> Exchange for Arc<E> {
    fn exchange(&self, request: &RequestLine) -> Result<Reply> {
        (**self).exchange(request)
    }
}

/// Connects to the store anew for every exchange
#[derive(Debug, Clone)]
pub struct Connector {
    endpoint: Endpoint,
    timeout: Option<Duration>,
}

impl Connector {
    /// `timeout` bounds connect, write, and read individually.
    pub fn new(endpoint: Endpoint, timeout: Option<Duration>) -> Self {
        Self {
            endpoint,
            timeout: timeout.filter(|t| !t.is_zero()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store.clone(), config.timeout())
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Exchange for Connector {
    fn exchange(&self, request: &RequestLine) -> Result<Reply> {
        send(&self.endpoint, request, self.timeout)
    }
}

/// Send one request line to `endpoint` and decode the single reply line
pub fn send(endpoint: &Endpoint, request: &RequestLine, timeout: Option<Duration>) -> Result<Reply> {
    tracing::debug!("Sending {} to {}", request.command_name(), endpoint);

    let reply = match endpoint {
        Endpoint::Tcp { host, port } => {
            connect_tcp(host, *port, timeout).and_then(|stream| exchange_over(stream, request))
        }
        Endpoint::Unix(path) => send_unix(path, request, timeout),
    };

    if let Err(ref e) = reply {
        tracing::debug!("Exchange with {} failed: {}", endpoint, e);
    }
    reply
}

/// Write `request` to `stream`, read one line back, decode it.
///
/// Takes the stream by value; it is dropped (closed) before returning.
pub fn exchange_over<S: Read + Write>(mut stream: S, request: &RequestLine) -> Result<Reply> {
    stream.write_all(request.as_bytes())?;
    stream.flush()?;

    let line = read_response_line(&mut stream)?;
    decode_response(&line)
}

/// Read up to and including the first `\n`
fn read_response_line<R: Read>(reader: R) -> io::Result<String> {
    let mut reader = BufReader::new(reader.take(MAX_RESPONSE_LINE));
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf)?;

    if buf.last() != Some(&b'\n') {
        if n as u64 >= MAX_RESPONSE_LINE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("response line exceeds {MAX_RESPONSE_LINE} bytes"),
            ));
        }
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed before end of response line",
        ));
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn connect_tcp(host: &str, port: u16, timeout: Option<Duration>) -> Result<TcpStream> {
    let addr = format!("{host}:{port}");
    let connect_error = |source| BlinkError::Connect {
        addr: addr.clone(),
        source,
    };

    // "[::1]" in an endpoint string, "::1" for the resolver
    let bare_host = host.trim_start_matches('[').trim_end_matches(']');
    let candidates = (bare_host, port).to_socket_addrs().map_err(connect_error)?;

    let mut last_error = None;
    for candidate in candidates {
        let attempt = match timeout {
            Some(t) => TcpStream::connect_timeout(&candidate, t),
            None => TcpStream::connect(candidate),
        };
        match attempt {
            Ok(stream) => {
                // Disable Nagle's algorithm; every exchange is one small write
                stream.set_nodelay(true)?;
                stream.set_read_timeout(timeout)?;
                stream.set_write_timeout(timeout)?;
                return Ok(stream);
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(connect_error(last_error.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "address resolved to nothing")
    })))
}

#[cfg(unix)]
fn send_unix(path: &Path, request: &RequestLine, timeout: Option<Duration>) -> Result<Reply> {
    use std::os::unix::net::UnixStream;

    let stream = UnixStream::connect(path).map_err(|source| BlinkError::Connect {
        addr: path.display().to_string(),
        source,
    })?;
    stream.set_read_timeout(timeout)?;
    stream.set_write_timeout(timeout)?;

    exchange_over(stream, request)
}

#[cfg(not(unix))]
fn send_unix(_path: &Path, _request: &RequestLine, _timeout: Option<Duration>) -> Result<Reply> {
    Err(BlinkError::Config(
        "unix sockets are not supported on this platform".to_string(),
    ))
}
