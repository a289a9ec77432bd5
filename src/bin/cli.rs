//! Blink Store CLI Client
//!
//! Interactive client: each typed line is sent to the store as-is.

use std::io;
use std::path::PathBuf;

use blink_adapter::config::{DEFAULT_STORE_HOST, DEFAULT_STORE_PORT};
use blink_adapter::network::{Connector, Endpoint};
use blink_adapter::{Config, Repl, SessionEnd};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Blink Store CLI
#[derive(Parser, Debug)]
#[command(name = "blink-cli")]
#[command(about = "Interactive client for the Blink Store line protocol")]
#[command(version)]
struct Args {
    /// Store host
    #[arg(default_value = DEFAULT_STORE_HOST)]
    host: String,

    /// Store port
    #[arg(default_value_t = DEFAULT_STORE_PORT)]
    port: u16,

    /// Connect to a Unix domain socket instead of host/port
    #[arg(long)]
    unix: Option<PathBuf>,

    /// Deadline for connect, write and read in milliseconds (0 disables)
    #[arg(long, env = "BLINK_TIMEOUT_MS", default_value_t = 5000)]
    timeout_ms: u64,
}

fn main() {
    // Logs go to stderr so stdout carries only store output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let endpoint = match args.unix {
        Some(path) => Endpoint::unix(path),
        None => Endpoint::tcp(args.host, args.port),
    };
    let config = Config::builder()
        .store(endpoint)
        .timeout_ms(args.timeout_ms)
        .build();

    tracing::debug!("Using store at {}", config.store);

    let repl = Repl::new(Connector::from_config(&config));
    let stdin = io::stdin();
    let result = repl.run(stdin.lock(), &mut io::stdout().lock(), &mut io::stderr().lock());

    match result {
        Ok(SessionEnd::Quit) | Ok(SessionEnd::EndOfInput) => {}
        Ok(SessionEnd::TransportLost) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Terminal I/O failed: {}", e);
            std::process::exit(1);
        }
    }
}
