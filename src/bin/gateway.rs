//! Blink Store HTTP Gateway Binary
//!
//! Serves `GET /<key>` and `POST /<key>` on top of a running store.

use blink_adapter::config::DEFAULT_LISTEN_PORT;
use blink_adapter::network::Endpoint;
use blink_adapter::{gateway, Config};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Blink Store HTTP Gateway
#[derive(Parser, Debug)]
#[command(name = "blink-gateway")]
#[command(about = "HTTP gateway for Blink Store")]
#[command(version)]
struct Args {
    /// Store address (host:port or unix:/path)
    #[arg(short, long, env = "BLINK_STORE", default_value_t = Config::default().store)]
    store: Endpoint,

    /// HTTP listen port
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_LISTEN_PORT)]
    port: u16,

    /// HTTP listen host
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Deadline for each store connect, write and read in milliseconds (0 disables)
    #[arg(long, env = "BLINK_TIMEOUT_MS", default_value_t = 5000)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,blink_adapter=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Blink Gateway v{}", blink_adapter::VERSION);

    // Build config from args
    let config = Config::builder()
        .store(args.store)
        .listen_host(args.bind)
        .listen_port(args.port)
        .timeout_ms(args.timeout_ms)
        .build();

    if let Err(e) = gateway::serve(config, shutdown_signal()).await {
        tracing::error!("Gateway error: {}", e);
        std::process::exit(1);
    }
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
