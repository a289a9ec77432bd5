//! HTTP Gateway
//!
//! Exposes the store over HTTP, one key per path:
//!
//! | Request          | Store     | Result                          |
//! |------------------|-----------|---------------------------------|
//! | `GET /<key>`     | `GET`     | 200 value / 404 / 502           |
//! | `POST /<key>`    | `SET`     | 204 / 502                       |
//! | other methods    | -         | 405 (HEAD included)             |
//! | `/` (empty key)  | -         | 400                             |
//!
//! Every HTTP request triggers at most one store exchange on its own
//! connection. Nothing is shared between requests except the read-only
//! client.

mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::client::StoreClient;
use crate::config::Config;
use crate::error::Result;
use crate::network::Connector;

/// Largest POST body accepted (32 MB)
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub client: StoreClient,
}

/// Build the gateway router over any store client
pub fn router(client: StoreClient) -> Router {
    Router::new()
        .route("/", any(handlers::empty_key))
        .route(
            "/{*key}",
            get(handlers::get_key)
                .post(handlers::set_key)
                .head(handlers::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { client })
}

/// Bind `config.listen_addr()` and serve until `shutdown` resolves
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let client = StoreClient::new(Arc::new(Connector::from_config(&config)));
    let app = router(client);

    let bind_address = config.listen_addr();
    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        tracing::error!("Failed to bind to {}: {}", bind_address, e);
        e
    })?;

    tracing::info!(
        "Gateway listening on http://{} (store at {})",
        bind_address,
        config.store
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}
