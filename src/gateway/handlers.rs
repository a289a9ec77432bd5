//! Route handlers for the gateway
//!
//! Store exchanges are blocking, so they run on tokio's blocking pool.

use std::io;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::{BlinkError, Result};
use crate::protocol::Key;

use super::AppState;

/// Any method on `/`
pub(crate) async fn empty_key() -> Response {
    (StatusCode::BAD_REQUEST, "Bad Request: use /<key>").into_response()
}

/// `HEAD /<key>`
pub(crate) async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET,POST")],
    )
        .into_response()
}

/// `GET /<key>`
pub(crate) async fn get_key(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let key = match parse_key(&raw) {
        Ok(key) => key,
        Err(response) => return response,
    };

    let client = state.client.clone();
    let lookup = key.clone();
    match run_blocking(move || client.get(&lookup)).await {
        Ok(Some(value)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/octet-stream")],
            value,
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        Err(e) => bad_gateway(&key, e),
    }
}

/// `POST /<key>` with the raw value as body
pub(crate) async fn set_key(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    body: Bytes,
) -> Response {
    let key = match parse_key(&raw) {
        Ok(key) => key,
        Err(response) => return response,
    };

    let client = state.client.clone();
    let target = key.clone();
    match run_blocking(move || client.set(&target, body)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => bad_gateway(&key, e),
    }
}

/// Path without surrounding slashes, validated as a key
fn parse_key(raw: &str) -> std::result::Result<Key, Response> {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Bad Request: use /<key>").into_response());
    }
    Key::new(trimmed).map_err(|e| {
        tracing::debug!("Rejecting request: {}", e);
        (StatusCode::BAD_REQUEST, "Bad Request: invalid key").into_response()
    })
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(join_error) => Err(BlinkError::Io(io::Error::other(join_error))),
    }
}

/// Upstream failure: detail goes to the log, not the client
fn bad_gateway(key: &Key, error: BlinkError) -> Response {
    tracing::warn!("Store exchange for key {} failed: {}", key, error);
    (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
}
