//! # HTTP Server
//!
//! Thin axum layer over [`crate::dispatch`]. Handlers only move bytes in and
//! DTOs out; all validation and algorithm selection happens in dispatch.
//!
//! | Status | Cause |
//! |--------|-------|
//! | 200 | algorithm ran (including "not found" results) |
//! | 400 | invalid JSON, missing or mistyped fields |
//! | 404 | unknown algorithm or unknown path |
//! | 413 | body over `max_body_bytes` |
//! | 500 | dispatcher panicked, or anything else |
//!
//! Every non-200 body is `{"error": "<message>"}`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::config::ServiceConfig;
use crate::dispatch::{self, Catalog};
use crate::{Error, Result};

// ============================================================================
// State
// ============================================================================

/// Shared, read-only router state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the full route table.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/", get(index))
        .route("/search/:algo", post(search))
        .route("/sort/:algo", post(sort))
        .route("/graph/:algo", post(graph))
        .route("/string/:algo", post(string))
        .fallback(unknown_route)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Bind `config.bind_address` and serve until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_address).await?;
    info!(
        address = %listener.local_addr()?,
        max_body_bytes = config.max_body_bytes,
        rabin_base = config.rabin_karp.base(),
        rabin_modulus = config.rabin_karp.modulus(),
        "algorithm service listening"
    );

    axum::serve(listener, router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("algorithm service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install Ctrl-C handler");
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn index() -> Json<Catalog> {
    Json(dispatch::catalog())
}

async fn search(Path(algo): Path<String>, body: std::result::Result<Bytes, BytesRejection>) -> Response {
    respond(body, move |bytes| dispatch::handle_search(&algo, bytes)).await
}

async fn sort(Path(algo): Path<String>, body: std::result::Result<Bytes, BytesRejection>) -> Response {
    respond(body, move |bytes| dispatch::handle_sort(&algo, bytes)).await
}

async fn graph(Path(algo): Path<String>, body: std::result::Result<Bytes, BytesRejection>) -> Response {
    respond(body, move |bytes| dispatch::handle_graph(&algo, bytes)).await
}

async fn string(
    State(state): State<AppState>,
    Path(algo): Path<String>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    respond(body, move |bytes| dispatch::handle_string(&algo, bytes, &state.config)).await
}

async fn unknown_route(uri: Uri) -> Error {
    Error::UnknownRoute(uri.path().to_owned())
}

/// Unwrap the buffered body, run the dispatcher on the blocking pool, render
/// either outcome. A panicking dispatcher becomes a 500.
async fn respond<T, F>(body: std::result::Result<Bytes, BytesRejection>, run: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce(&[u8]) -> Result<T> + Send + 'static,
{
    let bytes = match body {
        Ok(bytes) => bytes,
        Err(rejection) => {
            warn!(status = %rejection.status(), reason = %rejection.body_text(), "request body rejected");
            return error_response(rejection.status(), rejection.body_text());
        }
    };
    debug!(bytes = bytes.len(), "dispatching");
    match tokio::task::spawn_blocking(move || run(&bytes)).await {
        Ok(Ok(dto)) => Json(dto).into_response(),
        Ok(Err(e)) => e.into_response(),
        Err(e) => Error::Worker(e).into_response(),
    }
}

// ============================================================================
// Errors
// ============================================================================

/// HTTP status for a crate error.
pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::InvalidBody | Error::MissingFields(_) | Error::InvalidField { .. } => StatusCode::BAD_REQUEST,
        Error::UnknownAlgorithm { .. } | Error::UnknownRoute(_) => StatusCode::NOT_FOUND,
        Error::Config(_) | Error::Io(_) | Error::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if self.is_client_error() {
            warn!(%status, error = %self, "request rejected");
        } else {
            error!(%status, error = %self, "request failed");
        }
        error_response(status, self.to_string())
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Family;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&Error::InvalidBody), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&Error::MissingFields(vec!["array"])), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&Error::UnknownAlgorithm { family: Family::Search, name: "x".into() }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_for(&Error::UnknownRoute("/nope".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&Error::Io(std::io::Error::other("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_dispatch_runs_off_the_request_thread() {
        let caller = std::thread::current().id();
        let (tx, rx) = std::sync::mpsc::channel();
        let response = respond(Ok(Bytes::from_static(b"{}")), move |_| {
            tx.send(std::thread::current().id()).ok();
            Ok(json!({}))
        })
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_ne!(rx.recv().unwrap(), caller);
    }

    #[tokio::test]
    async fn test_panicking_dispatch_is_a_500() {
        let response = respond(Ok(Bytes::from_static(b"{}")), |_| -> Result<serde_json::Value> {
            panic!("dispatcher blew up")
        })
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_state_shares_config() {
        let state = AppState::default();
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.config, &clone.config));
    }
}
