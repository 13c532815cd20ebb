//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use algo_catalog::{router, AppState, ServiceConfig};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value as Json;
use tower::ServiceExt;

/// Router with default configuration.
pub fn app() -> Router {
    router(AppState::default())
}

pub fn app_with(config: ServiceConfig) -> Router {
    router(AppState::new(config))
}

/// POST a JSON value and decode the JSON reply.
pub async fn post(app: Router, uri: &str, body: Json) -> (StatusCode, Json) {
    post_raw(app, uri, body.to_string()).await
}

/// POST raw bytes with no content-type header.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Json) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Json) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Json) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Json::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

/// The `error` message of an error reply.
pub fn error_message(body: &Json) -> &str {
    body["error"].as_str().unwrap()
}
