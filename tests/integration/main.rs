//! Integration tests for the snippet API.
//!
//! Each test drives a fresh router in-process with `tower::ServiceExt::oneshot`.
//! Run with: cargo test --test integration

mod concurrency;
mod lifecycle;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use snippet_store::api::{build_app, AppState};
use snippet_store::Config;

/// Fresh app with seed data and default configuration.
pub fn test_app() -> Router {
    build_app(AppState::seeded(), &Config::default())
}

/// Send a request and decode the JSON response body.
pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
