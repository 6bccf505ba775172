//! Prometheus metrics for request and store activity.
//!
//! This module provides:
//! - HTTP request counts and latency per matched route
//! - Snippet mutation counters
//! - A gauge of the current store size

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::ServiceError;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Snippets created counter metric name.
pub const METRIC_SNIPPETS_CREATED: &str = "snippets_created_total";
/// Snippets updated counter metric name.
pub const METRIC_SNIPPETS_UPDATED: &str = "snippets_updated_total";
/// Snippets deleted counter metric name.
pub const METRIC_SNIPPETS_DELETED: &str = "snippets_deleted_total";
/// Stored snippets gauge metric name.
pub const METRIC_SNIPPETS_STORED: &str = "snippets_stored";

/// Install the global Prometheus recorder and describe all metrics.
/// Call this once at startup.
pub fn init_metrics() -> Result<PrometheusHandle, ServiceError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServiceError::Metrics(e.to_string()))?;

    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(METRIC_SNIPPETS_CREATED, "Total number of snippets created");
    describe_counter!(METRIC_SNIPPETS_UPDATED, "Total number of snippets updated");
    describe_counter!(METRIC_SNIPPETS_DELETED, "Total number of snippets deleted");
    describe_gauge!(METRIC_SNIPPETS_STORED, "Number of snippets currently stored");

    debug!("Metrics initialized");
    Ok(handle)
}

/// Record HTTP request latency and outcome.
pub fn record_http_request(start: Instant, method: &str, route: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(latency_ms);
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment snippets created counter.
pub fn inc_snippets_created() {
    counter!(METRIC_SNIPPETS_CREATED).increment(1);
}

/// Increment snippets updated counter.
pub fn inc_snippets_updated() {
    counter!(METRIC_SNIPPETS_UPDATED).increment(1);
}

/// Increment snippets deleted counter.
pub fn inc_snippets_deleted() {
    counter!(METRIC_SNIPPETS_DELETED).increment(1);
}

/// Set the stored snippets gauge.
pub fn set_snippets_stored(count: usize) {
    gauge!(METRIC_SNIPPETS_STORED).set(count as f64);
}

/// Middleware timing every request against its route template.
///
/// Attach with `route_layer` so only matched routes are recorded.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let Some(route) = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
    else {
        return next.run(request).await;
    };

    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;
    record_http_request(start, &method, &route, response.status().as_u16());
    response
}
