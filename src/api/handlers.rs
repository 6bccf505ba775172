//! HTTP API handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use super::extract::{JsonBody, SnippetId};
use crate::error::{ApiError, ErrorResponse};
use crate::metrics;
use crate::store::{self, NewSnippet, SharedStore, Snippet, SnippetStore};

/// Message returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Snippet deleted successfully";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// The snippet store behind its lock.
    pub store: SharedStore,
    /// Prometheus handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state around an existing store.
    pub fn new(store: SnippetStore) -> Self {
        Self {
            store: store::shared(store),
            metrics: None,
        }
    }

    /// App state holding the startup seed data.
    pub fn seeded() -> Self {
        Self::new(SnippetStore::seeded())
    }

    /// Attach a Prometheus handle for `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation text.
    #[schema(example = "Snippet deleted successfully")]
    pub message: String,
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "ops",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Prometheus exposition - 503 when no recorder is installed.
pub async fn metrics_text(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics disabled").into_response(),
    }
}

/// List every snippet in insertion order.
#[utoipa::path(
    get,
    path = "/snippets",
    tag = "snippets",
    responses((status = 200, description = "All snippets", body = Vec<Snippet>))
)]
pub async fn list_snippets(State(state): State<AppState>) -> Json<Vec<Snippet>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

/// Fetch one snippet.
#[utoipa::path(
    get,
    path = "/snippets/{id}",
    tag = "snippets",
    params(("id" = String, Path, description = "Snippet id (integer)")),
    responses(
        (status = 200, description = "The snippet", body = Snippet),
        (status = 400, description = "Invalid ID format", body = ErrorResponse),
        (status = 404, description = "Snippet not found", body = ErrorResponse)
    )
)]
pub async fn get_snippet(
    State(state): State<AppState>,
    SnippetId(id): SnippetId,
) -> Result<Json<Snippet>, ApiError> {
    let store = state.store.read().await;
    let snippet = store
        .get(id)
        .inspect_err(|_| debug!(id, "Snippet lookup missed"))?;
    Ok(Json(snippet.clone()))
}

/// Create a snippet; any id in the body is ignored.
#[utoipa::path(
    post,
    path = "/snippets",
    tag = "snippets",
    request_body = NewSnippet,
    responses(
        (status = 201, description = "Created snippet with its assigned id", body = Snippet),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn create_snippet(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewSnippet>,
) -> Result<(StatusCode, Json<Snippet>), ApiError> {
    let mut store = state.store.write().await;
    let snippet = store.create(payload)?;

    metrics::inc_snippets_created();
    metrics::set_snippets_stored(store.len());
    info!(id = snippet.id, title = %snippet.title, "Snippet created");

    Ok((StatusCode::CREATED, Json(snippet)))
}

/// Replace a snippet wholesale, keeping its id.
#[utoipa::path(
    put,
    path = "/snippets/{id}",
    tag = "snippets",
    params(("id" = String, Path, description = "Snippet id (integer)")),
    request_body = NewSnippet,
    responses(
        (status = 200, description = "Updated snippet", body = Snippet),
        (status = 400, description = "Invalid ID format or malformed body", body = ErrorResponse),
        (status = 404, description = "Snippet not found", body = ErrorResponse)
    )
)]
pub async fn update_snippet(
    State(state): State<AppState>,
    SnippetId(id): SnippetId,
    JsonBody(payload): JsonBody<NewSnippet>,
) -> Result<Json<Snippet>, ApiError> {
    let mut store = state.store.write().await;
    let snippet = store.update(id, payload)?;

    metrics::inc_snippets_updated();
    info!(id, "Snippet updated");

    Ok(Json(snippet))
}

/// Delete a snippet.
#[utoipa::path(
    delete,
    path = "/snippets/{id}",
    tag = "snippets",
    params(("id" = String, Path, description = "Snippet id (integer)")),
    responses(
        (status = 200, description = "Snippet deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID format", body = ErrorResponse),
        (status = 404, description = "Snippet not found", body = ErrorResponse)
    )
)]
pub async fn delete_snippet(
    State(state): State<AppState>,
    SnippetId(id): SnippetId,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.delete(id)?;

    metrics::inc_snippets_deleted();
    metrics::set_snippets_stored(store.len());
    info!(id, "Snippet deleted");

    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
