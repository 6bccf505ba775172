//! HTTP API route definitions.

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use super::handlers::{
    create_snippet, delete_snippet, get_snippet, health, list_snippets, metrics_text,
    update_snippet, AppState,
};
use crate::config::Config;
use crate::error::Result;
use crate::metrics::track_requests;
use crate::utils::shutdown_signal;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Snippet CRUD
        .route("/snippets", get(list_snippets).post(create_snippet))
        .route(
            "/snippets/:id",
            get(get_snippet).put(update_snippet).delete(delete_snippet),
        )
        // Operational endpoints
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .route_layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the full application: API router with the configured body limit,
/// plus optional docs and CORS.
pub fn build_app(state: AppState, config: &Config) -> Router {
    let mut app = create_router(state).layer(DefaultBodyLimit::max(config.max_body_bytes));

    if config.swagger_ui {
        app = app.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));
    }

    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Bind the configured address and serve `app` until a shutdown signal.
pub async fn serve(config: &Config, app: Router) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    if config.swagger_ui {
        info!("Swagger UI at http://{}{}", addr, SWAGGER_UI_PATH);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
