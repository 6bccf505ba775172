//! HTTP API module: snippet CRUD plus health, metrics, and OpenAPI docs.

pub mod docs;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::{build_app, create_router, serve};
