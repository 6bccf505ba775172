//! OpenAPI document for the snippet API.

use utoipa::OpenApi;

use super::handlers::{self, HealthResponse, MessageResponse};
use crate::error::ErrorResponse;
use crate::store::{NewSnippet, Snippet};

/// Path the OpenAPI JSON is served under.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
/// Path the Swagger UI is served under.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Generated OpenAPI description.
#[derive(OpenApi)]
#[openapi(
    info(title = "snippet-store", description = "In-memory code snippet store"),
    paths(
        handlers::health,
        handlers::list_snippets,
        handlers::get_snippet,
        handlers::create_snippet,
        handlers::update_snippet,
        handlers::delete_snippet,
    ),
    components(schemas(Snippet, NewSnippet, ErrorResponse, MessageResponse, HealthResponse)),
    tags(
        (name = "snippets", description = "Snippet CRUD"),
        (name = "ops", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;
