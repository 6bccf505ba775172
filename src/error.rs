//! Unified error types for the snippet service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Process-level error type.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by [`crate::store::SnippetStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No snippet carries the requested id.
    #[error("snippet {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// Initial data contained the same id twice.
    #[error("duplicate snippet id {id}")]
    DuplicateId {
        /// The repeated id.
        id: i64,
    },

    /// The id counter cannot advance any further.
    #[error("snippet id space exhausted")]
    IdSpaceExhausted,
}

/// Errors returned to HTTP clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Path segment is not an integer.
    #[error("Invalid ID format")]
    InvalidId,

    /// Request body does not deserialize into a snippet.
    #[error("{0}")]
    MalformedBody(String),

    /// No snippet with the requested id.
    #[error("Snippet not found")]
    NotFound,

    /// Request body exceeds the configured limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Anything the client cannot fix.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message.
    #[schema(example = "Snippet not found")]
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
