//! Request extractors that reject with [`ApiError`] bodies.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Integer snippet id taken from the `:id` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetId(pub i64);

impl SnippetId {
    /// Parse a raw path segment.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        raw.parse().map(SnippetId).map_err(|_| ApiError::InvalidId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SnippetId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;
        Self::parse(&raw)
    }
}

/// JSON body parsed regardless of `Content-Type`.
///
/// A literal `null` body yields `T::default()`. Parse failures become 400
/// responses carrying the serde error text; bodies over the configured limit
/// are rejected with 413.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge(e.body_text())
            } else {
                ApiError::MalformedBody(e.body_text())
            }
        })?;

        serde_json::from_slice::<Option<T>>(&bytes)
            .map(|value| JsonBody(value.unwrap_or_default()))
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}
