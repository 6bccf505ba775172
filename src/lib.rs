//! In-memory code snippet store with a JSON REST API.
//!
//! Snippets (title, code, description) live in an ordered in-memory list and
//! are served over five endpoints:
//!
//! ```text
//! GET    /snippets       list in insertion order
//! GET    /snippets/:id   fetch one
//! POST   /snippets       create, id assigned by the store
//! PUT    /snippets/:id   replace all fields, id kept
//! DELETE /snippets/:id   remove
//! ```
//!
//! Nothing is persisted; the store starts from two seed records on every run.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: Snippet types and the in-memory store
//! - [`api`]: HTTP handlers, routes, and OpenAPI docs
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError, StoreError};
