//! In-memory snippet storage.
//!
//! This module handles:
//! - Snippet record types
//! - The ordered store and its id counter
//! - Seed data loaded at startup

pub mod memory;
pub mod seed;
pub mod types;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use memory::SnippetStore;
pub use types::{NewSnippet, Snippet};

/// Store handle shared between request handlers.
///
/// Every store operation runs under a single acquisition of this lock, so
/// concurrent writers cannot interleave on the sequence or the id counter.
pub type SharedStore = Arc<RwLock<SnippetStore>>;

/// Wrap a store for sharing across handlers.
pub fn shared(store: SnippetStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}
