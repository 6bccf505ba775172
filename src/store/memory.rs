//! Ordered in-memory snippet store.

use std::collections::HashSet;

use tracing::debug;

use super::seed::seed_snippets;
use super::types::{NewSnippet, Snippet};
use crate::error::StoreError;

/// Owns the snippet sequence and the id counter.
///
/// Lookups are linear scans. Listing order is insertion order.
#[derive(Debug, Clone)]
pub struct SnippetStore {
    snippets: Vec<Snippet>,
    next_id: i64,
}

impl SnippetStore {
    /// Empty store; the first id handed out is 1.
    pub fn new() -> Self {
        Self {
            snippets: Vec::new(),
            next_id: 1,
        }
    }

    /// Store holding the startup seed data.
    pub fn seeded() -> Self {
        // Seed ids run 1..=n.
        let snippets = seed_snippets();
        let next_id = snippets.len() as i64 + 1;
        Self { snippets, next_id }
    }

    /// Store holding `snippets` in the given order.
    ///
    /// The counter starts one above the highest id present.
    pub fn from_snippets(snippets: Vec<Snippet>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(snippets.len());
        for snippet in &snippets {
            if !seen.insert(snippet.id) {
                return Err(StoreError::DuplicateId { id: snippet.id });
            }
        }

        let next_id = match snippets.iter().map(|s| s.id).max() {
            Some(max) => max.checked_add(1).ok_or(StoreError::IdSpaceExhausted)?,
            None => 1,
        };

        Ok(Self { snippets, next_id })
    }

    /// All snippets in insertion order.
    pub fn list(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Number of stored snippets.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Whether the store holds no snippets.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// The id the next create will receive.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    /// Find a snippet by id.
    pub fn get(&self, id: i64) -> Result<&Snippet, StoreError> {
        self.snippets
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Append a new snippet under the next counter value.
    pub fn create(&mut self, payload: NewSnippet) -> Result<Snippet, StoreError> {
        let id = self.next_id;
        let following = id.checked_add(1).ok_or(StoreError::IdSpaceExhausted)?;

        let snippet = Snippet::from_payload(id, payload);
        self.snippets.push(snippet.clone());
        self.next_id = following;

        debug!(id, "Snippet appended");
        Ok(snippet)
    }

    /// Replace every field of snippet `id` except the id itself.
    pub fn update(&mut self, id: i64, payload: NewSnippet) -> Result<Snippet, StoreError> {
        let slot = self
            .snippets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound { id })?;

        *slot = Snippet::from_payload(id, payload);
        Ok(slot.clone())
    }

    /// Remove snippet `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: i64) -> Result<Snippet, StoreError> {
        let index = self
            .snippets
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound { id })?;

        Ok(self.snippets.remove(index))
    }
}

impl Default for SnippetStore {
    fn default() -> Self {
        Self::new()
    }
}
