//! # Seed Store
//!
//! Named values used to stage test and demo data, held in process memory for
//! the life of the server. Unrelated to spec validation.
//!
//! All operations are synchronous behind a `parking_lot::RwLock` (never held
//! across `.await` points; non-poisonable, so a panicking writer does not
//! permanently corrupt the store). The lock is required: Axum serves
//! requests in parallel and the store is the one piece of cross-request
//! mutable state.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

/// Name of a seed. May contain `/` segments, e.g. `simple/example-spec`.
pub type SeedName = String;

/// An arbitrary stored value.
pub type SeedValue = serde_json::Value;

/// Error from a seed operation.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The named seed does not exist.
    #[error("could not find seed {0}")]
    NotFound(SeedName),
}

/// Thread-safe, cloneable in-memory seed store. Last write wins; no
/// persistence beyond process lifetime.
#[derive(Debug, Clone, Default)]
pub struct SeedStore {
    data: Arc<RwLock<HashMap<SeedName, SeedValue>>>,
}

impl SeedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// List available seed names, sorted.
    pub fn list(&self) -> Vec<SeedName> {
        let mut names: Vec<SeedName> = self.data.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Get a seed by name.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::NotFound`] if the name was never set or has been
    /// deleted.
    pub fn get(&self, name: &str) -> Result<SeedValue, SeedError> {
        self.data
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| SeedError::NotFound(name.to_string()))
    }

    /// Set a seed name to a value. Idempotent upsert.
    pub fn set(&self, name: impl Into<SeedName>, value: SeedValue) {
        self.data.write().insert(name.into(), value);
    }

    /// Delete a seed by name.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::NotFound`] if the name is absent.
    pub fn delete(&self, name: &str) -> Result<(), SeedError> {
        self.data
            .write()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| SeedError::NotFound(name.to_string()))
    }

    /// Return the number of stored seeds.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
