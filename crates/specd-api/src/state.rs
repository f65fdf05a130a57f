//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Everything is explicitly constructed and injected
//! here — the parser registry and seed store are instance state, not ambient
//! globals, so tests can build isolated instances freely.

use std::sync::Arc;

use specd_core::ParserRegistry;
use specd_engine::{EngineError, SchemaEngine};

use crate::config::AppConfig;
use crate::seed::SeedStore;

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: the registry and engine are behind `Arc` (both are
/// read-only after construction) and the seed store shares its map
/// internally.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Parser registry, populated once here and immutable afterwards.
    pub registry: Arc<ParserRegistry>,
    /// The validation engine.
    pub engine: Arc<SchemaEngine>,
    /// The seed staging store.
    pub seeds: SeedStore,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the engine's embedded schemas fail to compile. In `main`,
    /// prefer [`AppState::try_with_config`] for graceful startup errors.
    pub fn new() -> Self {
        Self::try_with_config(AppConfig::default())
            .expect("failed to initialize AppState (embedded schemas must compile)")
    }

    /// Create a new application state with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the validation engine cannot be built.
    pub fn try_with_config(config: AppConfig) -> Result<Self, EngineError> {
        Ok(Self {
            registry: Arc::new(ParserRegistry::with_defaults()),
            engine: Arc::new(SchemaEngine::new()?),
            seeds: SeedStore::new(),
            config,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
