//! Catalog server handle.
//!
//! `CatalogServer` is built once at startup and cloned into every request
//! handler. It owns the domain services, so tests can build isolated
//! instances instead of sharing process-wide state.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::{
    generator::PromptGenerator,
    prompts::{MemoryStore, PromptService, PromptStore},
};

/// The shared server state handed to the HTTP layer.
#[derive(Clone)]
pub struct CatalogServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for the prompt catalog.
    prompt_service: Arc<PromptService>,

    /// Service for brief generation.
    generator: Arc<PromptGenerator>,
}

impl CatalogServer {
    /// Create a server backed by an in-memory store.
    ///
    /// The store holds the starter prompts unless `catalog.seed_on_start`
    /// is off.
    pub fn new(config: Config) -> Self {
        let store = if config.catalog.seed_on_start {
            MemoryStore::seeded()
        } else {
            MemoryStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server over an arbitrary store backend.
    pub fn with_store(config: Config, store: Arc<dyn PromptStore>) -> Self {
        info!("Using {} prompt store", store.backend());
        let config = Arc::new(config);

        let prompt_service = Arc::new(PromptService::new(config.catalog.clone(), store));
        let generator = Arc::new(PromptGenerator::new(config.generator));

        Self {
            config,
            prompt_service,
            generator,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The prompt catalog.
    pub fn prompts(&self) -> &PromptService {
        &self.prompt_service
    }

    /// The brief generator.
    pub fn generator(&self) -> &PromptGenerator {
        &self.generator
    }
}
