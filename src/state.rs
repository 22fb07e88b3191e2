use std::sync::Arc;

use crate::config::Config;
use crate::registry::Registry;
use crate::search::SearchEngine;
use crate::storage::FsStorage;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<Registry>,
    pub engine: Arc<SearchEngine>,
}

impl AppState {
    /// Build the state: open filesystem storage and load the persisted
    /// registry before any request is served.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let storage = Arc::new(FsStorage::new(config.registry_path()));
        let registry = Arc::new(Registry::open(storage.clone())?);
        let engine = Arc::new(SearchEngine::new(registry.clone(), storage));

        Ok(Self {
            config,
            registry,
            engine,
        })
    }
}
