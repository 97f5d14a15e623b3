//! Shared application state.

use std::sync::Arc;

use menagerie_core::MenagerieConfig;
use menagerie_infer::EmbeddingProvider;
use menagerie_runtime::{CatalogLoader, QueryCache, SearchOptions, SearchOrchestrator};
use menagerie_store::{SqliteStore, VectorStore};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: MenagerieConfig,
    pub store: Arc<SqliteStore>,
    pub embedder: Arc<dyn EmbeddingProvider>,
    pub orchestrator: SearchOrchestrator,
}

impl AppState {
    pub fn new(
        config: MenagerieConfig,
        store: Arc<SqliteStore>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        let dyn_store: Arc<dyn VectorStore> = store.clone();
        let cache = QueryCache::new(dyn_store.clone(), config.search.memory_cache_entries);
        let orchestrator = SearchOrchestrator::new(
            dyn_store,
            embedder.clone(),
            cache,
            SearchOptions::from_config(&config),
        );

        Self {
            config,
            store,
            embedder,
            orchestrator,
        }
    }

    /// Loader for the configured dataset, sharing this state's store and embedder.
    pub fn catalog_loader(&self) -> CatalogLoader {
        CatalogLoader::new(
            self.store.clone(),
            self.embedder.clone(),
            self.config.dataset_path.clone(),
            self.config.embedding.dimensions,
        )
        .with_batch_size(self.config.embedding.batch_size)
    }
}
