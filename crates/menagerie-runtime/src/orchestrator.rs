//! Search orchestrator: normalize, consult the cache, embed on a miss,
//! then retrieve the nearest catalog items.

use std::sync::Arc;

use menagerie_core::Result;
use menagerie_infer::EmbeddingProvider;
use menagerie_store::{CatalogItem, VectorStore};
use tracing::debug;

use crate::blocking::run_blocking;
use crate::cache::QueryCache;
use crate::normalize::{is_valid_query, normalize};
use crate::types::SearchOptions;

/// End-to-end query → catalog items pipeline.
///
/// Each call is independent; the only shared state is the store and the
/// query cache. Store and cache work runs on the blocking pool. Concurrent misses on the same query may each call the
/// provider, but the cache keeps a single row for it.
pub struct SearchOrchestrator {
    store: Arc<dyn VectorStore>,
    provider: Arc<dyn EmbeddingProvider>,
    cache: Arc<QueryCache>,
    options: SearchOptions,
}

impl SearchOrchestrator {
    pub fn new(
        store: Arc<dyn VectorStore>,
        provider: Arc<dyn EmbeddingProvider>,
        cache: QueryCache,
        options: SearchOptions,
    ) -> Self {
        Self {
            store,
            provider,
            cache: Arc::new(cache),
            options,
        }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Nearest catalog items for `raw`, closest first. Queries that are
    /// empty after normalization yield no results and touch nothing.
    pub async fn search(&self, raw: &str) -> Result<Vec<CatalogItem>> {
        let query = normalize(raw);
        if !is_valid_query(&query) {
            debug!("Ignoring empty query");
            return Ok(Vec::new());
        }

        let vector = self.query_vector(&query).await?;

        let store = self.store.clone();
        let top_k = self.options.top_k;
        let (hits, items) = run_blocking(move || {
            let hits = store.top_k(&vector, top_k)?;
            let ids: Vec<i64> = hits.iter().map(|h| h.id).collect();
            let items = store.get_items(&ids)?;
            Ok((hits, items))
        })
        .await?;

        debug!(
            "Search {:?}: {} result(s), best score {:?}",
            query,
            items.len(),
            hits.first().map(|h| h.score)
        );
        Ok(items)
    }

    /// Cached embedding for a normalized query, computing and caching it
    /// on a miss. The cache is written only after the provider succeeds.
    async fn query_vector(&self, query: &str) -> Result<Vec<f32>> {
        let cache = self.cache.clone();
        let key = query.to_string();
        if let Some((vector, tier)) = run_blocking(move || cache.lookup_with_tier(&key)).await? {
            debug!("Query cache hit ({:?}) for {:?}", tier, query);
            return Ok(vector);
        }

        debug!(
            "Query cache miss for {:?}; embedding with {}",
            query,
            self.provider.name()
        );
        let vector = self
            .provider
            .embed(query, self.options.dimensions)
            .await?;
        let cache = self.cache.clone();
        let key = query.to_string();
        run_blocking(move || {
            cache.store(&key, &vector)?;
            Ok(vector)
        })
        .await
    }
}
