//! The storage capability the catalog loader, query cache, and search
//! orchestrator depend on.

use menagerie_core::Result;

use crate::types::{CatalogItem, CatalogRecord, ScoredId, StoreStats};

/// Catalog + query-cache storage with exact lookup and cosine top-k.
pub trait VectorStore: Send + Sync {
    /// Drop and recreate the catalog, cache, and metadata tables.
    fn create_schema(&self, dimensions: usize) -> Result<()>;

    /// Insert catalog rows in one transaction. Returns ids in input order.
    fn batch_insert(&self, records: &[CatalogRecord]) -> Result<Vec<i64>>;

    /// Schema reset, catalog insert, and bootstrap marker in one transaction.
    fn bootstrap(&self, dimensions: usize, records: &[CatalogRecord]) -> Result<Vec<i64>>;

    /// Whether a complete bootstrap of the current schema version exists
    /// with embeddings of `dimensions` length.
    fn is_populated(&self, dimensions: usize) -> Result<bool>;

    /// Exact-match lookup of a cached query vector.
    fn lookup_query(&self, query: &str) -> Result<Option<Vec<f32>>>;

    /// Insert a cached query unless one already exists for `query`.
    /// Returns `true` when a row was written.
    fn insert_query(&self, query: &str, vector: &[f32]) -> Result<bool>;

    /// Nearest catalog ids to `vector`, closest first.
    fn top_k(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredId>>;

    /// Catalog rows for `ids`, in the order given. Unknown ids are skipped.
    fn get_items(&self, ids: &[i64]) -> Result<Vec<CatalogItem>>;

    fn stats(&self) -> Result<StoreStats>;
}
