//! Catalog rows, cache rows, and store statistics.

use serde::{Deserialize, Serialize};

/// A catalog item as returned to callers. The embedding stays in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A catalog row ready for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct CatalogRecord {
    pub name: String,
    pub description: String,
    pub embedding: Vec<f32>,
}

/// Top-k hit: catalog id and cosine similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredId {
    pub id: i64,
    pub score: f32,
}

/// Store-level statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub catalog_items: i64,
    pub cached_queries: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<i64>,
    pub bootstrap_complete: bool,
    pub db_path: String,
    pub db_size_mb: f64,
    pub index_loaded: bool,
    pub index_rows: usize,
}
