//! Runtime types.

use serde::{Deserialize, Serialize};

/// One record of the static catalog dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub name: String,
    pub description: String,
}

/// Result of [`CatalogLoader::prepare`](crate::CatalogLoader::prepare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// The store already held a complete catalog; nothing was done.
    AlreadyPrepared,
    /// Schema was (re)created and `items` catalog rows inserted.
    Bootstrapped { items: usize },
}

/// Retrieval parameters fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Nearest neighbors returned per query.
    pub top_k: usize,
    /// Dimensionality requested from the embedding provider.
    pub dimensions: usize,
}

impl SearchOptions {
    pub fn from_config(config: &menagerie_core::MenagerieConfig) -> Self {
        Self {
            top_k: config.search.top_k,
            dimensions: config.embedding.dimensions,
        }
    }
}
