//! Query embedding cache.
//!
//! Two tiers: a bounded in-process LRU in front of the store's `searches`
//! table. The table is the source of truth and holds at most one row per
//! normalized query; the LRU only saves the SQLite round-trip.

use std::collections::HashMap;
use std::sync::Arc;

use menagerie_core::Result;
use menagerie_store::VectorStore;
use parking_lot::Mutex;
use tracing::debug;

/// Where a cache hit was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTier {
    Memory,
    Store,
}

/// Thread-safe LRU of normalized query → embedding.
struct MemoryTier {
    entries: HashMap<String, Vec<f32>>,
    order: Vec<String>,
    max_size: usize,
}

impl MemoryTier {
    fn get(&mut self, query: &str) -> Option<Vec<f32>> {
        let vector = self.entries.get(query)?.clone();
        if let Some(pos) = self.order.iter().position(|k| k == query) {
            let key = self.order.remove(pos);
            self.order.push(key);
        }
        Some(vector)
    }

    fn put(&mut self, query: String, vector: Vec<f32>) {
        if self.max_size == 0 || self.entries.contains_key(&query) {
            return;
        }

        // Evict oldest if at capacity
        while self.entries.len() >= self.max_size && !self.order.is_empty() {
            let oldest = self.order.remove(0);
            self.entries.remove(&oldest);
        }

        self.order.push(query.clone());
        self.entries.insert(query, vector);
    }
}

/// Normalized query → embedding cache backed by a `VectorStore`.
pub struct QueryCache {
    store: Arc<dyn VectorStore>,
    memory: Mutex<MemoryTier>,
}

impl QueryCache {
    /// `memory_capacity` bounds the in-process tier; 0 disables it.
    pub fn new(store: Arc<dyn VectorStore>, memory_capacity: usize) -> Self {
        Self {
            store,
            memory: Mutex::new(MemoryTier {
                entries: HashMap::with_capacity(memory_capacity.min(1024)),
                order: Vec::with_capacity(memory_capacity.min(1024)),
                max_size: memory_capacity,
            }),
        }
    }

    /// Exact-match lookup by normalized query.
    pub fn lookup(&self, normalized: &str) -> Result<Option<Vec<f32>>> {
        Ok(self.lookup_with_tier(normalized)?.map(|(vector, _)| vector))
    }

    /// Like [`lookup`](Self::lookup), also reporting which tier answered.
    pub fn lookup_with_tier(&self, normalized: &str) -> Result<Option<(Vec<f32>, CacheTier)>> {
        if let Some(vector) = self.memory.lock().get(normalized) {
            return Ok(Some((vector, CacheTier::Memory)));
        }

        match self.store.lookup_query(normalized)? {
            Some(vector) => {
                self.memory
                    .lock()
                    .put(normalized.to_string(), vector.clone());
                Ok(Some((vector, CacheTier::Store)))
            }
            None => Ok(None),
        }
    }

    /// Record an embedding for a normalized query. An existing row wins;
    /// returns `true` only when this call wrote it.
    pub fn store(&self, normalized: &str, vector: &[f32]) -> Result<bool> {
        let inserted = self.store.insert_query(normalized, vector)?;
        if inserted {
            self.memory
                .lock()
                .put(normalized.to_string(), vector.to_vec());
        } else {
            debug!("Query {:?} already cached; keeping existing row", normalized);
        }
        Ok(inserted)
    }

    /// Entries currently held in memory.
    pub fn memory_len(&self) -> usize {
        self.memory.lock().entries.len()
    }

    /// Drop the in-memory tier. Stored rows are untouched.
    pub fn clear_memory(&self) {
        let mut memory = self.memory.lock();
        memory.entries.clear();
        memory.order.clear();
    }
}
