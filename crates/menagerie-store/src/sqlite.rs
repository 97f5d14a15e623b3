//! SQLite-backed catalog and query cache with an in-memory cosine index.
//!
//! Catalog embeddings live in the `catalog` table as f32 BLOBs. Similarity
//! search runs against a pre-normalized `(N, dim)` matrix loaded from that
//! table, rebuilt lazily whenever the catalog changes.

use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::embedding::{decode_f32_blob, decode_json, encode_f32_blob, encode_json, l2_normalize};
use crate::schema::{
    CATALOG_EMBEDDING_INDEX, META_BOOTSTRAP_COMPLETE, META_DIMENSIONS, META_SCHEMA_VERSION,
    SCHEMA_SQL, SCHEMA_VERSION,
};
use crate::types::*;
use crate::vector_store::VectorStore;
use menagerie_core::{Error, Result};

/// SQLite store for the catalog and the query-embedding cache.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
    /// Normalized catalog embeddings used for top-k search.
    index: Mutex<EmbeddingIndex>,
}

struct EmbeddingIndex {
    /// Unit-length embeddings, shape (N, dim).
    matrix: Array2<f32>,
    /// Catalog ids corresponding to each row.
    ids: Vec<i64>,
    /// Whether the matrix needs reloading.
    dirty: bool,
}

impl SqliteStore {
    /// Open or create the database file. Does not create the schema;
    /// that happens during bootstrap.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
        }

        let conn = Connection::open(&db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;

        let store = Self::from_connection(conn, db_path);
        let stats = store.stats()?;
        info!(
            "SqliteStore opened: {} catalog items, {} cached queries, bootstrapped={}, path={}",
            stats.catalog_items,
            stats.cached_queries,
            stats.bootstrap_complete,
            store.db_path.display()
        );
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self::from_connection(conn, PathBuf::from(":memory:")))
    }

    fn from_connection(conn: Connection, db_path: PathBuf) -> Self {
        Self {
            conn: Mutex::new(conn),
            db_path,
            index: Mutex::new(EmbeddingIndex {
                matrix: Array2::zeros((0, 0)),
                ids: Vec::new(),
                dirty: true,
            }),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn mark_index_dirty(&self) {
        self.index.lock().dirty = true;
    }

    // ---------------------------------------------------------------
    // Schema & metadata helpers
    // ---------------------------------------------------------------

    fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                params![table],
                |row| row.get(0),
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count > 0)
    }

    fn read_meta(conn: &Connection, key: &str) -> Result<Option<String>> {
        if !Self::table_exists(conn, "store_meta")? {
            return Ok(None);
        }
        conn.prepare_cached("SELECT value FROM store_meta WHERE key = ?1")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![key], |row| row.get(0))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))
    }

    fn write_meta(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT OR REPLACE INTO store_meta (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    fn stored_dimensions(conn: &Connection) -> Result<Option<usize>> {
        Ok(Self::read_meta(conn, META_DIMENSIONS)?.and_then(|v| v.parse().ok()))
    }

    fn count_rows(conn: &Connection, table: &str) -> Result<i64> {
        if !Self::table_exists(conn, table)? {
            return Ok(0);
        }
        // Table names come from this module only.
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))
    }

    fn create_schema_on(conn: &Connection, dimensions: usize) -> Result<()> {
        if dimensions == 0 {
            return Err(Error::Storage("Embedding dimensions must be non-zero".into()));
        }
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;
        Self::write_meta(conn, META_SCHEMA_VERSION, &SCHEMA_VERSION.to_string())?;
        Self::write_meta(conn, META_DIMENSIONS, &dimensions.to_string())?;
        Self::write_meta(conn, META_BOOTSTRAP_COMPLETE, "0")?;
        Ok(())
    }

    fn insert_records_on(conn: &Connection, records: &[CatalogRecord]) -> Result<Vec<i64>> {
        let dimensions = Self::stored_dimensions(conn)?
            .ok_or_else(|| Error::Storage("Catalog schema has not been created".into()))?;

        let mut stmt = conn
            .prepare_cached("INSERT INTO catalog (name, description, embedding) VALUES (?1, ?2, ?3)")
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            if record.embedding.len() != dimensions {
                return Err(Error::Storage(format!(
                    "Embedding for '{}' has {} dimensions, catalog expects {}",
                    record.name,
                    record.embedding.len(),
                    dimensions
                )));
            }
            let blob = encode_f32_blob(&record.embedding);
            let id = stmt
                .insert(params![record.name, record.description, blob])
                .map_err(|e| Error::Database(e.to_string()))?;
            ids.push(id);
        }
        Ok(ids)
    }

    // ---------------------------------------------------------------
    // Similarity index
    // ---------------------------------------------------------------

    /// Load and normalize all catalog embeddings into the index matrix.
    ///
    /// The index is swapped in before the connection lock is released, so a
    /// write committed after the rows were read always leaves it dirty.
    fn load_index(&self) -> Result<()> {
        let conn = self.conn.lock();
        let dimensions = Self::stored_dimensions(&conn)?.unwrap_or(0);

        let mut ids = Vec::new();
        let mut rows: Vec<Vec<f32>> = Vec::new();
        if Self::table_exists(&conn, "catalog")? {
            let mut stmt = conn
                .prepare("SELECT id, embedding FROM catalog ORDER BY id")
                .map_err(|e| Error::Database(e.to_string()))?;
            let mapped = stmt
                .query_map([], |row| {
                    let id: i64 = row.get(0)?;
                    let blob: Vec<u8> = row.get(1)?;
                    Ok((id, blob))
                })
                .map_err(|e| Error::Database(e.to_string()))?;

            for row in mapped {
                let (id, blob) = row.map_err(|e| Error::Database(e.to_string()))?;
                let embedding = decode_f32_blob(&blob)?;
                if embedding.len() != dimensions {
                    return Err(Error::Storage(format!(
                        "Catalog row {} has {} dimensions, expected {}",
                        id,
                        embedding.len(),
                        dimensions
                    )));
                }
                ids.push(id);
                rows.push(embedding);
            }
        }

        let mut matrix = Array2::zeros((rows.len(), dimensions));
        for (i, embedding) in rows.into_iter().enumerate() {
            // Zero vectors stay zero and never rank above a real match.
            if let Some(unit) = l2_normalize(Array1::from(embedding)) {
                matrix.row_mut(i).assign(&unit);
            }
        }

        let mut index = self.index.lock();
        index.matrix = matrix;
        index.ids = ids;
        index.dirty = false;
        debug!(
            "Loaded {} embeddings into {}",
            index.ids.len(),
            CATALOG_EMBEDDING_INDEX
        );
        drop(index);
        drop(conn);
        Ok(())
    }

    fn ensure_index_loaded(&self) -> Result<()> {
        if self.index.lock().dirty {
            self.load_index()?;
        }
        Ok(())
    }
}

impl VectorStore for SqliteStore {
    fn create_schema(&self, dimensions: usize) -> Result<()> {
        let mut conn = self.conn.lock();
        let tx = conn
            .transaction()
            .map_err(|e| Error::Database(e.to_string()))?;
        Self::create_schema_on(&tx, dimensions)?;
        tx.commit().map_err(|e| Error::Database(e.to_string()))?;
        drop(conn);
        self.mark_index_dirty();
        Ok(())
    }

    fn batch_insert(&self, records: &[CatalogRecord]) -> Result<Vec<i64>> {
        let mut conn = self.conn.lock();
        let tx = conn
            .transaction()
            .map_err(|e| Error::Database(e.to_string()))?;
        let ids = Self::insert_records_on(&tx, records)?;
        tx.commit().map_err(|e| Error::Database(e.to_string()))?;
        drop(conn);
        self.mark_index_dirty();
        Ok(ids)
    }

    fn bootstrap(&self, dimensions: usize, records: &[CatalogRecord]) -> Result<Vec<i64>> {
        let mut conn = self.conn.lock();
        let tx = conn
            .transaction()
            .map_err(|e| Error::Database(e.to_string()))?;
        Self::create_schema_on(&tx, dimensions)?;
        let ids = Self::insert_records_on(&tx, records)?;
        Self::write_meta(&tx, META_BOOTSTRAP_COMPLETE, "1")?;
        tx.commit().map_err(|e| Error::Database(e.to_string()))?;
        drop(conn);

        self.mark_index_dirty();
        info!(
            "Bootstrapped catalog: {} items, dim={}, path={}",
            ids.len(),
            dimensions,
            self.db_path.display()
        );
        Ok(ids)
    }

    fn is_populated(&self, dimensions: usize) -> Result<bool> {
        let conn = self.conn.lock();
        let version = Self::read_meta(&conn, META_SCHEMA_VERSION)?;
        if version.as_deref() != Some(SCHEMA_VERSION.to_string().as_str()) {
            return Ok(false);
        }
        if Self::read_meta(&conn, META_BOOTSTRAP_COMPLETE)?.as_deref() != Some("1") {
            return Ok(false);
        }
        match Self::stored_dimensions(&conn)? {
            Some(stored) if stored == dimensions => {}
            stored => {
                info!(
                    "Catalog embeddings have {:?} dimensions, configured {}; catalog needs rebuilding",
                    stored, dimensions
                );
                return Ok(false);
            }
        }
        Ok(Self::count_rows(&conn, "catalog")? > 0)
    }

    fn lookup_query(&self, query: &str) -> Result<Option<Vec<f32>>> {
        let conn = self.conn.lock();
        let vector: Option<String> = conn
            .prepare_cached("SELECT vector FROM searches WHERE query = ?1 LIMIT 1")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![query], |row| row.get(0))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        drop(conn);
        vector.map(|text| decode_json(&text)).transpose()
    }

    fn insert_query(&self, query: &str, vector: &[f32]) -> Result<bool> {
        let encoded = encode_json(vector)?;
        let conn = self.conn.lock();
        let count = conn
            .prepare_cached("INSERT OR IGNORE INTO searches (query, vector) VALUES (?1, ?2)")
            .map_err(|e| Error::Database(e.to_string()))?
            .execute(params![query, encoded])
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count > 0)
    }

    fn top_k(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredId>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        self.ensure_index_loaded()?;

        let index = self.index.lock();
        if index.matrix.nrows() == 0 {
            return Ok(Vec::new());
        }
        if vector.len() != index.matrix.ncols() {
            return Err(Error::Search(format!(
                "Query vector has {} dimensions, {} expects {}",
                vector.len(),
                CATALOG_EMBEDDING_INDEX,
                index.matrix.ncols()
            )));
        }

        let q = match l2_normalize(Array1::from(vector.to_vec())) {
            Some(q) => q,
            None => return Ok(Vec::new()),
        };

        // (N, dim) @ (dim,) → (N,)
        let similarities = index.matrix.dot(&q);

        let mut ranked: Vec<(usize, f32)> = similarities.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| index.ids[a.0].cmp(&index.ids[b.0]))
        });
        ranked.truncate(k);

        Ok(ranked
            .into_iter()
            .map(|(i, score)| ScoredId {
                id: index.ids[i],
                score,
            })
            .collect())
    }

    fn get_items(&self, ids: &[i64]) -> Result<Vec<CatalogItem>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached("SELECT id, name, description FROM catalog WHERE id = ?1")
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut items = Vec::with_capacity(ids.len());
        for id in ids {
            let item = stmt
                .query_row(params![id], |row| {
                    Ok(CatalogItem {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                    })
                })
                .optional()
                .map_err(|e| Error::Database(e.to_string()))?;
            if let Some(item) = item {
                items.push(item);
            }
        }
        Ok(items)
    }

    fn stats(&self) -> Result<StoreStats> {
        let conn = self.conn.lock();
        let catalog_items = Self::count_rows(&conn, "catalog")?;
        let cached_queries = Self::count_rows(&conn, "searches")?;
        let dimensions = Self::stored_dimensions(&conn)?;
        let schema_version = Self::read_meta(&conn, META_SCHEMA_VERSION)?.and_then(|v| v.parse().ok());
        let bootstrap_complete =
            Self::read_meta(&conn, META_BOOTSTRAP_COMPLETE)?.as_deref() == Some("1");
        drop(conn);

        let db_size = std::fs::metadata(&self.db_path)
            .map(|m| m.len())
            .unwrap_or(0);

        let index = self.index.lock();
        let index_rows = index.matrix.nrows();

        Ok(StoreStats {
            catalog_items,
            cached_queries,
            dimensions,
            schema_version,
            bootstrap_complete,
            db_path: self.db_path.to_string_lossy().to_string(),
            db_size_mb: db_size as f64 / (1024.0 * 1024.0),
            index_loaded: !index.dirty,
            index_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("database.db")).unwrap();
        (store, dir)
    }

    fn record(name: &str, embedding: Vec<f32>) -> CatalogRecord {
        CatalogRecord {
            name: name.to_string(),
            description: format!("{} description", name),
            embedding,
        }
    }

    fn three_animals() -> Vec<CatalogRecord> {
        vec![
            record("Otter", vec![1.0, 0.0, 0.0]),
            record("Falcon", vec![0.0, 1.0, 0.0]),
            record("Mole", vec![0.0, 0.0, 1.0]),
        ]
    }

    #[test]
    fn test_fresh_store_is_not_populated() {
        let (store, _dir) = test_store();
        assert!(!store.is_populated(3).unwrap());
        let stats = store.stats().unwrap();
        assert_eq!(stats.catalog_items, 0);
        assert!(!stats.bootstrap_complete);
        assert!(stats.dimensions.is_none());
    }

    #[test]
    fn test_empty_existing_file_is_not_populated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.db");
        std::fs::write(&path, b"").unwrap();
        let store = SqliteStore::open(&path).unwrap();
        assert!(!store.is_populated(3).unwrap());
    }

    #[test]
    fn test_bootstrap_populates_catalog() {
        let (store, _dir) = test_store();
        let ids = store.bootstrap(3, &three_animals()).unwrap();
        assert_eq!(ids.len(), 3);
        assert!(store.is_populated(3).unwrap());

        let items = store.get_items(&ids).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Otter", "Falcon", "Mole"]);
        assert_eq!(items[0].description, "Otter description");

        let stats = store.stats().unwrap();
        assert_eq!(stats.catalog_items, 3);
        assert_eq!(stats.dimensions, Some(3));
        assert_eq!(stats.schema_version, Some(SCHEMA_VERSION));
        assert!(stats.bootstrap_complete);
    }

    #[test]
    fn test_schema_and_rows_without_marker_are_not_populated() {
        let (store, _dir) = test_store();
        store.create_schema(3).unwrap();
        store.batch_insert(&three_animals()).unwrap();
        assert_eq!(store.stats().unwrap().catalog_items, 3);
        assert!(!store.is_populated(3).unwrap());
    }

    #[test]
    fn test_schema_version_mismatch_is_not_populated() {
        let (store, _dir) = test_store();
        store.bootstrap(3, &three_animals()).unwrap();
        store
            .conn
            .lock()
            .execute(
                "UPDATE store_meta SET value = '0' WHERE key = ?1",
                params![META_SCHEMA_VERSION],
            )
            .unwrap();
        assert!(!store.is_populated(3).unwrap());
    }

    #[test]
    fn test_dimension_change_is_not_populated() {
        let (store, _dir) = test_store();
        store.bootstrap(3, &three_animals()).unwrap();
        assert!(store.is_populated(3).unwrap());
        assert!(!store.is_populated(2).unwrap());
        assert!(!store.is_populated(1024).unwrap());
    }

    #[test]
    fn test_index_never_goes_stale_under_concurrent_writes() {
        let (store, _dir) = test_store();
        store.bootstrap(3, &three_animals()).unwrap();
        let done = std::sync::atomic::AtomicBool::new(false);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..40 {
                    store
                        .batch_insert(&[record(&format!("Extra {}", i), vec![1.0, 1.0, 1.0])])
                        .unwrap();
                }
                done.store(true, std::sync::atomic::Ordering::SeqCst);
            });
            scope.spawn(|| {
                while !done.load(std::sync::atomic::Ordering::SeqCst) {
                    store.top_k(&[1.0, 0.0, 0.0], 100).unwrap();
                }
            });
        });

        assert_eq!(store.top_k(&[1.0, 0.0, 0.0], 100).unwrap().len(), 43);
    }

    #[test]
    fn test_bootstrap_is_destructive() {
        let (store, _dir) = test_store();
        store.bootstrap(3, &three_animals()).unwrap();
        store.insert_query("fast", &[1.0, 0.0, 0.0]).unwrap();

        store
            .bootstrap(2, &[record("Heron", vec![0.5, 0.5])])
            .unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.catalog_items, 1);
        assert_eq!(stats.cached_queries, 0);
        assert_eq!(stats.dimensions, Some(2));
    }

    #[test]
    fn test_failed_bootstrap_leaves_store_untouched() {
        let (store, _dir) = test_store();
        let mut records = three_animals();
        records.push(record("Broken", vec![1.0]));
        assert!(store.bootstrap(3, &records).is_err());
        assert!(!store.is_populated(3).unwrap());
        assert_eq!(store.stats().unwrap().catalog_items, 0);
    }

    #[test]
    fn test_batch_insert_requires_schema() {
        let (store, _dir) = test_store();
        assert!(matches!(
            store.batch_insert(&three_animals()),
            Err(Error::Storage(_))
        ));
    }

    #[test]
    fn test_populated_state_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/database.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.bootstrap(3, &three_animals()).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert!(store.is_populated(3).unwrap());
        let hits = store.top_k(&[0.0, 1.0, 0.0], 1).unwrap();
        assert_eq!(store.get_items(&[hits[0].id]).unwrap()[0].name, "Falcon");
    }

    #[test]
    fn test_query_cache_insert_or_ignore() {
        let (store, _dir) = test_store();
        store.bootstrap(3, &three_animals()).unwrap();

        assert!(store.lookup_query("swims fast").unwrap().is_none());
        assert!(store.insert_query("swims fast", &[0.25, 0.5, 1.0]).unwrap());
        assert!(!store.insert_query("swims fast", &[9.0, 9.0, 9.0]).unwrap());

        assert_eq!(
            store.lookup_query("swims fast").unwrap(),
            Some(vec![0.25, 0.5, 1.0])
        );
        assert_eq!(store.stats().unwrap().cached_queries, 1);
    }

    #[test]
    fn test_top_k_orders_closest_first() {
        let (store, _dir) = test_store();
        let ids = store.bootstrap(3, &three_animals()).unwrap();

        let hits = store.top_k(&[0.2, 0.9, 0.4], 3).unwrap();
        let order: Vec<i64> = hits.iter().map(|h| h.id).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
        assert!(hits[0].score > hits[1].score);

        // k larger than the catalog returns every row.
        assert_eq!(store.top_k(&[1.0, 0.0, 0.0], 10).unwrap().len(), 3);
        assert!(store.top_k(&[1.0, 0.0, 0.0], 0).unwrap().is_empty());
    }

    #[test]
    fn test_top_k_ties_break_by_id() {
        let (store, _dir) = test_store();
        let ids = store
            .bootstrap(
                2,
                &[record("A", vec![1.0, 1.0]), record("B", vec![1.0, 1.0])],
            )
            .unwrap();
        let hits = store.top_k(&[1.0, 1.0], 2).unwrap();
        assert_eq!(hits[0].id, ids[0]);
        assert_eq!(hits[1].id, ids[1]);
    }

    #[test]
    fn test_top_k_rejects_wrong_dimension() {
        let (store, _dir) = test_store();
        store.bootstrap(3, &three_animals()).unwrap();
        assert!(matches!(
            store.top_k(&[1.0, 0.0], 1),
            Err(Error::Search(_))
        ));
    }

    #[test]
    fn test_top_k_zero_vector_returns_nothing() {
        let (store, _dir) = test_store();
        store.bootstrap(3, &three_animals()).unwrap();
        assert!(store.top_k(&[0.0, 0.0, 0.0], 1).unwrap().is_empty());
    }

    #[test]
    fn test_index_reloads_after_insert() {
        let (store, _dir) = test_store();
        store.bootstrap(3, &three_animals()).unwrap();
        assert_eq!(store.top_k(&[1.0, 1.0, 1.0], 5).unwrap().len(), 3);

        store
            .batch_insert(&[record("Lynx", vec![1.0, 1.0, 1.0])])
            .unwrap();
        let hits = store.top_k(&[1.0, 1.0, 1.0], 5).unwrap();
        assert_eq!(hits.len(), 4);
        assert_eq!(store.get_items(&[hits[0].id]).unwrap()[0].name, "Lynx");
    }

    #[test]
    fn test_get_items_preserves_order_and_skips_unknown() {
        let (store, _dir) = test_store();
        let ids = store.bootstrap(3, &three_animals()).unwrap();
        let items = store.get_items(&[ids[2], 999, ids[0]]).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Mole", "Otter"]);
    }

    #[test]
    fn test_in_memory_store() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.bootstrap(3, &three_animals()).unwrap();
        assert!(store.is_populated(3).unwrap());
        assert_eq!(store.db_path(), Path::new(":memory:"));
    }
}
