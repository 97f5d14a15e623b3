//! Catalog bootstrap: embeds the static dataset into an empty store once.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use menagerie_core::{Error, Result};
use menagerie_infer::EmbeddingProvider;
use menagerie_store::{CatalogRecord, VectorStore};
use tracing::{debug, info};

use crate::blocking::run_blocking;
use crate::types::{BootstrapOutcome, DatasetEntry};

/// Read the dataset: a JSON array of `{ "name", "description" }` records.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetEntry>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Dataset(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| Error::Dataset(format!("Invalid dataset {}: {}", path.display(), e)))
}

/// Ensures the store holds the embedded catalog at the configured
/// dimensionality; a catalog embedded at another size is rebuilt.
///
/// All embeddings are computed before anything is written, and the schema
/// reset, row inserts, and completion marker commit in one transaction.
/// A provider failure therefore leaves the store exactly as it was, and the
/// next `prepare()` starts over.
pub struct CatalogLoader {
    store: Arc<dyn VectorStore>,
    provider: Arc<dyn EmbeddingProvider>,
    dataset_path: PathBuf,
    dimensions: usize,
    batch_size: usize,
}

impl CatalogLoader {
    pub fn new(
        store: Arc<dyn VectorStore>,
        provider: Arc<dyn EmbeddingProvider>,
        dataset_path: impl Into<PathBuf>,
        dimensions: usize,
    ) -> Self {
        Self {
            store,
            provider,
            dataset_path: dataset_path.into(),
            dimensions,
            batch_size: 1,
        }
    }

    /// Descriptions sent per provider call. 1 (the default) embeds one
    /// description per call.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Bootstrap the catalog unless a complete one already exists.
    pub async fn prepare(&self) -> Result<BootstrapOutcome> {
        let store = self.store.clone();
        let dimensions = self.dimensions;
        if run_blocking(move || store.is_populated(dimensions)).await? {
            info!("Catalog already prepared; skipping bootstrap");
            return Ok(BootstrapOutcome::AlreadyPrepared);
        }

        let entries = load_dataset(&self.dataset_path)?;
        info!(
            "Bootstrapping catalog from {} ({} entries)",
            self.dataset_path.display(),
            entries.len()
        );
        let ids = self.bootstrap_entries(&entries).await?;
        Ok(BootstrapOutcome::Bootstrapped { items: ids.len() })
    }

    /// Embed `entries` and replace the store's catalog with them.
    pub async fn bootstrap_entries(&self, entries: &[DatasetEntry]) -> Result<Vec<i64>> {
        if entries.is_empty() {
            return Err(Error::Dataset("Dataset contains no entries".into()));
        }

        let embeddings = self.embed_descriptions(entries).await?;
        let records: Vec<CatalogRecord> = entries
            .iter()
            .zip(embeddings)
            .map(|(entry, embedding)| CatalogRecord {
                name: entry.name.clone(),
                description: entry.description.clone(),
                embedding,
            })
            .collect();

        let store = self.store.clone();
        let dimensions = self.dimensions;
        run_blocking(move || store.bootstrap(dimensions, &records)).await
    }

    async fn embed_descriptions(&self, entries: &[DatasetEntry]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(entries.len());

        if self.batch_size == 1 {
            for (i, entry) in entries.iter().enumerate() {
                debug!("Embedding catalog item {}/{}: {}", i + 1, entries.len(), entry.name);
                embeddings.push(self.provider.embed(&entry.description, self.dimensions).await?);
            }
            return Ok(embeddings);
        }

        for chunk in entries.chunks(self.batch_size) {
            let texts: Vec<String> = chunk.iter().map(|e| e.description.clone()).collect();
            debug!("Embedding {} catalog descriptions in one call", texts.len());
            let vectors = self.provider.embed_batch(&texts, self.dimensions).await?;
            if vectors.len() != texts.len() {
                return Err(Error::Provider(format!(
                    "{} returned {} embeddings for {} descriptions",
                    self.provider.name(),
                    vectors.len(),
                    texts.len()
                )));
            }
            embeddings.extend(vectors);
        }
        Ok(embeddings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "Otter", "description": "Swims in rivers."},
                {"name": "Mole", "description": "Digs tunnels."}
            ]"#,
        )
        .unwrap();

        let entries = load_dataset(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Otter");
        assert_eq!(entries[1].description, "Digs tunnels.");
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_dataset(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }

    #[test]
    fn test_load_dataset_rejects_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");
        std::fs::write(&path, r#"[{"name": "Otter"}]"#).unwrap();
        assert!(matches!(load_dataset(&path), Err(Error::Dataset(_))));
    }
}
