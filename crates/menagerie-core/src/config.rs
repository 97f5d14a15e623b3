//! Configuration loaded from `APP_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1024;
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Embedding provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// OpenAI API key (`APP_OPENAI_KEY`).
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Optional OpenAI organization (`APP_OPENAI_ORGANIZATION`).
    pub organization: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Target dimensionality requested for every embedding.
    pub dimensions: usize,
    /// Total attempts per embedding call; 1 disables retrying.
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    /// Descriptions per provider call during bootstrap.
    pub batch_size: usize,
}

/// Retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of nearest neighbors returned per query.
    pub top_k: usize,
    /// Entries held by the in-memory query cache tier (0 disables it).
    pub memory_cache_entries: usize,
}

/// Top-level Menagerie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenagerieConfig {
    /// HTTP server port.
    pub port: u16,
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Static catalog dataset (JSON array of `{name, description}`).
    pub dataset_path: PathBuf,
    /// Directory served for non-API requests.
    pub static_dir: PathBuf,
    pub embedding: EmbeddingConfig,
    pub search: SearchConfig,
}

impl MenagerieConfig {
    /// Create configuration from the process environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let embedding = EmbeddingConfig {
            api_key: get("APP_OPENAI_KEY").unwrap_or_default(),
            organization: get("APP_OPENAI_ORGANIZATION"),
            base_url: get("APP_OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: get("APP_EMBEDDING_MODEL")
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            dimensions: parse_or(&get, "APP_EMBEDDING_DIMENSIONS", DEFAULT_EMBEDDING_DIMENSIONS)?,
            max_attempts: parse_or(&get, "APP_EMBED_RETRIES", 1)?,
            retry_delay_ms: parse_or(&get, "APP_EMBED_RETRY_DELAY_MS", 250)?,
            batch_size: parse_or(&get, "APP_EMBED_BATCH_SIZE", 1)?,
        };

        if embedding.dimensions == 0 {
            return Err(Error::Config(
                "APP_EMBEDDING_DIMENSIONS must be greater than zero".into(),
            ));
        }

        let search = SearchConfig {
            top_k: parse_or(&get, "APP_SEARCH_TOP_K", 1)?,
            memory_cache_entries: parse_or(&get, "APP_QUERY_CACHE_MEMORY", 1000)?,
        };

        Ok(Self {
            port: parse_or(&get, "APP_SERVER_PORT", DEFAULT_SERVER_PORT)?,
            database_path: get("APP_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("database.db")),
            dataset_path: get("APP_DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/animals.json")),
            static_dir: get("APP_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            embedding,
            search,
        })
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}
