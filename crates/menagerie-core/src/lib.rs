//! Menagerie Core: configuration and the shared error taxonomy.

pub mod config;
pub mod error;

pub use config::{EmbeddingConfig, MenagerieConfig, SearchConfig};
pub use error::{Error, Result};
