//! Menagerie Infer: embedding providers.
//!
//! Provides the `EmbeddingProvider` trait, the OpenAI embeddings client,
//! and a retry wrapper applied when `APP_EMBED_RETRIES` allows more than
//! one attempt.

pub mod embedder;
pub mod openai;
pub mod retry;

pub use embedder::EmbeddingProvider;
pub use openai::OpenAiEmbedder;
pub use retry::RetryingEmbedder;

use std::sync::Arc;
use std::time::Duration;

use menagerie_core::{EmbeddingConfig, Result};

/// Create the configured embedding provider.
pub fn create_embedder(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let openai = OpenAiEmbedder::new(config)?;

    if config.max_attempts > 1 {
        tracing::info!(
            "Using OpenAI embedder (model={}, dim={}, attempts={})",
            config.model,
            config.dimensions,
            config.max_attempts
        );
        return Ok(Arc::new(RetryingEmbedder::new(
            openai,
            config.max_attempts,
            Duration::from_millis(config.retry_delay_ms),
        )));
    }

    tracing::info!(
        "Using OpenAI embedder (model={}, dim={})",
        config.model,
        config.dimensions
    );
    Ok(Arc::new(openai))
}
