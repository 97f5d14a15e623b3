//! Embedding provider trait.
//!
//! `EmbeddingProvider` abstracts over whatever turns text into a vector.
//! Implementations:
//! - `OpenAiEmbedder`: the OpenAI `embeddings` API
//! - `RetryingEmbedder`: bounded exponential-backoff wrapper over another provider

use async_trait::async_trait;
use menagerie_core::{Error, Result};

/// Maps text to a fixed-length vector.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed one text. The returned vector has exactly `dimensions` entries.
    async fn embed(&self, text: &str, dimensions: usize) -> Result<Vec<f32>>;

    /// Embed several texts, preserving input order.
    async fn embed_batch(&self, texts: &[String], dimensions: usize) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text, dimensions).await?);
        }
        Ok(vectors)
    }

    /// Short identifier for logs.
    fn name(&self) -> &str;
}

/// Reject vectors whose length differs from the requested dimensionality.
pub fn check_dimensions(vector: Vec<f32>, dimensions: usize) -> Result<Vec<f32>> {
    if vector.len() != dimensions {
        return Err(Error::Provider(format!(
            "Expected {} dimensions, provider returned {}",
            dimensions,
            vector.len()
        )));
    }
    Ok(vector)
}
