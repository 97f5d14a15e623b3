//! OpenAI `embeddings` API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::embedder::{check_dimensions, EmbeddingProvider};
use menagerie_core::{EmbeddingConfig, Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

/// Embedding provider backed by `POST {base_url}/embeddings`.
pub struct OpenAiEmbedder {
    client: Client,
    base_url: String,
    api_key: String,
    organization: Option<String>,
    model: String,
}

impl OpenAiEmbedder {
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config("APP_OPENAI_KEY is not set".into()));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            organization: config.organization.clone(),
            model: config.model.clone(),
        })
    }

    /// Send one request; `input` is a string or an array of strings.
    async fn request(&self, input: serde_json::Value, dimensions: usize) -> Result<Vec<Vec<f32>>> {
        let url = format!("{}/embeddings", self.base_url);
        let body = json!({
            "model": self.model,
            "input": input,
            "dimensions": dimensions,
            "encoding_format": "float",
        });

        debug!("Requesting embeddings from {} with model {}", url, self.model);

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body);
        if let Some(org) = &self.organization {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = format!("API error {}: {}", status, body);
            // Rate limits and upstream failures are worth retrying; the rest are not.
            return Err(if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                Error::Http(message)
            } else {
                Error::Provider(message)
            });
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| Error::Provider(format!("Malformed embeddings response: {}", e)))?;

        let mut data = parsed.data;
        data.sort_by_key(|d| d.index);
        data.into_iter()
            .map(|d| check_dimensions(d.embedding, dimensions))
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    async fn embed(&self, text: &str, dimensions: usize) -> Result<Vec<f32>> {
        let mut vectors = self.request(json!(text), dimensions).await?;
        if vectors.len() != 1 {
            return Err(Error::Provider(format!(
                "Expected 1 embedding, received {}",
                vectors.len()
            )));
        }
        Ok(vectors.remove(0))
    }

    async fn embed_batch(&self, texts: &[String], dimensions: usize) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let vectors = self.request(json!(texts), dimensions).await?;
        if vectors.len() != texts.len() {
            return Err(Error::Provider(format!(
                "Expected {} embeddings, received {}",
                texts.len(),
                vectors.len()
            )));
        }
        Ok(vectors)
    }

    fn name(&self) -> &str {
        "openai"
    }
}
