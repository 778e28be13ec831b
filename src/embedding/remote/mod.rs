//! Remote embedding provider (HTTP).
//!
//! Speaks the OpenAI-style embeddings wire shape: POST `{model, input}`,
//! response `{data: [{index, embedding}]}`. Every error here is recoverable
//! by design; the [`Embedder`](crate::embedding::Embedder) facade catches it
//! and degrades to the local model.

/// Remote provider configuration.
pub mod config;


pub use config::RemoteConfig;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::MAX_EMBED_INPUT_CHARS;
use crate::embedding::EmbeddingBackend;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::truncate_chars;

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    index: usize,
    embedding: Vec<f32>,
}

/// HTTP-backed embedding provider.
pub struct RemoteEmbedder {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl std::fmt::Debug for RemoteEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteEmbedder")
            .field("config", &self.config)
            .finish()
    }
}

impl RemoteEmbedder {
    /// Builds the provider and its HTTP client (applies the request timeout).
    pub fn new(config: RemoteConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| EmbeddingError::InvalidConfig {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    /// Returns the provider configuration.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    async fn request_embeddings(
        &self,
        texts: &[String],
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let input: Vec<&str> = texts
            .iter()
            .map(|t| truncate_chars(t, MAX_EMBED_INPUT_CHARS))
            .collect();

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            batch_size = input.len(),
            "Requesting remote embeddings"
        );

        let request = EmbeddingRequest {
            model: &self.config.model,
            input,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::RequestFailed {
                reason: format!("HTTP {}: {}", status, body),
            });
        }

        let payload: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        vectors_from_response(payload, texts.len(), self.config.dimension)
    }
}

impl EmbeddingBackend for RemoteEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        self.request_embeddings(texts).await
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }
}

/// Reorders provider rows by their declared index and validates the batch
/// shape. Providers are expected to return one row per input.
fn vectors_from_response(
    payload: EmbeddingResponse,
    expected: usize,
    dimension: usize,
) -> Result<Vec<Vec<f32>>, EmbeddingError> {
    if payload.data.len() != expected {
        return Err(EmbeddingError::BatchSizeMismatch {
            expected,
            actual: payload.data.len(),
        });
    }

    let mut rows = payload.data;
    rows.sort_by_key(|row| row.index);

    for (position, row) in rows.iter().enumerate() {
        if row.index != position {
            return Err(EmbeddingError::MalformedResponse {
                reason: format!("non-contiguous row index {} at position {}", row.index, position),
            });
        }
        if row.embedding.len() != dimension {
            return Err(EmbeddingError::MalformedResponse {
                reason: format!(
                    "row {} has dimension {}, expected {}",
                    row.index,
                    row.embedding.len(),
                    dimension
                ),
            });
        }
    }

    Ok(rows.into_iter().map(|row| row.embedding).collect())
}
