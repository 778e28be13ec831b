use std::time::Duration;

use crate::constants::{
    DEFAULT_REMOTE_ENDPOINT, DEFAULT_REMOTE_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
    REMOTE_EMBEDDING_DIM,
};
use crate::embedding::error::EmbeddingError;

#[derive(Clone)]
/// Configuration for [`RemoteEmbedder`](super::RemoteEmbedder).
pub struct RemoteConfig {
    /// Embeddings endpoint URL.
    pub endpoint: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Bearer token for the provider.
    pub api_key: String,
    /// Per-request timeout. A timeout is treated like any other provider
    /// failure and triggers the local fallback.
    pub request_timeout: Duration,
    /// Dimension of vectors this model returns.
    pub dimension: usize,
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"***")
            .field("request_timeout", &self.request_timeout)
            .field("dimension", &self.dimension)
            .finish()
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
            model: DEFAULT_REMOTE_MODEL.to_string(),
            api_key: String::new(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            dimension: REMOTE_EMBEDDING_DIM,
        }
    }
}

impl RemoteConfig {
    /// Creates a config with the given API key and defaults for everything else.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Validates required fields.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.api_key.is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "api_key is required for the remote provider".to_string(),
            });
        }

        if self.endpoint.is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "endpoint must not be empty".to_string(),
            });
        }

        if self.model.is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
