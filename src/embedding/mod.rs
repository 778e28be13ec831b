//! Embedding provider stack.
//!
//! - [`remote`] is the preferred provider, reached over HTTP.
//! - [`local`] is the in-process fallback model.
//! - [`Embedder`] composes the two: any primary failure degrades
//!   transparently to the local model and is never surfaced to callers.
//!
//! One [`Embedder::embed_batch`] call resolves to exactly one provider path,
//! so every vector in the returned [`EmbeddingBatch`] lives in the same
//! space. Vectors from different batches must not be compared unless their
//! [`EmbeddingSource`]s match.

mod error;
/// Local fallback model.
pub mod local;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Remote HTTP provider.
pub mod remote;
/// Tokenizer/text helpers.
pub(crate) mod utils;


pub use error::EmbeddingError;
pub use local::{LocalConfig, LocalEmbedder};
pub use remote::{RemoteConfig, RemoteEmbedder};

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::{Config, ProviderKind};

/// Which provider path produced a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingSource {
    /// Remote HTTP provider.
    Remote,
    /// Local in-process model (or its stub).
    Local,
}

impl std::fmt::Display for EmbeddingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbeddingSource::Remote => write!(f, "remote"),
            EmbeddingSource::Local => write!(f, "local"),
        }
    }
}

/// A single embedding, annotated with the provider path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    /// The embedding vector.
    pub vector: Vec<f32>,
    /// Provider path that produced the vector.
    pub source: EmbeddingSource,
}

impl Embedding {
    /// Returns the vector dimension.
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

/// Index-aligned batch of embeddings from a single provider invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingBatch {
    vectors: Vec<Vec<f32>>,
    source: EmbeddingSource,
}

impl EmbeddingBatch {
    /// Number of vectors (equals the number of inputs).
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if the batch holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Returns the vector for input position `index`.
    pub fn get(&self, index: usize) -> Option<&[f32]> {
        self.vectors.get(index).map(Vec::as_slice)
    }

    /// All vectors, in input order.
    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    /// Consumes the batch, returning the vectors.
    pub fn into_vectors(self) -> Vec<Vec<f32>> {
        self.vectors
    }

    /// Provider path that produced this batch.
    pub fn source(&self) -> EmbeddingSource {
        self.source
    }

    /// Dimension of the vectors in this batch (0 when empty).
    pub fn dimension(&self) -> usize {
        self.vectors.first().map_or(0, Vec::len)
    }
}

/// A provider backend the [`Embedder`] can try before falling back.
pub trait EmbeddingBackend: Send + Sync {
    /// Embeds `texts`, returning one vector per input in order.
    fn embed_batch(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, EmbeddingError>> + Send;

    /// Dimension of vectors this backend produces.
    fn dimension(&self) -> usize;
}

/// Primary/fallback embedding facade.
///
/// The primary backend (typically [`RemoteEmbedder`]) is optional; the local
/// fallback is not. Provider failures on the primary path are logged and
/// recovered; an error escapes only when the fallback itself fails.
///
/// The facade holds no mutable state, so one instance is safely shared
/// across concurrent scoring calls. Dropping an in-flight future abandons
/// the provider call without side effects.
#[derive(Debug)]
pub struct Embedder<P: EmbeddingBackend = RemoteEmbedder> {
    primary: Option<P>,
    fallback: LocalEmbedder,
}

impl<P: EmbeddingBackend> Embedder<P> {
    /// Composes a primary backend with the local fallback.
    pub fn with_primary(primary: P, fallback: LocalEmbedder) -> Self {
        Self {
            primary: Some(primary),
            fallback,
        }
    }

    /// Returns `true` if a primary backend is configured.
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Returns the primary backend, if configured.
    pub fn primary(&self) -> Option<&P> {
        self.primary.as_ref()
    }

    /// Returns the local fallback embedder.
    pub fn fallback(&self) -> &LocalEmbedder {
        &self.fallback
    }

    /// Embeds one text.
    pub async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let texts = [text.to_string()];
        let batch = self.embed_batch(&texts).await?;

        let source = batch.source();
        let mut vectors = batch.into_vectors();
        let vector = vectors.pop().ok_or(EmbeddingError::BatchSizeMismatch {
            expected: 1,
            actual: 0,
        })?;

        Ok(Embedding { vector, source })
    }

    /// Embeds a batch of texts, index-aligned with input.
    ///
    /// Repeated inputs are deduplicated before the provider call; duplicates
    /// map to identical vectors in the result. The whole batch is served by
    /// one provider path.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<EmbeddingBatch, EmbeddingError> {
        let (unique, index_map) = dedup_preserving_order(texts);

        if unique.len() < texts.len() {
            debug!(
                inputs = texts.len(),
                unique = unique.len(),
                "Deduplicated embedding batch"
            );
        }

        if let Some(primary) = &self.primary {
            match primary.embed_batch(&unique).await {
                Ok(vectors) => {
                    return expand_batch(vectors, unique.len(), &index_map, EmbeddingSource::Remote);
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        batch_size = unique.len(),
                        "Primary embedding provider failed, falling back to local model"
                    );
                }
            }
        }

        // Local inference is CPU-bound; keep it off the async scheduler.
        let local = self.fallback.clone();
        let inputs = unique.clone();
        let vectors = tokio::task::spawn_blocking(move || local.embed_batch(&inputs))
            .await
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("embedding task failed: {}", e),
            })??;

        expand_batch(vectors, unique.len(), &index_map, EmbeddingSource::Local)
    }
}

impl Embedder<RemoteEmbedder> {
    /// Builds the provider stack described by `config`.
    ///
    /// The remote path is enabled only when selected and credentialed; the
    /// local fallback uses the configured model directory or, absent one, the
    /// deterministic stub.
    pub fn from_config(config: &Config) -> Result<Self, EmbeddingError> {
        let fallback = match &config.model_dir {
            Some(dir) => {
                let mut local_config = LocalConfig::new(dir);
                if let Some(path) = &config.tokenizer_path {
                    local_config = local_config.tokenizer_path(path);
                }
                LocalEmbedder::load(local_config)?
            }
            None => {
                warn!("No local model directory configured, using deterministic stub embedder");
                LocalEmbedder::stub()
            }
        };

        let primary = if config.remote_enabled() {
            // remote_enabled() guarantees the key is present and non-empty.
            let api_key = config.api_key.clone().unwrap_or_default();
            Some(RemoteEmbedder::new(RemoteConfig {
                endpoint: config.remote_endpoint.clone(),
                model: config.remote_model.clone(),
                api_key,
                request_timeout: config.request_timeout(),
                ..Default::default()
            })?)
        } else {
            if config.provider == ProviderKind::Remote {
                warn!("Remote provider selected but no API key configured, using local embeddings only");
            }
            None
        };

        Ok(Self { primary, fallback })
    }

    /// Builds a local-only stack (no primary backend).
    pub fn local_only(fallback: LocalEmbedder) -> Self {
        Self {
            primary: None,
            fallback,
        }
    }
}

fn dedup_preserving_order(texts: &[String]) -> (Vec<String>, Vec<usize>) {
    let mut unique: Vec<String> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut index_map = Vec::with_capacity(texts.len());

    for text in texts {
        let idx = match positions.get(text.as_str()) {
            Some(&idx) => idx,
            None => {
                let idx = unique.len();
                positions.insert(text.as_str(), idx);
                unique.push(text.clone());
                idx
            }
        };
        index_map.push(idx);
    }

    (unique, index_map)
}

fn expand_batch(
    unique_vectors: Vec<Vec<f32>>,
    unique_len: usize,
    index_map: &[usize],
    source: EmbeddingSource,
) -> Result<EmbeddingBatch, EmbeddingError> {
    if unique_vectors.len() != unique_len {
        return Err(EmbeddingError::BatchSizeMismatch {
            expected: unique_len,
            actual: unique_vectors.len(),
        });
    }

    let vectors = index_map
        .iter()
        .map(|&idx| unique_vectors[idx].clone())
        .collect();

    Ok(EmbeddingBatch { vectors, source })
}
