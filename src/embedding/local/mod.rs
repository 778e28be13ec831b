//! Local in-process embedder (BERT + tokenizer).
//!
//! This is the fallback path of the provider stack: always available, no
//! network. Use [`LocalConfig::stub`] for tests/examples without model files.

/// Local embedder configuration.
pub mod config;
pub(crate) mod model;

#[cfg(test)]
mod tests;

pub use config::LocalConfig;

use std::sync::Arc;

use candle_core::{Device, Tensor};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_tokenizer;

use model::BertForEmbedding;

#[derive(Clone)]
enum LocalBackend {
    Model {
        model: Arc<Mutex<BertForEmbedding>>,
        tokenizer: Arc<tokenizers::Tokenizer>,
        device: Device,
    },
    Stub,
}

/// Sentence embedder backed by a local MiniLM-class model, with a
/// deterministic stub backend for configurations without model files.
///
/// Cloning is cheap; the model handle is shared and read-only after load.
#[derive(Clone)]
pub struct LocalEmbedder {
    backend: LocalBackend,
    config: LocalConfig,
}

impl std::fmt::Debug for LocalEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    LocalBackend::Model { device, .. } => format!("Model({:?})", device),
                    LocalBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl LocalEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: LocalConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Local embedder running in STUB mode (deterministic hash vectors)");
            return Ok(Self {
                backend: LocalBackend::Stub,
                config,
            });
        }

        if !config.model_available() || !config.tokenizer_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        let device = Device::Cpu;
        let tokenizer = load_tokenizer(&config.tokenizer_path, config.max_seq_len)?;
        let model = BertForEmbedding::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        if config.embedding_dim > model.hidden_size() {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) exceeds model hidden_size ({})",
                    config.embedding_dim,
                    model.hidden_size()
                ),
            });
        }

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            hidden_size = model.hidden_size(),
            "Local embedding model loaded"
        );

        Ok(Self {
            backend: LocalBackend::Model {
                model: Arc::new(Mutex::new(model)),
                tokenizer: Arc::new(tokenizer),
                device,
            },
            config,
        })
    }

    /// Creates a stub embedder directly (never fails).
    pub fn stub() -> Self {
        Self {
            backend: LocalBackend::Stub,
            config: LocalConfig::stub(),
        }
    }

    /// Generates an embedding for a single string.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            LocalBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            LocalBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    /// Generates embeddings for a batch of strings, index-aligned with input.
    pub fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &Arc<Mutex<BertForEmbedding>>,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let tokens: Vec<u32> = encoding.get_ids().to_vec();
        if tokens.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generating embedding (encoder forward pass)"
        );

        let seq_len = tokens.len();
        let input_ids = Tensor::new(&tokens[..], device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        // The model handle is shared across clones; inference is serialized.
        let hidden_states = model.lock().forward(&input_ids, &token_type_ids)?;

        // Mean pooling over the sequence: [1, seq, hidden] -> [hidden].
        let pooled = hidden_states
            .sum(1)?
            .affine(1.0 / seq_len as f64, 0.0)?
            .squeeze(0)?;

        let mut embedding = pooled.to_vec1::<f32>()?;
        embedding.truncate(self.config.embedding_dim);

        Ok(l2_normalize(embedding))
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "Generating stub embedding");

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish();

        // splitmix64 stream seeded by the text hash: identical texts always
        // produce identical vectors, distinct texts near-orthogonal ones.
        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^= z >> 31;
            let value = ((z >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        l2_normalize(embedding)
    }

    /// Returns the configured output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, LocalBackend::Stub)
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &LocalConfig {
        &self.config
    }
}

fn l2_normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
