//! Mock embedding backends for tests.

use parking_lot::Mutex;

use crate::constants::REMOTE_EMBEDDING_DIM;
use crate::embedding::error::EmbeddingError;
use crate::embedding::{EmbeddingBackend, LocalEmbedder};

/// Backend that fails every call, for exercising the fallback path.
#[derive(Debug)]
pub struct FailingBackend {
    dimension: usize,
}

impl Default for FailingBackend {
    fn default() -> Self {
        Self {
            dimension: REMOTE_EMBEDDING_DIM,
        }
    }
}

impl FailingBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmbeddingBackend for FailingBackend {
    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Err(EmbeddingError::RequestFailed {
            reason: "simulated provider outage".to_string(),
        })
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Backend that records every batch it receives and answers with
/// deterministic stub vectors. Lets tests assert call counts and dedup
/// behavior without a network.
#[derive(Debug)]
pub struct RecordingBackend {
    embedder: LocalEmbedder,
    calls: Mutex<Vec<Vec<String>>>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            embedder: LocalEmbedder::stub(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All batches received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }

    /// Number of provider calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl EmbeddingBackend for RecordingBackend {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.lock().push(texts.to_vec());
        self.embedder.embed_batch(texts)
    }

    fn dimension(&self) -> usize {
        self.embedder.embedding_dim()
    }
}
