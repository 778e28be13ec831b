use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The embedding subsystem is entirely unavailable (the remote path, if
    /// any, already degraded and the local fallback failed too).
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("scoring computation failed: {reason}")]
    ComputationFailed { reason: String },
}
