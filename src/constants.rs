//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.
//!
//! # Dimension Invariants
//!
//! Vectors produced by the remote provider and by the local model live in
//! different spaces and must never be compared against each other. Every
//! [`EmbeddingBatch`](crate::embedding::EmbeddingBatch) records which provider
//! produced it so callers can enforce this at module boundaries.

/// Dimension of vectors returned by the default remote provider
/// (`text-embedding-3-small`).
pub const REMOTE_EMBEDDING_DIM: usize = 1536;

/// Dimension of vectors returned by the local MiniLM-class model (and the
/// deterministic stub used in its place when no model files are configured).
pub const LOCAL_EMBEDDING_DIM: usize = 384;

/// Maximum number of characters submitted to the remote provider per input.
/// Longer texts are truncated to bound request cost and latency.
pub const MAX_EMBED_INPUT_CHARS: usize = 8000;

/// Maximum tokens fed to the local model per input.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default remote embedding model identifier.
pub const DEFAULT_REMOTE_MODEL: &str = "text-embedding-3-small";

/// Default remote embeddings endpoint.
pub const DEFAULT_REMOTE_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";

/// Default timeout for one remote embedding request, in seconds.
/// A timeout degrades to the local model like any other provider failure.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Sub-scores at or above this value render as the "strong" tier.
pub const STRONG_MATCH_THRESHOLD: f64 = 80.0;

/// Sub-scores at or above this value (and below the strong tier) render as
/// the "moderate" tier.
pub const MODERATE_MATCH_THRESHOLD: f64 = 50.0;
