//! Semscore library crate (used by the CLI and integration tests).
//!
//! Computes an explainable 0–100 match score between a candidate profile and
//! a job requirement using embedding-based semantic similarity instead of
//! keyword matching.
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`], [`ProviderKind`] - Engine configuration
//! - [`CandidateProfile`], [`JobRequirement`], [`Weights`] - Scoring inputs
//! - [`ScoreResult`], [`RankedCandidate`] - Scoring outputs
//!
//! ## Scoring
//! - [`MatchScorer`] - The scoring engine (composition + explanation)
//! - [`scoring::aggregate::best_match_score`] - Bipartite best-match aggregation
//! - [`cosine_score`] - Similarity on the 0–100 scale
//!
//! ## Embedding
//! - [`Embedder`] - Primary/fallback provider facade
//! - [`RemoteEmbedder`], [`RemoteConfig`] - HTTP provider
//! - [`LocalEmbedder`], [`LocalConfig`] - In-process fallback model
//!
//! ## Test/Mock Support
//! Mock backends are available behind `#[cfg(any(test, feature = "mock"))]`.
//!
//! # Example
//!
//! ```no_run
//! use semscore::{CandidateProfile, Config, JobRequirement, MatchScorer, Weights};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let scorer = MatchScorer::from_config(&config)?;
//!
//! let candidate = CandidateProfile {
//!     skills: vec!["Python".into(), "Kubernetes".into()],
//!     experience: Some(4),
//!     certifications: vec!["CKA".into()],
//! };
//! let job = JobRequirement {
//!     required_skills: vec!["Python".into(), "AWS".into()],
//!     required_experience: Some(5),
//!     required_certifications: vec![],
//! };
//!
//! let result = scorer.score(&candidate, &job, &Weights::default()).await?;
//! println!("{}: {}", result.overall, result.explanation);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod embedding;
pub mod scoring;

pub use config::{Config, ConfigError, ProviderKind};
pub use embedding::{
    Embedder, Embedding, EmbeddingBackend, EmbeddingBatch, EmbeddingError, EmbeddingSource,
    LocalConfig, LocalEmbedder, RemoteConfig, RemoteEmbedder,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::mock::{FailingBackend, RecordingBackend};
pub use scoring::{
    CandidateProfile, JobRequirement, MatchScorer, RankedCandidate, ScoreResult, ScoringError,
    Tier, Weights, compose, cosine_score, render_explanation,
};
