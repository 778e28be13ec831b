//! Semantic match scoring.
//!
//! [`MatchScorer`] combines three sub-scores into one explainable result:
//!
//! - skills and certifications via [`aggregate::best_match_score`]
//!   (embedding-based bipartite best-match),
//! - experience via [`experience::experience_score`] (deterministic ratio).
//!
//! Sub-scores are clamped to [0, 100]; the overall score is the literal
//! weighted combination of the three, rounded once at the output boundary.

/// Bipartite best-match aggregation.
pub mod aggregate;
pub mod error;
/// Experience-ratio sub-score.
pub mod experience;
/// Tier mapping and rationale text.
pub mod explanation;
/// Vector similarity.
pub mod similarity;
pub mod types;

mod scorer;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
pub use explanation::{Tier, render_explanation};
pub use scorer::{MatchScorer, compose};
pub use similarity::cosine_score;
pub use types::{CandidateProfile, JobRequirement, RankedCandidate, ScoreResult, Weights};
