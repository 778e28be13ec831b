use std::cmp::Ordering;

use tracing::{debug, info};

use crate::config::Config;
use crate::embedding::{Embedder, EmbeddingBackend, RemoteEmbedder};

use super::aggregate::best_match_score;
use super::error::ScoringError;
use super::experience::experience_score;
use super::explanation::render_explanation;
use super::types::{CandidateProfile, JobRequirement, RankedCandidate, ScoreResult, Weights};

/// The scoring engine: owns the embedding stack and produces
/// [`ScoreResult`]s for candidate/job pairs.
pub struct MatchScorer<P: EmbeddingBackend = RemoteEmbedder> {
    embedder: Embedder<P>,
}

impl<P: EmbeddingBackend> std::fmt::Debug for MatchScorer<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchScorer")
            .field("has_primary", &self.embedder.has_primary())
            .finish()
    }
}

impl<P: EmbeddingBackend> MatchScorer<P> {
    pub fn new(embedder: Embedder<P>) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &Embedder<P> {
        &self.embedder
    }

    /// Scores one candidate against one job.
    ///
    /// The skills and certification batches are independent and embedded
    /// concurrently. Fails only if the embedding subsystem is entirely
    /// unavailable; provider failures degrade inside the embedder and still
    /// yield a complete result.
    pub async fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        weights: &Weights,
    ) -> Result<ScoreResult, ScoringError> {
        let (skills, certifications) = tokio::join!(
            best_match_score(&job.required_skills, &candidate.skills, &self.embedder),
            best_match_score(
                &job.required_certifications,
                &candidate.certifications,
                &self.embedder,
            ),
        );
        let skills = skills?;
        let certifications = certifications?;

        let experience = experience_score(candidate.experience, job.required_experience);

        debug!(
            skills = skills,
            experience = experience,
            certifications = certifications,
            "Sub-scores computed"
        );

        Ok(compose(skills, experience, certifications, weights))
    }

    /// Scores each labelled candidate against `job` and returns them sorted
    /// by overall score, best first.
    pub async fn rank(
        &self,
        candidates: &[(String, CandidateProfile)],
        job: &JobRequirement,
        weights: &Weights,
    ) -> Result<Vec<RankedCandidate>, ScoringError> {
        let mut ranked = Vec::with_capacity(candidates.len());

        for (candidate_id, profile) in candidates {
            let score = self.score(profile, job, weights).await?;
            ranked.push(RankedCandidate {
                candidate_id: candidate_id.clone(),
                score,
            });
        }

        ranked.sort_by(|a, b| {
            b.score
                .overall
                .partial_cmp(&a.score.overall)
                .unwrap_or(Ordering::Equal)
        });

        info!(candidates = ranked.len(), "Ranked candidate shortlist");

        Ok(ranked)
    }
}

impl MatchScorer<RemoteEmbedder> {
    /// Builds a scorer from configuration (see [`Embedder::from_config`]).
    pub fn from_config(config: &Config) -> Result<Self, ScoringError> {
        Ok(Self::new(Embedder::from_config(config)?))
    }
}

/// Applies the weighted linear combination and renders the rationale.
///
/// Weights are literal multipliers; nothing normalizes or clamps `overall`
/// beyond what the already-clamped sub-scores produce. All numeric fields
/// are rounded to 2 decimals here, and only here.
pub fn compose(skills: f64, experience: f64, certifications: f64, weights: &Weights) -> ScoreResult {
    let overall = skills * weights.skills
        + experience * weights.experience
        + certifications * weights.certifications;

    let explanation = render_explanation(skills, experience, certifications);

    ScoreResult {
        overall: round2(overall),
        skills: round2(skills),
        experience: round2(experience),
        certifications: round2(certifications),
        explanation,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
