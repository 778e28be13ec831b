use serde::{Deserialize, Serialize};

/// Structured candidate data, as supplied by the upstream document field
/// extractor. Skills and certifications are free-form strings; identity is
/// case-insensitive for matching purposes but original casing is preserved
/// as embedding input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    /// Skills the candidate holds.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Total years of professional experience, if known.
    #[serde(default)]
    pub experience: Option<u32>,
    /// Certifications the candidate holds.
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// Job-side requirements, as supplied by the upstream gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirement {
    /// Skills the job requires.
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Years of experience the job requires, if any.
    #[serde(default)]
    pub required_experience: Option<u32>,
    /// Certifications the job requires.
    #[serde(default, rename = "requiredCerts")]
    pub required_certifications: Vec<String>,
}

/// Per-factor weights applied by the composer.
///
/// Used as literal multipliers: nothing enforces that they sum to 1, and the
/// composer does not normalize them. Callers that want `overall` to stay in a
/// clean [0,100] interpretation are responsible for supplying weights that
/// sum to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weights {
    /// Skills sub-score weight.
    #[serde(default = "Weights::default_skills")]
    pub skills: f64,
    /// Experience sub-score weight.
    #[serde(default = "Weights::default_experience")]
    pub experience: f64,
    /// Certifications sub-score weight.
    #[serde(default = "Weights::default_certifications")]
    pub certifications: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            skills: Self::default_skills(),
            experience: Self::default_experience(),
            certifications: Self::default_certifications(),
        }
    }
}

impl Weights {
    fn default_skills() -> f64 {
        0.6
    }

    fn default_experience() -> f64 {
        0.3
    }

    fn default_certifications() -> f64 {
        0.1
    }
}

/// Composite score with per-factor breakdown and rationale.
///
/// All numeric fields are rounded to 2 decimals at this boundary; sub-scores
/// are clamped to [0,100]. `overall` is whatever the supplied weights
/// produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted composite score.
    #[serde(rename = "overallScore")]
    pub overall: f64,
    /// Skills sub-score.
    #[serde(rename = "skillsScore")]
    pub skills: f64,
    /// Experience sub-score.
    #[serde(rename = "experienceScore")]
    pub experience: f64,
    /// Certifications sub-score.
    #[serde(rename = "certsScore")]
    pub certifications: f64,
    /// Human-readable rationale.
    pub explanation: String,
}

/// One candidate's score within a ranked shortlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    /// Caller-supplied candidate identifier.
    pub candidate_id: String,
    /// The candidate's full score result.
    pub score: ScoreResult,
}
