//! Qualitative tiers and rationale text.
//!
//! Deterministic, locale-fixed phrasing; no external calls. The free-text
//! insight generator is a separate service and never feeds into this.

use crate::constants::{MODERATE_MATCH_THRESHOLD, STRONG_MATCH_THRESHOLD};

/// Qualitative band a sub-score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// At or above [`STRONG_MATCH_THRESHOLD`].
    Strong,
    /// At or above [`MODERATE_MATCH_THRESHOLD`], below strong.
    Moderate,
    /// Below [`MODERATE_MATCH_THRESHOLD`].
    Weak,
}

impl Tier {
    /// Maps a sub-score to its tier.
    pub fn of(score: f64) -> Self {
        if score >= STRONG_MATCH_THRESHOLD {
            Tier::Strong
        } else if score >= MODERATE_MATCH_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::Weak
        }
    }
}

/// Renders the three-clause rationale for a score breakdown.
pub fn render_explanation(skills: f64, experience: f64, certifications: f64) -> String {
    let skills_clause = match Tier::of(skills) {
        Tier::Strong => format!("Strong skills match ({:.1}%)", skills),
        Tier::Moderate => format!("Moderate skills match ({:.1}%)", skills),
        Tier::Weak => format!("Weak skills match ({:.1}%)", skills),
    };

    let experience_clause = match Tier::of(experience) {
        Tier::Strong => format!("meets experience requirements ({:.1}%)", experience),
        Tier::Moderate => format!(
            "partially meets experience requirements ({:.1}%)",
            experience
        ),
        Tier::Weak => format!("below experience requirements ({:.1}%)", experience),
    };

    let certifications_clause = match Tier::of(certifications) {
        Tier::Strong => format!("strong certification alignment ({:.1}%)", certifications),
        Tier::Moderate => format!("some relevant certifications ({:.1}%)", certifications),
        Tier::Weak => format!("limited certification match ({:.1}%)", certifications),
    };

    format!(
        "{}. {}. {}.",
        skills_clause, experience_clause, certifications_clause
    )
}
