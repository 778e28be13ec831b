//! Experience-ratio sub-score.

/// Scores held years of experience against a requirement.
///
/// No requirement (absent or 0) is vacuously satisfied at 100. A requirement
/// with nothing held (absent or 0) scores 0. Meeting or exceeding the
/// requirement scores 100; anything less earns linear proportional credit.
/// No rounding here; the composer rounds once at the output boundary.
pub fn experience_score(held: Option<u32>, required: Option<u32>) -> f64 {
    let required = match required {
        Some(years) if years > 0 => years,
        _ => return 100.0,
    };

    let held = match held {
        Some(years) if years > 0 => years,
        _ => return 0.0,
    };

    if held >= required {
        return 100.0;
    }

    f64::from(held) / f64::from(required) * 100.0
}
