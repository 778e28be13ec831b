//! Vector similarity on the engine's 0–100 scale.

/// Cosine similarity remapped from [-1, 1] to [0, 100].
///
/// Degenerate inputs (zero magnitude, length mismatch, empty) score 0.0
/// rather than erroring; both happen legitimately and must not abort a
/// scoring call.
pub fn cosine_score(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let cosine = (dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0);

    (cosine + 1.0) / 2.0 * 100.0
}
