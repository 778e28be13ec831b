//! Bipartite best-match aggregation over unordered string sets.

use std::collections::HashMap;

use tracing::debug;

use crate::embedding::{Embedder, EmbeddingBackend};

use super::error::ScoringError;
use super::similarity::cosine_score;

/// Scores how well `held` items satisfy `required` items, in [0, 100].
///
/// Each required item is independently credited with its best similarity
/// against any held item; the sub-score is the mean of those maxima. One
/// held item may satisfy several requirements at full credit — there is
/// deliberately no one-to-one assignment constraint, so redundancy in the
/// held set is never penalized.
///
/// An empty requirement set is vacuously satisfied (exactly 100); a
/// non-empty requirement set against an empty held set scores exactly 0.
/// The union of both sets is embedded in a single batched provider call,
/// and all comparisons stay within that call's vector space.
pub async fn best_match_score<P: EmbeddingBackend>(
    required: &[String],
    held: &[String],
    embedder: &Embedder<P>,
) -> Result<f64, ScoringError> {
    let required = dedup_case_insensitive(required);
    if required.is_empty() {
        return Ok(100.0);
    }

    let held = dedup_case_insensitive(held);
    if held.is_empty() {
        return Ok(0.0);
    }

    // Union of both sets, case-insensitive, requirement casing first.
    let mut union = required.clone();
    {
        let mut seen: Vec<String> = union.iter().map(|s| s.to_lowercase()).collect();
        for item in &held {
            let key = item.to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                union.push(item.clone());
            }
        }
    }

    let batch = embedder.embed_batch(&union).await?;

    debug!(
        required = required.len(),
        held = held.len(),
        embedded = batch.len(),
        source = %batch.source(),
        "Aggregating best-match similarities"
    );

    let mut by_key: HashMap<String, &[f32]> = HashMap::with_capacity(union.len());
    for (text, vector) in union.iter().zip(batch.vectors()) {
        by_key.insert(text.to_lowercase(), vector.as_slice());
    }

    let mut sum = 0.0f64;
    for requirement in &required {
        let requirement_vector = lookup(&by_key, requirement)?;

        let mut best = 0.0f32;
        for item in &held {
            let item_vector = lookup(&by_key, item)?;
            best = best.max(cosine_score(requirement_vector, item_vector));
        }

        sum += f64::from(best);
    }

    let mean = sum / required.len() as f64;
    Ok(mean.clamp(0.0, 100.0))
}

fn lookup<'a>(
    by_key: &HashMap<String, &'a [f32]>,
    item: &str,
) -> Result<&'a [f32], ScoringError> {
    by_key
        .get(&item.to_lowercase())
        .copied()
        .ok_or_else(|| ScoringError::ComputationFailed {
            reason: format!("missing embedding for '{}'", item),
        })
}

/// Deduplicates by case-insensitive identity, keeping first casing and order.
fn dedup_case_insensitive(items: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        let key = item.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            result.push(item.clone());
        }
    }

    result
}
