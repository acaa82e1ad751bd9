//! Similarity ranking: top-k selection over a dot-product score vector.
//!
//! Ranking uses the raw dot product, not normalized cosine — embedding
//! magnitudes are part of the signal and two entities with the same
//! direction but different norms rank differently. Scores are rounded to
//! three decimals for display only; selection and ordering always use the
//! unrounded values.

use log::trace;
use serde::Serialize;

/// One ranked neighbor: display name, rounded dot-product score, row index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub score: f64,
    pub index: usize,
}

/// Ordered neighbor list, descending score, query entity excluded.
pub type Recommendations = Vec<Recommendation>;

/// Selects the `k` highest-scoring indices, excluding `self_idx`.
///
/// Ordering is descending by score with ties broken by ascending index,
/// so results are deterministic even when scores collide exactly.
pub(crate) fn rank_excluding(scores: &[f64], self_idx: usize, k: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != self_idx)
        .map(|(i, &s)| (i, s))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(k);
    trace!(
        "Ranked {} candidates, kept {} (self index {} excluded)",
        scores.len().saturating_sub(1),
        ranked.len(),
        self_idx
    );
    ranked
}

/// Rounds a score to 3 decimal places for display.
#[inline]
pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
