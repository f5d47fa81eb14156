//! Confidence-weighted fusion of evaluator scores.

use mosaic_core::{EngineKind, EvaluatorScore};
use serde::{Deserialize, Serialize};

/// Fused verdict of the available evaluators for one move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// Confidence-weighted mean of the raw point differentials.
    pub value: f64,
    /// `value` squashed into [0, 1] by the logistic normalization.
    pub normalized: f64,
    /// Mean confidence of the contributing evaluators.
    pub confidence: f64,
    /// Max pairwise absolute difference of normalized values, in [0, 1].
    pub disagreement: f64,
    /// Engines that actually produced a score.
    pub contributors: Vec<EngineKind>,
}

/// Squash a point differential into [0, 1]. `scale` sets how many points
/// correspond to one logistic unit.
pub fn normalize(value: f64, scale: f64) -> f64 {
    1.0 / (1.0 + (-value / scale).exp())
}

/// Combines the available scores. Evaluators that returned nothing simply
/// do not appear in `scores`; an empty or zero-confidence slice yields
/// `None`, which callers treat as an information blackout for the move.
pub fn combine(scores: &[EvaluatorScore], scale: f64) -> Option<ConsensusResult> {
    let total_confidence: f64 = scores.iter().map(|s| s.confidence).sum();
    if scores.is_empty() || total_confidence <= 0.0 {
        return None;
    }

    let value = scores
        .iter()
        .map(|s| s.confidence * s.value)
        .sum::<f64>()
        / total_confidence;

    let mut disagreement = 0.0f64;
    for (i, a) in scores.iter().enumerate() {
        for b in &scores[i + 1..] {
            let gap = (normalize(a.value, scale) - normalize(b.value, scale)).abs();
            disagreement = disagreement.max(gap);
        }
    }

    Some(ConsensusResult {
        value,
        normalized: normalize(value, scale),
        confidence: total_confidence / scores.len() as f64,
        disagreement,
        contributors: scores.iter().map(|s| s.engine).collect(),
    })
}

#[cfg(test)]
#[path = "consensus_tests.rs"]
mod consensus_tests;
