//! The 0-100 scoring formula and tier table.
//!
//! Pure functions only: everything stateful (evaluators, planner, opponent
//! model) happens before this module is called, so the formula itself is
//! trivially testable at tier boundaries.

use crate::config::AssessConfig;
use crate::consensus::ConsensusResult;
use patterns::{PatternKind, PatternMatch};
use serde::{Deserialize, Serialize};

/// Score assigned when nothing produced any information for a move.
pub const BLACKOUT_SCORE: f64 = 10.0;

/// Quality tiers, assigned by a fixed non-overlapping threshold table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Brilliant,
    Excellent,
    Good,
    Dubious,
    Poor,
}

impl Tier {
    pub fn from_score(score: f64) -> Tier {
        if score >= 90.0 {
            Tier::Brilliant
        } else if score >= 75.0 {
            Tier::Excellent
        } else if score >= 50.0 {
            Tier::Good
        } else if score >= 25.0 {
            Tier::Dubious
        } else {
            Tier::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Brilliant => "Brilliant",
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Dubious => "Dubious",
            Tier::Poor => "Poor",
        }
    }
}

/// Per-term decomposition of one move's score.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Consensus points after strategic re-weighting.
    pub consensus: f64,
    /// Net pattern bonus (penalty-risk subtracts).
    pub patterns: f64,
    /// Endgame-plan contribution (zero outside late phases).
    pub endgame: f64,
    /// Points removed for unresolved evaluator disagreement.
    pub disagreement_penalty: f64,
    /// Multiplier the strategic analyzer applied to the consensus term.
    pub strategic_weight: f64,
    /// Final clamped score.
    pub total: f64,
}

/// Folds all signals for one move into the final score.
///
/// `endgame_contribution` is already scaled and zero when no plan applies
/// to this move. A total information blackout (no consensus, no patterns)
/// yields the fixed Poor-tier default.
pub fn score_components(
    config: &AssessConfig,
    consensus: Option<&ConsensusResult>,
    matches: &[PatternMatch],
    endgame_contribution: f64,
    strategic_weight: f64,
) -> ScoreBreakdown {
    if consensus.is_none() && matches.is_empty() {
        return ScoreBreakdown {
            consensus: 0.0,
            patterns: 0.0,
            endgame: 0.0,
            disagreement_penalty: 0.0,
            strategic_weight: 1.0,
            total: BLACKOUT_SCORE,
        };
    }

    let consensus_points = consensus
        .map(|c| c.normalized * config.consensus_weight * strategic_weight)
        .unwrap_or(0.0);

    let pattern_points = pattern_points(config, matches);

    let disagreement_penalty = consensus
        .map(|c| {
            if c.disagreement > config.disagreement_threshold {
                (c.disagreement - config.disagreement_threshold) * config.disagreement_penalty
            } else {
                0.0
            }
        })
        .unwrap_or(0.0);

    let total = (consensus_points + pattern_points + endgame_contribution
        - disagreement_penalty)
        .clamp(0.0, 100.0);

    ScoreBreakdown {
        consensus: consensus_points,
        patterns: pattern_points,
        endgame: endgame_contribution,
        disagreement_penalty,
        strategic_weight,
        total,
    }
}

/// Net pattern bonus: per family, the strongest match scaled by the family
/// cap; positive families sum under the total cap, penalty-risk subtracts.
fn pattern_points(config: &AssessConfig, matches: &[PatternMatch]) -> f64 {
    let mut positive = 0.0;
    let mut negative = 0.0;
    for kind in PatternKind::ALL {
        let strongest = matches
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.urgency.weight() * m.confidence)
            .fold(0.0f64, f64::max);
        let points = strongest * config.pattern_family_cap;
        if kind.is_negative() {
            negative += points;
        } else {
            positive += points;
        }
    }
    positive.min(config.pattern_total_cap) - negative
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
