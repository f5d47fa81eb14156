//! Strategic re-weighting of consensus value.
//!
//! The analyzer never scores a move itself. It takes the equilibrium
//! outcome and the opponent model and produces a multiplicative weight in
//! `[WEIGHT_MIN, WEIGHT_MAX]` that the assessor applies to the
//! consensus-derived strategic value.

use crate::equilibrium::{EquilibriumOutcome, EquilibriumResult};
use crate::opponent::OpponentModel;
use mosaic_core::{Dest, Move, Position};

pub const WEIGHT_MIN: f64 = 0.85;
pub const WEIGHT_MAX: f64 = 1.15;

#[derive(Clone, Debug, Default)]
pub struct StrategicAnalyzer {
    pub opponent: OpponentModel,
}

impl StrategicAnalyzer {
    pub fn new() -> Self {
        Self {
            opponent: OpponentModel::new(),
        }
    }

    pub fn with_model(opponent: OpponentModel) -> Self {
        Self { opponent }
    }

    /// Feeds an observed opponent move into the model.
    pub fn observe(&mut self, pos: &Position, mv: Move) {
        self.opponent.observe(pos, mv);
    }

    /// Weight applied to `mv`'s consensus value.
    ///
    /// Equilibrium agreement nudges the weight up, disagreement nudges it
    /// down, and the opponent traits shift how penalty-row exposure is
    /// judged. The result is clamped to the band so strategy can shade a
    /// consensus value but never override it.
    pub fn weight_for(&self, pos: &Position, mv: Move, eq: &EquilibriumResult) -> f64 {
        let mut weight = 1.0;

        match eq.outcome {
            EquilibriumOutcome::Pure { row, .. } => {
                if row == mv {
                    weight += 0.10;
                } else {
                    weight -= 0.05;
                }
            }
            EquilibriumOutcome::NoPureEquilibrium => {
                // unstable position: trust raw consensus slightly less
                weight -= 0.03;
            }
        }

        if incurs_penalty(pos, mv) {
            // a risk-averse opponent punishes exposure harder
            weight += (self.opponent.risk_tolerance - 0.5) * 0.10;
        }
        // aggressive opponents make tempo-denying moves more valuable
        weight += (self.opponent.aggression - 0.5) * 0.05;

        weight.clamp(WEIGHT_MIN, WEIGHT_MAX)
    }
}

/// Whether the move sends any tiles to the penalty row. Out-of-range
/// sources or rows incur nothing rather than panicking.
fn incurs_penalty(pos: &Position, mv: Move) -> bool {
    match mv.dest {
        Dest::Floor => true,
        Dest::Row(r) => {
            let board = &pos.players[pos.to_move];
            let Some(sr) = board.staging.get(r as usize) else {
                return false;
            };
            let free = (r as usize + 1).saturating_sub(sr.count as usize);
            let taken = match mv.source {
                mosaic_core::Source::Factory(f) => pos
                    .factories
                    .get(f as usize)
                    .map_or(0, |tiles| tiles.iter().filter(|&&t| t == mv.color).count()),
                mosaic_core::Source::Center => {
                    pos.center.iter().filter(|&&t| t == mv.color).count()
                }
            };
            taken > free
        }
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod analyzer_tests;
