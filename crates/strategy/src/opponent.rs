//! Incremental opponent model.
//!
//! Two scalar traits in [0, 1], updated by exponential decay toward the
//! behavior observed in each move the opponent actually plays. The traits
//! bias how strategic value is weighted; they never produce a value of
//! their own.

use mosaic_core::{Dest, Move, Position, Source};
use serde::{Deserialize, Serialize};

/// Decay rate toward newly observed behavior.
const ALPHA: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpponentModel {
    /// 0 = avoids penalty-row exposure, 1 = happily absorbs penalties.
    pub risk_tolerance: f64,
    /// 0 = drafts small and safe, 1 = grabs the biggest takes available.
    pub aggression: f64,
    observations: u32,
}

impl Default for OpponentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentModel {
    /// Neutral priors.
    pub fn new() -> Self {
        Self {
            risk_tolerance: 0.5,
            aggression: 0.5,
            observations: 0,
        }
    }

    /// Model with preset traits, e.g. restored from a previous session.
    pub fn with_traits(risk_tolerance: f64, aggression: f64) -> Self {
        Self {
            risk_tolerance: risk_tolerance.clamp(0.0, 1.0),
            aggression: aggression.clamp(0.0, 1.0),
            observations: 0,
        }
    }

    pub fn observations(&self) -> u32 {
        self.observations
    }

    /// Updates the traits from a move the opponent chose in `pos`.
    /// Moves not legal in `pos` are ignored.
    pub fn observe(&mut self, pos: &Position, mv: Move) {
        if !pos.is_legal(mv) {
            return;
        }
        let taken = tiles_taken(pos, mv);
        let risk = observed_risk(pos, mv, taken);
        let aggression = observed_aggression(pos, taken);

        self.risk_tolerance = (1.0 - ALPHA) * self.risk_tolerance + ALPHA * risk;
        self.aggression = (1.0 - ALPHA) * self.aggression + ALPHA * aggression;
        self.observations += 1;
    }
}

fn tiles_taken(pos: &Position, mv: Move) -> usize {
    match mv.source {
        Source::Factory(f) => pos
            .factories
            .get(f as usize)
            .map_or(0, |tiles| tiles.iter().filter(|&&t| t == mv.color).count()),
        Source::Center => pos.center.iter().filter(|&&t| t == mv.color).count(),
    }
}

/// Fraction of the take that ends up on the penalty row, plus the marker
/// pickup for first-from-center moves.
fn observed_risk(pos: &Position, mv: Move, taken: usize) -> f64 {
    if taken == 0 {
        return 0.0;
    }
    let board = &pos.players[pos.to_move];
    let overflow = match mv.dest {
        Dest::Floor => taken,
        Dest::Row(r) => {
            let sr = board.staging[r as usize];
            let free = (r as usize + 1).saturating_sub(sr.count as usize);
            taken.saturating_sub(free)
        }
    };
    let marker = usize::from(mv.source == Source::Center && pos.center_has_marker);
    ((overflow + marker) as f64 / (taken + 1) as f64).min(1.0)
}

/// How large this take is relative to the biggest take available.
fn observed_aggression(pos: &Position, taken: usize) -> f64 {
    let mut max_take = 0usize;
    for f in &pos.factories {
        for color in mosaic_core::TileColor::ALL {
            let n = f.iter().filter(|&&t| t == color).count();
            max_take = max_take.max(n);
        }
    }
    for color in mosaic_core::TileColor::ALL {
        let n = pos.center.iter().filter(|&&t| t == color).count();
        max_take = max_take.max(n);
    }
    if max_take == 0 {
        0.0
    } else {
        taken as f64 / max_take as f64
    }
}

#[cfg(test)]
#[path = "opponent_tests.rs"]
mod opponent_tests;
