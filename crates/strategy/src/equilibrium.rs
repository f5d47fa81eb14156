//! Payoff matrix construction and pure-equilibrium search.

use mosaic_core::{evaluate_for, legal_moves, Move, Position};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Candidate moves kept per player.
pub const TOP_N: usize = 3;
/// Best-response iterations before giving up on convergence.
pub const MAX_ITERATIONS: u32 = 20;

/// Payoffs are stated for the row player (the side to move); the column
/// player's payoff is the negation.
#[derive(Clone, Debug)]
pub struct PayoffMatrix {
    pub rows: Vec<Move>,
    pub cols: Vec<Move>,
    /// `values[r][c]` = row player's payoff when row r meets column c.
    pub values: Vec<Vec<f64>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EquilibriumOutcome {
    /// A fixed point of mutual best response.
    Pure { row: Move, col: Move, value: f64 },
    /// Best-response dynamics cycled within the iteration cap.
    NoPureEquilibrium,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResult {
    pub outcome: EquilibriumOutcome,
    pub iterations: u32,
}

impl PayoffMatrix {
    /// Builds the matrix from the position's top candidates. Row moves are
    /// the mover's statically best options; column moves are the opponent's
    /// best replies to the mover's top choice. Payoff entries come from the
    /// injected `payoff` function, so callers can plug in anything from a
    /// static evaluation to full consensus scoring. Column moves are fixed
    /// across rows, so a reply may be illegal after some row moves; the
    /// payoff function must tolerate that (e.g. score the one-ply position).
    ///
    /// Returns `None` when either side has no move to put in the matrix.
    pub fn build<F>(pos: &Position, payoff: F) -> Option<PayoffMatrix>
    where
        F: Fn(&Position, Move, Move) -> f64,
    {
        let rows = top_candidates(pos, TOP_N);
        let first = *rows.first()?;
        let after_first = pos.apply(first);
        let cols = top_candidates(&after_first, TOP_N);
        if cols.is_empty() {
            return None;
        }

        let values = rows
            .iter()
            .map(|&r| cols.iter().map(|&c| payoff(pos, r, c)).collect())
            .collect();
        Some(PayoffMatrix { rows, cols, values })
    }
}

/// Statically best moves for the side to move, best first, capped at `n`.
fn top_candidates(pos: &Position, n: usize) -> Vec<Move> {
    let mover = pos.to_move;
    let mut moves = legal_moves(pos);
    moves.sort_by(|a, b| {
        let va = evaluate_for(&pos.apply(*a), mover);
        let vb = evaluate_for(&pos.apply(*b), mover);
        vb.partial_cmp(&va).unwrap_or(std::cmp::Ordering::Equal)
    });
    moves.truncate(n);
    moves
}

/// Iterated best response from the matrix's top-left cell.
///
/// The row player maximizes the entry, the column player minimizes it. A
/// strategy pair that is a mutual best response is a pure equilibrium;
/// cycling through the cap reports [`EquilibriumOutcome::NoPureEquilibrium`],
/// which is a normal outcome rather than an error.
pub fn find_equilibrium(matrix: &PayoffMatrix) -> EquilibriumResult {
    let mut row = 0usize;
    let mut col = 0usize;

    for iteration in 1..=MAX_ITERATIONS {
        let best_row = argmax(matrix.values.iter().map(|r| r[col]));
        let best_col = argmin(matrix.values[best_row].iter().copied());

        if best_row == row && best_col == col {
            trace!(iteration, "pure equilibrium found");
            return EquilibriumResult {
                outcome: EquilibriumOutcome::Pure {
                    row: matrix.rows[row],
                    col: matrix.cols[col],
                    value: matrix.values[row][col],
                },
                iterations: iteration,
            };
        }
        row = best_row;
        col = best_col;
    }

    EquilibriumResult {
        outcome: EquilibriumOutcome::NoPureEquilibrium,
        iterations: MAX_ITERATIONS,
    }
}

fn argmax(values: impl Iterator<Item = f64>) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, v) in values.enumerate() {
        if v > best_value {
            best_value = v;
            best = i;
        }
    }
    best
}

fn argmin(values: impl Iterator<Item = f64>) -> usize {
    let mut best = 0;
    let mut best_value = f64::INFINITY;
    for (i, v) in values.enumerate() {
        if v < best_value {
            best_value = v;
            best = i;
        }
    }
    best
}

#[cfg(test)]
#[path = "equilibrium_tests.rs"]
mod equilibrium_tests;
