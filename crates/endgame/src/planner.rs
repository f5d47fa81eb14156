//! Bounded-branching forward search over concrete move sequences.
//!
//! At every ply only the `BRANCH_LIMIT` best children by static evaluation
//! are expanded, from the point of view of whoever moves at that ply. The
//! planner maximizes the planning player's projected score differential;
//! opponent plies minimize it. Risk comes from the spread of the root
//! siblings' outcomes, and confidence decays with depth so long speculative
//! lines never look as trustworthy as short concrete ones.

use mosaic_core::{evaluate_for, legal_moves, EvalBudget, Move, Position};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Children expanded per ply.
const BRANCH_LIMIT: usize = 10;
/// Maximum adjacency score of a single tile placement (full row + column).
const MAX_PLACEMENT: f64 = 10.0;
/// Sum of all terminal bonuses: 5 rows, 5 columns, 5 color sets.
const MAX_BONUSES: f64 = 95.0;

pub const DEFAULT_HORIZON: u8 = 4;

/// Planned line of play for the side to move, with quality metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndgamePlan {
    /// Moves from the current position, alternating seats as the rules
    /// dictate (the first entry belongs to the planning player).
    pub sequence: Vec<Move>,
    /// Projected change in the planner's score differential over the line.
    pub projected_delta: f64,
    /// Std deviation of the root siblings' projected outcomes.
    pub risk: f64,
    /// In [0, 1]; lower for deep, contested, or truncated plans.
    pub confidence: f64,
    /// False when the wall clock cut the search short of `horizon`.
    pub horizon_reached: bool,
}

/// Plans up to `horizon` plies ahead for the side to move.
///
/// Never fails for a valid position: a terminal position yields an empty
/// plan, and an exhausted budget yields a single greedy move with floor
/// confidence rather than an error.
pub fn plan_sequence(pos: &Position, horizon: u8, budget: &EvalBudget) -> EndgamePlan {
    let planner = pos.to_move;
    let baseline = differential(pos, planner);

    if pos.game_over || horizon == 0 {
        return EndgamePlan {
            sequence: Vec::new(),
            projected_delta: 0.0,
            risk: 0.0,
            confidence: 1.0,
            horizon_reached: true,
        };
    }

    budget.start();
    if budget.is_exhausted() {
        return greedy_fallback(pos, planner, baseline);
    }

    let mut candidates = ranked_children(pos);
    candidates.truncate(BRANCH_LIMIT);
    if candidates.is_empty() {
        return EndgamePlan {
            sequence: Vec::new(),
            projected_delta: 0.0,
            risk: 0.0,
            confidence: 1.0,
            horizon_reached: true,
        };
    }

    let mut outcomes = Vec::with_capacity(candidates.len());
    let mut best: Option<(f64, Vec<Move>, bool)> = None;
    for (mv, child) in candidates {
        let (value, mut line, reached) = best_line(&child, planner, horizon - 1, budget);
        outcomes.push(value);
        line.insert(0, mv);
        let better = match &best {
            Some((bv, _, _)) => value > *bv,
            None => true,
        };
        if better {
            best = Some((value, line, reached));
        }
        if budget.time_control.check_time() {
            break;
        }
    }

    // candidates is non-empty, so at least one outcome was recorded
    let Some((value, sequence, reached)) = best else {
        return greedy_fallback(pos, planner, baseline);
    };

    let risk = std_dev(&outcomes);
    let depth = sequence.len() as i32;
    let mut confidence = 0.95 * 0.9f64.powi(depth) * (1.0 - 0.5 * risk / (risk + 25.0));
    if !reached {
        confidence *= 0.6;
    }

    let ceiling = max_remaining_delta(horizon);
    let projected_delta = (value - baseline).min(ceiling);
    trace!(depth, projected_delta, risk, "plan complete");

    EndgamePlan {
        sequence,
        projected_delta,
        risk,
        confidence: confidence.clamp(0.05, 1.0),
        horizon_reached: reached,
    }
}

/// Upper bound on the planner's score-differential gain over `horizon`
/// plies: perfect placements every own ply plus every terminal bonus.
pub fn max_remaining_delta(horizon: u8) -> f64 {
    f64::from(horizon) * MAX_PLACEMENT + MAX_BONUSES
}

fn differential(pos: &Position, planner: usize) -> f64 {
    // already a my-score-minus-theirs differential
    evaluate_for(pos, planner)
}

/// Depth-limited search below the root. Returns the projected differential
/// at the chosen leaf, the line from here, and whether the horizon was hit.
fn best_line(pos: &Position, planner: usize, depth: u8, budget: &EvalBudget) -> (f64, Vec<Move>, bool) {
    if depth == 0 || pos.game_over {
        return (differential(pos, planner), Vec::new(), true);
    }
    if budget.time_control.check_time() {
        return (differential(pos, planner), Vec::new(), false);
    }

    let mover = pos.to_move;
    let mut candidates = ranked_children(pos);
    candidates.truncate(BRANCH_LIMIT);
    if candidates.is_empty() {
        return (differential(pos, planner), Vec::new(), true);
    }

    let mut best: Option<(f64, Vec<Move>, bool)> = None;
    for (mv, child) in candidates {
        let (value, mut line, reached) = best_line(&child, planner, depth - 1, budget);
        line.insert(0, mv);
        let better = match &best {
            // the mover picks what is best for their own seat
            Some((bv, _, _)) => {
                if mover == planner {
                    value > *bv
                } else {
                    value < *bv
                }
            }
            None => true,
        };
        if better {
            best = Some((value, line, reached));
        }
    }

    match best {
        Some(found) => found,
        None => (differential(pos, planner), Vec::new(), true),
    }
}

/// Children ordered best-first for the side to move at `pos`.
fn ranked_children(pos: &Position) -> Vec<(Move, Position)> {
    let mover = pos.to_move;
    let mut children: Vec<(Move, Position)> = legal_moves(pos)
        .into_iter()
        .map(|mv| (mv, pos.apply(mv)))
        .collect();
    children.sort_by(|a, b| {
        let va = evaluate_for(&a.1, mover);
        let vb = evaluate_for(&b.1, mover);
        vb.partial_cmp(&va).unwrap_or(std::cmp::Ordering::Equal)
    });
    children
}

/// One-ply static pick used when the clock expired before any search.
fn greedy_fallback(pos: &Position, planner: usize, baseline: f64) -> EndgamePlan {
    let best = legal_moves(pos).into_iter().max_by(|a, b| {
        let va = differential(&pos.apply(*a), planner);
        let vb = differential(&pos.apply(*b), planner);
        va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal)
    });
    match best {
        Some(mv) => {
            let delta = differential(&pos.apply(mv), planner) - baseline;
            EndgamePlan {
                sequence: vec![mv],
                projected_delta: delta.min(max_remaining_delta(1)),
                risk: 0.0,
                confidence: 0.2,
                horizon_reached: false,
            }
        }
        None => EndgamePlan {
            sequence: Vec::new(),
            projected_delta: 0.0,
            risk: 0.0,
            confidence: 1.0,
            horizon_reached: true,
        },
    }
}

fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod planner_tests;
