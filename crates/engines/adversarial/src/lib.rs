//! Adversarial Search Evaluator
//!
//! Two-player minimax with alpha-beta pruning over the position resulting
//! from the candidate move. Iterative deepening makes the wall-clock budget
//! safe to enforce: a depth level interrupted by the clock is discarded and
//! the last fully completed level is returned.
//!
//! Turn order in the drafting game is not strictly alternating: the round
//! winner of the starter marker can move twice in a row across a round
//! boundary, so the search negates values only when the side to move
//! actually changes.

mod eval;
mod search;

use mosaic_core::{EngineKind, EvalBudget, Evaluator, EvaluatorScore, Move, Position};

/// Alpha-beta move evaluator with pattern-urgency move ordering.
#[derive(Debug, Clone, Default)]
pub struct AdversarialEvaluator {
    /// Node counter for statistics
    nodes: u64,
}

impl AdversarialEvaluator {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Evaluator for AdversarialEvaluator {
    fn score(&mut self, pos: &Position, mv: Move, budget: &EvalBudget) -> Option<EvaluatorScore> {
        self.nodes = 0;
        budget.start();
        if budget.depth == 0 || budget.time_control.check_time() {
            return None;
        }

        let mover = pos.to_move;
        let child = pos.apply(mv);
        self.nodes = 1;

        // Iterative deepening: keep only fully completed depth levels.
        let mut completed: Option<(f64, u8)> = None;
        for remaining in 0..budget.depth {
            let (value, stopped) = search::minimax(
                &child,
                remaining,
                f64::NEG_INFINITY,
                f64::INFINITY,
                &budget.time_control,
                &mut self.nodes,
            );
            if stopped {
                break;
            }
            let for_mover = if child.to_move == mover { value } else { -value };
            completed = Some((for_mover, remaining + 1));
            if budget.time_control.check_time() {
                break;
            }
        }

        let (value, depth_done) = completed?;
        Some(EvaluatorScore {
            engine: EngineKind::Adversarial,
            value,
            confidence: (0.5 + 0.1 * f64::from(depth_done)).min(0.9),
            elapsed: budget.time_control.elapsed(),
            nodes: self.nodes,
        })
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Adversarial
    }

    fn name(&self) -> &str {
        "Adversarial v1.0"
    }

    fn reset(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
