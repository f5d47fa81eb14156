//! Simulation Search Evaluator
//!
//! Builds an upper-confidence selection tree over the position resulting
//! from the candidate move and runs seeded semi-greedy playouts to the end
//! of the game. The empirical mean outcome becomes the move's value, and
//! confidence grows with the visit count.
//!
//! All randomness flows from a single per-invocation seed derived from the
//! base seed, the position hash, and the move hash, so results are
//! reproducible and independent of evaluation order across moves.

mod rollout;
mod tree;

use mosaic_core::{
    move_hash, position_hash, EngineKind, EvalBudget, Evaluator, EvaluatorScore, Move, Position,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// UCT-based move evaluator with seeded playouts.
#[derive(Debug, Clone)]
pub struct SimulationEvaluator {
    /// UCB1 exploration constant
    pub exploration: f64,
    /// Base seed combined with position/move hashes per invocation
    pub base_seed: u64,
    /// Rollout cap per invocation (the wall clock may stop earlier)
    pub max_rollouts: u32,
    rollouts_done: u64,
}

impl Default for SimulationEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEvaluator {
    pub fn new() -> Self {
        Self {
            exploration: 1.4,
            base_seed: 0x6d6f_7361_6963,
            max_rollouts: 1500,
            rollouts_done: 0,
        }
    }

    pub fn with_config(exploration: f64, max_rollouts: u32, base_seed: u64) -> Self {
        Self {
            exploration,
            base_seed,
            max_rollouts,
            rollouts_done: 0,
        }
    }
}

impl Evaluator for SimulationEvaluator {
    fn score(&mut self, pos: &Position, mv: Move, budget: &EvalBudget) -> Option<EvaluatorScore> {
        self.rollouts_done = 0;
        budget.start();
        if budget.is_exhausted() {
            return None;
        }

        let mover = pos.to_move;
        let root_state = pos.apply(mv);
        let sign = if mover == 0 { 1.0 } else { -1.0 };

        if root_state.game_over {
            let s = root_state.terminal_score().scores;
            return Some(EvaluatorScore {
                engine: EngineKind::Simulation,
                value: f64::from(s[mover] - s[1 - mover]),
                confidence: 1.0,
                elapsed: budget.time_control.elapsed(),
                nodes: 0,
            });
        }

        let seed = self.base_seed ^ position_hash(pos) ^ move_hash(mv);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree = tree::SearchTree::new(root_state, self.exploration);

        for _ in 0..self.max_rollouts {
            // rollout boundary is the cancellation point
            if budget.time_control.check_time() {
                break;
            }
            tree.iterate(&mut rng);
            self.rollouts_done += 1;
        }

        if self.rollouts_done == 0 {
            return None;
        }

        let visits = tree.root_visits();
        let value = sign * tree.root_mean();
        let confidence = (f64::from(visits) / (f64::from(visits) + 50.0)).min(0.95);
        Some(EvaluatorScore {
            engine: EngineKind::Simulation,
            value,
            confidence,
            elapsed: budget.time_control.elapsed(),
            nodes: self.rollouts_done,
        })
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Simulation
    }

    fn name(&self) -> &str {
        "Simulation v1.0"
    }

    fn reset(&mut self) {
        self.rollouts_done = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
