pub mod board;
pub mod budget;
pub mod eval;
pub mod hash;
pub mod movegen;
pub mod position;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use budget::*;
pub use eval::{evaluate, evaluate_for};
pub use hash::{move_hash, position_hash};
pub use movegen::*;
pub use position::*;
pub use types::*;

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Evaluator trait, implemented by all move evaluators (adversarial, etc.)
// =============================================================================

/// Identity of a scoring engine, attached to every score it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    Adversarial,
    Simulation,
    Learned,
}

impl EngineKind {
    pub fn label(self) -> &'static str {
        match self {
            EngineKind::Adversarial => "adversarial search",
            EngineKind::Simulation => "simulation search",
            EngineKind::Learned => "learned evaluator",
        }
    }
}

/// Result of scoring a single candidate move with one engine.
///
/// `value` is the projected score delta for the moving player, in board
/// points. `confidence` is in [0, 1].
#[derive(Clone, Debug)]
pub struct EvaluatorScore {
    /// Which engine produced this score
    pub engine: EngineKind,
    /// Projected score delta for the mover, in points
    pub value: f64,
    /// Engine's confidence in the value, in [0, 1]
    pub confidence: f64,
    /// Wall-clock cost of producing the score
    pub elapsed: Duration,
    /// Number of nodes/rollouts examined (for stats)
    pub nodes: u64,
}

/// Trait that all move evaluators must implement.
///
/// This allows combining adversarial (alpha-beta) search, simulation (UCT)
/// search, and learned scalar evaluation behind one interface, in any subset.
pub trait Evaluator: Send {
    /// Score a single candidate move within the given budget.
    ///
    /// Returns `None` when the evaluator could not produce any result before
    /// the budget expired (or inference failed). Callers must treat `None`
    /// as unavailability, never as an error.
    fn score(&mut self, pos: &Position, mv: Move, budget: &EvalBudget) -> Option<EvaluatorScore>;

    /// Engine identity attached to produced scores.
    fn kind(&self) -> EngineKind;

    /// Human-readable engine name.
    fn name(&self) -> &str;

    /// Reset internal counters for a fresh assessment.
    fn reset(&mut self) {}
}
