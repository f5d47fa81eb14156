//! Learned scalar move evaluator.
//!
//! Applies the candidate move, encodes the resulting position from the
//! mover's perspective, and asks a [`ValueModel`] for an expected point
//! differential. The model is pluggable so a trained weight file can
//! replace the built-in baseline without touching callers.

pub mod features;
pub mod model;

pub use model::{LinearModel, ModelError, ValueModel};

use mosaic_core::{EngineKind, EvalBudget, Evaluator, EvaluatorScore, Move, Position};
use tracing::warn;

/// Confidence reported for every successful inference. The model gives a
/// point estimate with no search behind it, so this stays flat and modest.
const MODEL_CONFIDENCE: f64 = 0.6;

pub struct LearnedEvaluator {
    model: Box<dyn ValueModel>,
}

impl LearnedEvaluator {
    /// Evaluator backed by the built-in baseline weights.
    pub fn new() -> Self {
        Self {
            model: Box::new(LinearModel::baseline()),
        }
    }

    pub fn with_model(model: Box<dyn ValueModel>) -> Self {
        Self { model }
    }

    pub fn model_id(&self) -> &str {
        self.model.id()
    }
}

impl Default for LearnedEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for LearnedEvaluator {
    fn score(&mut self, pos: &Position, mv: Move, budget: &EvalBudget) -> Option<EvaluatorScore> {
        budget.start();
        if budget.is_exhausted() {
            return None;
        }

        let mover = pos.to_move;
        let child = pos.apply(mv);
        let encoded = features::encode(&child, mover);
        match self.model.infer(&encoded) {
            Ok(value) => Some(EvaluatorScore {
                engine: EngineKind::Learned,
                value,
                confidence: MODEL_CONFIDENCE,
                elapsed: budget.time_control.elapsed(),
                nodes: 1,
            }),
            Err(err) => {
                warn!(model = self.model.id(), error = %err, "inference failed");
                None
            }
        }
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Learned
    }

    fn name(&self) -> &str {
        "Learned v1.0"
    }
}
