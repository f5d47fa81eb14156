//! The move-quality assessor.
//!
//! One call per position: validates, classifies the phase, runs the
//! per-move pipelines in parallel, and returns a ranked list. Evaluator
//! construction goes through an injected factory so tests can substitute
//! fixed-output engines, and each parallel task builds its own evaluators
//! so no mutable state is shared across moves.

use crate::cache::AnalysisCache;
use crate::config::AssessConfig;
use crate::consensus::{combine, ConsensusResult};
use crate::explain;
use crate::score::{score_components, ScoreBreakdown, Tier};
use adversarial_engine::AdversarialEvaluator;
use endgame::{plan_sequence, EndgamePlan, Phase};
use learned_engine::LearnedEvaluator;
use mosaic_core::{
    evaluate_for, legal_moves, position_hash, EvalBudget, Evaluator, Move, Position, PositionError,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use simulation_engine::SimulationEvaluator;
use std::sync::Arc;
use std::time::Duration;
use strategy::{find_equilibrium, EquilibriumResult, PayoffMatrix, StrategicAnalyzer};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AssessError {
    /// The position violates a rules invariant; no partial assessment is
    /// attempted.
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] PositionError),
}

/// Final verdict for one legal move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveQualityResult {
    pub mv: Move,
    pub notation: String,
    pub score: f64,
    pub tier: Tier,
    /// 0 = best move in the position.
    pub rank: usize,
    pub breakdown: ScoreBreakdown,
    /// None when every evaluator was unavailable for this move.
    pub consensus: Option<ConsensusResult>,
    pub explanation: String,
}

/// Builds a fresh evaluator set for one move's pipeline.
pub type EvaluatorFactory = Arc<dyn Fn() -> Vec<Box<dyn Evaluator>> + Send + Sync>;

pub struct Assessor {
    config: AssessConfig,
    factory: EvaluatorFactory,
    analyzer: StrategicAnalyzer,
    cache: Option<Arc<AnalysisCache>>,
}

impl Assessor {
    /// Assessor with the full engine stack: alpha-beta, seeded UCT, and the
    /// baseline learned model.
    pub fn new(config: AssessConfig) -> Self {
        let seed = config.base_seed;
        let factory: EvaluatorFactory = Arc::new(move || {
            vec![
                Box::new(AdversarialEvaluator::new()) as Box<dyn Evaluator>,
                Box::new(SimulationEvaluator::with_config(1.4, 1500, seed)),
                Box::new(LearnedEvaluator::new()),
            ]
        });
        Self {
            config,
            factory,
            analyzer: StrategicAnalyzer::new(),
            cache: None,
        }
    }

    /// Assessor with a caller-supplied evaluator set.
    pub fn with_evaluators(config: AssessConfig, factory: EvaluatorFactory) -> Self {
        Self {
            config,
            factory,
            analyzer: StrategicAnalyzer::new(),
            cache: None,
        }
    }

    /// Attach a shared result cache. The cache is caller-owned; the
    /// assessor only reads and insert-if-absents.
    pub fn with_cache(mut self, cache: Arc<AnalysisCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Feed an observed opponent move into the opponent model.
    pub fn observe_opponent(&mut self, pos: &Position, mv: Move) {
        self.analyzer.observe(pos, mv);
    }

    pub fn config(&self) -> &AssessConfig {
        &self.config
    }

    /// Scores and ranks every legal move.
    ///
    /// A terminal or move-less position yields an empty list. Component
    /// timeouts degrade that component to zero weight; only a malformed
    /// position is a hard error.
    pub fn assess(&self, pos: &Position) -> Result<Vec<MoveQualityResult>, AssessError> {
        pos.validate()?;

        let moves = legal_moves(pos);
        if moves.is_empty() {
            return Ok(Vec::new());
        }

        let hash = position_hash(pos);
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(hash) {
                debug!(hash, "assessment served from cache");
                return Ok(hit.as_ref().clone());
            }
        }

        let phase = Phase::classify(pos);
        let plan = if phase.is_late() {
            Some(plan_sequence(pos, self.config.horizon, &self.plan_budget()))
        } else {
            None
        };
        let equilibrium = self.equilibrium(pos);
        debug!(phase = phase.label(), moves = moves.len(), "assessing position");

        let mut results: Vec<MoveQualityResult> = moves
            .par_iter()
            .map(|&mv| self.assess_move(pos, mv, plan.as_ref(), &equilibrium))
            .collect();

        // stable rank: score, then consensus confidence, then notation
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    let ca = a.consensus.as_ref().map(|c| c.confidence).unwrap_or(0.0);
                    let cb = b.consensus.as_ref().map(|c| c.confidence).unwrap_or(0.0);
                    cb.partial_cmp(&ca).unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.notation.cmp(&b.notation))
        });
        for (rank, result) in results.iter_mut().enumerate() {
            result.rank = rank;
        }

        if let Some(cache) = &self.cache {
            let stored = cache.insert_if_absent(hash, Arc::new(results));
            return Ok(stored.as_ref().clone());
        }
        Ok(results)
    }

    fn assess_move(
        &self,
        pos: &Position,
        mv: Move,
        plan: Option<&EndgamePlan>,
        equilibrium: &Option<EquilibriumResult>,
    ) -> MoveQualityResult {
        // the detector shares the move budget: a zero budget means no
        // component may contribute anything
        let matches = if self.move_budget().is_exhausted() {
            Vec::new()
        } else {
            patterns::detect(pos, mv)
        };

        let mut scores = Vec::new();
        for mut evaluator in (self.factory)() {
            if let Some(score) = evaluator.score(pos, mv, &self.move_budget()) {
                scores.push(score);
            }
        }
        let consensus = combine(&scores, self.config.normalization_scale);

        // the plan speaks only for its own first move
        let endgame_contribution = match plan {
            Some(p) if p.sequence.first() == Some(&mv) => {
                (p.projected_delta / 20.0).clamp(-1.0, 1.0) * self.config.endgame_cap * p.confidence
            }
            _ => 0.0,
        };

        let strategic_weight = match equilibrium {
            Some(eq) => self.analyzer.weight_for(pos, mv, eq),
            None => 1.0,
        };

        let breakdown = score_components(
            &self.config,
            consensus.as_ref(),
            &matches,
            endgame_contribution,
            strategic_weight,
        );
        let explanation = if consensus.is_none() && matches.is_empty() {
            explain::blackout()
        } else {
            explain::explain(&self.config, &breakdown, consensus.as_ref(), &matches)
        };

        MoveQualityResult {
            mv,
            notation: mv.notation(),
            score: breakdown.total,
            tier: Tier::from_score(breakdown.total),
            rank: 0,
            breakdown,
            consensus,
            explanation,
        }
    }

    /// Pure-equilibrium search over both players' top candidates, with the
    /// consensus of the evaluator stack as the payoff function.
    fn equilibrium(&self, pos: &Position) -> Option<EquilibriumResult> {
        let matrix = PayoffMatrix::build(pos, |p, r, c| self.cell_payoff(p, r, c))?;
        Some(find_equilibrium(&matrix))
    }

    /// Row player's payoff for one matrix cell: the consensus value of the
    /// reply `c` after `r`, re-signed to the row player's seat, under a
    /// reduced per-cell budget. Degrades to the static evaluation when no
    /// engine produces a score in time, or when `c` is illegal after `r`
    /// (column moves are fixed across rows).
    fn cell_payoff(&self, p: &Position, r: Move, c: Move) -> f64 {
        let row_player = p.to_move;
        let after = p.apply(r);
        if !after.is_legal(c) {
            return evaluate_for(&after, row_player);
        }

        let mut scores = Vec::new();
        for mut evaluator in (self.factory)() {
            if let Some(score) = evaluator.score(&after, c, &self.cell_budget()) {
                scores.push(score);
            }
        }
        match combine(&scores, self.config.normalization_scale) {
            // consensus speaks for the reply's mover
            Some(consensus) if after.to_move == row_player => consensus.value,
            Some(consensus) => -consensus.value,
            None => evaluate_for(&after.apply(c), row_player),
        }
    }

    fn move_budget(&self) -> EvalBudget {
        match self.config.move_time_ms {
            Some(ms) => EvalBudget::depth_and_time(self.config.depth, Duration::from_millis(ms)),
            None => EvalBudget::depth(self.config.depth),
        }
    }

    /// Matrix cells are cheap relative to the per-move pipeline: capped
    /// depth and a quarter of the move clock each.
    fn cell_budget(&self) -> EvalBudget {
        let depth = self.config.depth.min(2);
        match self.config.move_time_ms {
            Some(ms) => EvalBudget::depth_and_time(depth, Duration::from_millis(ms / 4)),
            None => EvalBudget::depth(depth),
        }
    }

    fn plan_budget(&self) -> EvalBudget {
        match self.config.move_time_ms {
            Some(ms) => {
                EvalBudget::depth_and_time(self.config.horizon, Duration::from_millis(ms * 2))
            }
            None => EvalBudget::depth(self.config.horizon),
        }
    }
}
