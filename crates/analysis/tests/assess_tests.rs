//! End-to-end assessor behavior with controlled evaluator stacks.

use analysis::{AnalysisCache, AssessConfig, AssessError, Assessor, Tier};
use mosaic_core::{
    evaluate_for, legal_moves, wall_column, EngineKind, EvalBudget, Evaluator, EvaluatorScore,
    Move, Position, TileColor,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Emits one fixed score for every move; unavailable on a spent budget.
struct FixedEvaluator {
    kind: EngineKind,
    value: f64,
    confidence: f64,
}

impl Evaluator for FixedEvaluator {
    fn score(&mut self, _pos: &Position, _mv: Move, budget: &EvalBudget) -> Option<EvaluatorScore> {
        budget.start();
        if budget.is_exhausted() {
            return None;
        }
        Some(EvaluatorScore {
            engine: self.kind,
            value: self.value,
            confidence: self.confidence,
            elapsed: Duration::ZERO,
            nodes: 1,
        })
    }

    fn kind(&self) -> EngineKind {
        self.kind
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Scores each move by the static evaluation of its child position, so
/// different moves get different, fully deterministic values.
struct HeuristicEvaluator;

impl Evaluator for HeuristicEvaluator {
    fn score(&mut self, pos: &Position, mv: Move, budget: &EvalBudget) -> Option<EvaluatorScore> {
        budget.start();
        if budget.is_exhausted() {
            return None;
        }
        Some(EvaluatorScore {
            engine: EngineKind::Adversarial,
            value: evaluate_for(&pos.apply(mv), pos.to_move),
            confidence: 0.8,
            elapsed: Duration::ZERO,
            nodes: 1,
        })
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Adversarial
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Heuristic scoring plus a shared invocation counter.
struct CountingEvaluator {
    calls: Arc<AtomicUsize>,
}

impl Evaluator for CountingEvaluator {
    fn score(&mut self, pos: &Position, mv: Move, budget: &EvalBudget) -> Option<EvaluatorScore> {
        budget.start();
        if budget.is_exhausted() {
            return None;
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(EvaluatorScore {
            engine: EngineKind::Adversarial,
            value: evaluate_for(&pos.apply(mv), pos.to_move),
            confidence: 0.8,
            elapsed: Duration::ZERO,
            nodes: 1,
        })
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Adversarial
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn depth_only_config() -> AssessConfig {
    AssessConfig {
        depth: 1,
        move_time_ms: None,
        ..AssessConfig::default()
    }
}

fn heuristic_assessor() -> Assessor {
    Assessor::with_evaluators(
        depth_only_config(),
        Arc::new(|| vec![Box::new(HeuristicEvaluator) as Box<dyn Evaluator>]),
    )
}

/// Only `c-blue-floor` is legal: every staging row of player 0 already has
/// blue on the wall, and the center holds the last blue tile.
fn single_move_position() -> Position {
    let mut pos = Position::empty();
    pos.center.push(TileColor::Blue);
    for r in 0..5 {
        pos.players[0].wall[r][wall_column(r, TileColor::Blue)] = true;
    }
    pos.bag[TileColor::Blue.idx()] = 14;
    pos
}

#[test]
fn scores_stay_in_range_with_consistent_tiers() {
    let pos = Position::startpos();
    let results = heuristic_assessor().assess(&pos).expect("valid position");
    assert!(!results.is_empty());
    for (i, r) in results.iter().enumerate() {
        assert!((0.0..=100.0).contains(&r.score), "score {}", r.score);
        assert_eq!(r.tier, Tier::from_score(r.score));
        assert_eq!(r.rank, i);
    }
}

#[test]
fn assessment_is_deterministic() {
    let pos = Position::startpos();
    let a = heuristic_assessor().assess(&pos).expect("valid position");
    let b = heuristic_assessor().assess(&pos).expect("valid position");
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.notation, y.notation);
        assert_eq!(x.score, y.score);
        assert_eq!(x.tier, y.tier);
    }
}

#[test]
fn ranking_never_reorders_distinct_scores() {
    let pos = Position::startpos();
    let results = heuristic_assessor().assess(&pos).expect("valid position");
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn equal_scores_tie_break_by_notation() {
    // two identical factories make symmetric moves with equal scores, so
    // ordering falls through to the lexical tie-break
    let mut wide = Position::empty();
    wide.factories[0] = vec![TileColor::Red; 4];
    wide.factories[1] = vec![TileColor::Red; 4];
    wide.bag[TileColor::Red.idx()] = 12;
    let assessor = Assessor::with_evaluators(
        depth_only_config(),
        Arc::new(|| {
            vec![Box::new(FixedEvaluator {
                kind: EngineKind::Learned,
                value: 5.0,
                confidence: 0.6,
            }) as Box<dyn Evaluator>]
        }),
    );
    let results = assessor.assess(&wide).expect("valid position");
    let mut saw_tie = false;
    for pair in results.windows(2) {
        if pair[0].score == pair[1].score {
            saw_tie = true;
            assert!(pair[0].notation < pair[1].notation);
        }
    }
    assert!(saw_tie, "symmetric factories should produce tied moves");
}

#[test]
fn single_legal_move_gets_rank_zero() {
    let pos = single_move_position();
    let results = heuristic_assessor().assess(&pos).expect("valid position");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].rank, 0);
    assert_eq!(results[0].notation, "c-blue-floor");
}

#[test]
fn opposed_evaluators_surface_disagreement() {
    let pos = Position::startpos();
    let assessor = Assessor::with_evaluators(
        depth_only_config(),
        Arc::new(|| {
            vec![
                Box::new(FixedEvaluator {
                    kind: EngineKind::Adversarial,
                    value: 30.0,
                    confidence: 0.8,
                }) as Box<dyn Evaluator>,
                Box::new(FixedEvaluator {
                    kind: EngineKind::Simulation,
                    value: -30.0,
                    confidence: 0.8,
                }),
            ]
        }),
    );
    let results = assessor.assess(&pos).expect("valid position");
    for r in &results {
        let consensus = r.consensus.as_ref().expect("both engines contributed");
        assert!(consensus.disagreement > assessor.config().disagreement_threshold);
        assert!(r.explanation.contains("disagree"));
        assert!(r.breakdown.disagreement_penalty > 0.0);
    }
}

#[test]
fn zero_budgets_default_every_move_to_poor() {
    let pos = Position::startpos();
    let config = AssessConfig {
        depth: 0,
        move_time_ms: Some(0),
        ..AssessConfig::default()
    };
    // the real engine stack, all budgets spent before any work
    let assessor = Assessor::new(config);
    let results = assessor.assess(&pos).expect("blackout is not an error");
    assert!(!results.is_empty());
    for r in &results {
        assert_eq!(r.tier, Tier::Poor);
        assert!(r.consensus.is_none());
        assert!(r.explanation.contains("insufficient information"));
    }
}

#[test]
fn malformed_position_is_a_hard_error() {
    let mut pos = Position::startpos();
    pos.bag[0] = 25;
    let result = heuristic_assessor().assess(&pos);
    assert!(matches!(result, Err(AssessError::InvalidPosition(_))));
}

#[test]
fn terminal_position_yields_empty_list() {
    let mut pos = Position::startpos();
    pos.game_over = true;
    let results = heuristic_assessor().assess(&pos).expect("valid position");
    assert!(results.is_empty());
}

#[test]
fn shared_cache_serves_repeat_assessments() {
    let pos = Position::startpos();
    let cache = Arc::new(AnalysisCache::new(16));
    let assessor = heuristic_assessor().with_cache(Arc::clone(&cache));

    let first = assessor.assess(&pos).expect("valid position");
    assert_eq!(cache.len(), 1);
    let second = assessor.assess(&pos).expect("valid position");
    assert_eq!(first.len(), second.len());
    for (x, y) in first.iter().zip(&second) {
        assert_eq!(x.notation, y.notation);
        assert_eq!(x.score, y.score);
    }
}

#[test]
fn payoff_matrix_cells_are_scored_by_the_evaluator_stack() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let assessor = Assessor::with_evaluators(
        depth_only_config(),
        Arc::new(move || {
            vec![Box::new(CountingEvaluator {
                calls: Arc::clone(&counter),
            }) as Box<dyn Evaluator>]
        }),
    );

    let pos = Position::startpos();
    let moves = legal_moves(&pos).len();
    let results = assessor.assess(&pos).expect("valid position");
    assert_eq!(results.len(), moves);

    // the per-move pipeline accounts for one call per legal move; the
    // surplus is the equilibrium payoff cells going through the same stack
    assert!(
        calls.load(Ordering::SeqCst) > moves,
        "expected payoff cells beyond the {} per-move calls, saw {}",
        moves,
        calls.load(Ordering::SeqCst)
    );
}
