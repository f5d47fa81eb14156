use super::*;
use mosaic_core::legal_moves;

#[test]
fn zero_budget_reports_unavailable() {
    let pos = Position::startpos();
    let mv = legal_moves(&pos)[0];
    let mut engine = SimulationEvaluator::new();
    assert!(engine.score(&pos, mv, &EvalBudget::zero()).is_none());
}

#[test]
fn fixed_rollout_budget_is_deterministic() {
    let pos = Position::startpos();
    let mv = legal_moves(&pos)[0];
    let budget = EvalBudget::depth(1);

    let mut engine = SimulationEvaluator::with_config(1.4, 200, 42);
    let a = engine.score(&pos, mv, &budget).expect("rollouts ran");
    let b = engine.score(&pos, mv, &budget).expect("rollouts ran");
    assert_eq!(a.value, b.value);
    assert_eq!(a.nodes, b.nodes);
    assert_eq!(a.nodes, 200);
}

#[test]
fn confidence_grows_with_visits() {
    let pos = Position::startpos();
    let mv = legal_moves(&pos)[0];
    let budget = EvalBudget::depth(1);

    let mut small = SimulationEvaluator::with_config(1.4, 30, 42);
    let mut large = SimulationEvaluator::with_config(1.4, 300, 42);
    let a = small.score(&pos, mv, &budget).expect("rollouts ran");
    let b = large.score(&pos, mv, &budget).expect("rollouts ran");
    assert!(b.confidence > a.confidence);
}

#[test]
fn value_is_a_finite_point_delta() {
    let pos = Position::startpos();
    let mv = legal_moves(&pos)[0];
    let mut engine = SimulationEvaluator::with_config(1.4, 100, 7);
    let score = engine.score(&pos, mv, &EvalBudget::depth(1)).expect("rollouts ran");
    assert!(score.value.is_finite());
    assert!(score.value.abs() < 200.0);
    assert!(score.confidence > 0.0 && score.confidence < 1.0);
}
