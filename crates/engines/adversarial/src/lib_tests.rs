use super::*;
use mosaic_core::{Dest, EvalBudget, Evaluator, Move, Position, Source, TileColor};
use std::time::Duration;

fn two_choice_position() -> Position {
    let mut pos = Position::empty();
    pos.factories[0] = vec![TileColor::Blue];
    pos.bag[TileColor::Blue.idx()] -= 1;
    pos.factories[1] = vec![TileColor::Red; 2];
    pos.bag[TileColor::Red.idx()] -= 2;
    pos.validate().expect("fixture must validate");
    pos
}

#[test]
fn zero_budget_reports_unavailable() {
    let pos = Position::startpos();
    let mv = mosaic_core::legal_moves(&pos)[0];
    let mut engine = AdversarialEvaluator::new();
    assert!(engine.score(&pos, mv, &EvalBudget::zero()).is_none());
}

#[test]
fn prefers_staging_over_penalty_dump() {
    let pos = two_choice_position();
    let fill = Move::new(Source::Factory(0), TileColor::Blue, Dest::Row(0));
    let dump = Move::new(Source::Factory(0), TileColor::Blue, Dest::Floor);

    let mut engine = AdversarialEvaluator::new();
    let budget = EvalBudget::depth(2);
    let fill_score = engine.score(&pos, fill, &budget).expect("in budget");
    let dump_score = engine.score(&pos, dump, &budget).expect("in budget");
    assert!(
        fill_score.value > dump_score.value,
        "staging {} should beat dumping {}",
        fill_score.value,
        dump_score.value
    );
}

#[test]
fn search_is_deterministic() {
    let pos = two_choice_position();
    let mv = Move::new(Source::Factory(1), TileColor::Red, Dest::Row(1));
    let mut engine = AdversarialEvaluator::new();
    let a = engine.score(&pos, mv, &EvalBudget::depth(3)).expect("in budget");
    let b = engine.score(&pos, mv, &EvalBudget::depth(3)).expect("in budget");
    assert_eq!(a.value, b.value);
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn deeper_search_reports_higher_confidence() {
    let pos = two_choice_position();
    let mv = Move::new(Source::Factory(1), TileColor::Red, Dest::Row(1));
    let mut engine = AdversarialEvaluator::new();
    let shallow = engine.score(&pos, mv, &EvalBudget::depth(1)).expect("in budget");
    let deep = engine.score(&pos, mv, &EvalBudget::depth(3)).expect("in budget");
    assert!(deep.confidence > shallow.confidence);
}

#[test]
fn generous_time_budget_completes() {
    let pos = two_choice_position();
    let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Row(0));
    let mut engine = AdversarialEvaluator::new();
    let budget = EvalBudget::depth_and_time(2, Duration::from_secs(5));
    assert!(engine.score(&pos, mv, &budget).is_some());
}
