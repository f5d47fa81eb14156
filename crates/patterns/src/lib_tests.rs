use super::*;
use mosaic_core::{StagingRow, TileColor};

#[test]
fn malformed_input_yields_no_matches() {
    let pos = Position::empty();
    // factory index out of range
    let mv = Move::new(Source::Factory(9), TileColor::Blue, Dest::Row(0));
    assert!(detect(&pos, mv).is_empty());

    // row index out of range
    let mv = Move::new(Source::Center, TileColor::Blue, Dest::Row(9));
    assert!(detect(&pos, mv).is_empty());

    // color not present at the source
    let mv = Move::new(Source::Center, TileColor::Blue, Dest::Row(0));
    assert!(detect(&pos, mv).is_empty());

    let mut bad = Position::empty();
    bad.to_move = 7;
    let mv = Move::new(Source::Center, TileColor::Blue, Dest::Floor);
    assert!(detect(&bad, mv).is_empty());
}

#[test]
fn families_can_co_occur_on_one_move() {
    let mut pos = Position::empty();
    // taking every remaining red both fills the mover's row 1 and denies
    // the opponent's committed red row
    pos.factories[0] = vec![TileColor::Red, TileColor::Red];
    pos.bag[TileColor::Red.idx()] -= 2;
    pos.players[1].staging[2] = StagingRow {
        color: Some(TileColor::Red),
        count: 1,
    };
    pos.bag[TileColor::Red.idx()] -= 1;
    pos.validate().expect("fixture must validate");

    let mv = Move::new(Source::Factory(0), TileColor::Red, Dest::Row(1));
    let matches = detect(&pos, mv);
    let kinds: Vec<PatternKind> = matches.iter().map(|m| m.kind).collect();
    assert!(kinds.contains(&PatternKind::Blocking));
    assert!(kinds.contains(&PatternKind::ScoringCompletion));
    assert!(kinds.contains(&PatternKind::PositionalControl));
    // one match per family at most
    let mut sorted = kinds.clone();
    sorted.dedup();
    assert_eq!(sorted.len(), kinds.len());
}

#[test]
fn urgency_hint_prefers_tactical_moves() {
    let mut pos = Position::empty();
    pos.factories[0] = vec![TileColor::Blue, TileColor::Red];
    pos.bag[TileColor::Blue.idx()] -= 1;
    pos.bag[TileColor::Red.idx()] -= 1;
    pos.validate().expect("fixture must validate");

    let fill = Move::new(Source::Factory(0), TileColor::Blue, Dest::Row(0));
    let dump = Move::new(Source::Factory(0), TileColor::Blue, Dest::Floor);
    assert!(urgency_hint(&pos, fill) > urgency_hint(&pos, dump));
}
