use super::*;
use mosaic_core::{Dest, Move, Position, Source, TileColor};

/// Factory 0 holds a triple red; factory 1 holds small takes.
fn fixture() -> Position {
    let mut pos = Position::empty();
    pos.factories[0] = vec![
        TileColor::Red,
        TileColor::Red,
        TileColor::Red,
        TileColor::Blue,
    ];
    pos.factories[1] = vec![
        TileColor::Yellow,
        TileColor::Blue,
        TileColor::Blue,
        TileColor::Black,
    ];
    pos
}

fn red_floor_dump() -> Move {
    Move {
        source: Source::Factory(0),
        color: TileColor::Red,
        dest: Dest::Floor,
    }
}

#[test]
fn neutral_priors() {
    let model = OpponentModel::new();
    assert_eq!(model.risk_tolerance, 0.5);
    assert_eq!(model.aggression, 0.5);
    assert_eq!(model.observations(), 0);
}

#[test]
fn floor_dumps_raise_risk_tolerance() {
    let pos = fixture();
    let mut model = OpponentModel::new();
    model.observe(&pos, red_floor_dump());
    assert!(model.risk_tolerance > 0.5);
    assert_eq!(model.observations(), 1);
}

#[test]
fn safe_staging_lowers_risk_tolerance() {
    let pos = fixture();
    let safe = Move {
        source: Source::Factory(0),
        color: TileColor::Red,
        dest: Dest::Row(3),
    };
    let mut model = OpponentModel::new();
    model.observe(&pos, safe);
    assert!(model.risk_tolerance < 0.5);
}

#[test]
fn big_takes_read_as_aggressive() {
    let pos = fixture();
    let small = Move {
        source: Source::Factory(1),
        color: TileColor::Yellow,
        dest: Dest::Row(4),
    };
    let mut grabby = OpponentModel::new();
    let mut timid = OpponentModel::new();
    grabby.observe(&pos, red_floor_dump());
    timid.observe(&pos, small);
    assert!(grabby.aggression > timid.aggression);
}

#[test]
fn decay_converges_toward_observed_behavior() {
    let pos = fixture();
    let dump = red_floor_dump();
    let mut model = OpponentModel::new();
    let mut last = model.risk_tolerance;
    for _ in 0..20 {
        model.observe(&pos, dump);
        assert!(model.risk_tolerance >= last);
        last = model.risk_tolerance;
    }
    // three of four slots overflow: observation is 0.75, and twenty
    // updates at alpha 0.2 close almost all of the gap
    assert!(model.risk_tolerance > 0.7);
}

#[test]
fn illegal_moves_are_ignored() {
    let pos = fixture();
    let mut model = OpponentModel::new();
    let bogus = Move {
        source: Source::Center,
        color: TileColor::Blue,
        dest: Dest::Floor,
    };
    model.observe(&pos, bogus);
    assert_eq!(model.observations(), 0);
    assert_eq!(model.risk_tolerance, 0.5);

    let out_of_range = Move {
        source: Source::Factory(9),
        color: TileColor::Blue,
        dest: Dest::Row(0),
    };
    model.observe(&pos, out_of_range);
    assert_eq!(model.observations(), 0);
}
