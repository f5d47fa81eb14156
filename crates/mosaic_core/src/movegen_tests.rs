use super::*;
use crate::board::{wall_column, StagingRow, NUM_ROWS};
use crate::position::Position;
use crate::types::{Dest, Move, Source, TileColor};
use std::collections::HashSet;

#[test]
fn startpos_moves_are_unique_and_legal() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    assert!(!moves.is_empty());

    let unique: HashSet<_> = moves.iter().copied().collect();
    assert_eq!(unique.len(), moves.len());
    for mv in &moves {
        assert!(pos.is_legal(*mv), "generated move {} not legal", mv.notation());
    }

    // every distinct (source, color) pair yields 5 row moves + 1 floor move
    let expected: usize = pos
        .factories
        .iter()
        .map(|f| {
            let distinct: HashSet<_> = f.iter().copied().collect();
            distinct.len() * (NUM_ROWS + 1)
        })
        .sum();
    assert_eq!(moves.len(), expected);
}

#[test]
fn generation_order_is_deterministic() {
    let pos = Position::startpos();
    assert_eq!(legal_moves(&pos), legal_moves(&pos));
}

#[test]
fn blocked_grid_cell_forces_penalty_row() {
    let mut pos = Position::empty();
    pos.center = vec![TileColor::Blue];
    pos.bag[TileColor::Blue.idx()] -= 1;
    // blue's entire grid column path is already placed
    for r in 0..NUM_ROWS {
        pos.players[0].wall[r][wall_column(r, TileColor::Blue)] = true;
    }
    pos.bag[TileColor::Blue.idx()] -= NUM_ROWS as u8;
    pos.validate().expect("fixture must validate");

    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 1);
    assert_eq!(
        moves[0],
        Move::new(Source::Center, TileColor::Blue, Dest::Floor)
    );
}

#[test]
fn occupied_row_limits_destinations_to_matching_color() {
    let mut pos = Position::empty();
    pos.center = vec![TileColor::Red, TileColor::Blue];
    pos.bag[TileColor::Red.idx()] -= 1;
    pos.bag[TileColor::Blue.idx()] -= 1;
    pos.players[0].staging[4] = StagingRow {
        color: Some(TileColor::Red),
        count: 2,
    };
    pos.bag[TileColor::Red.idx()] -= 2;
    pos.validate().expect("fixture must validate");

    let moves = legal_moves(&pos);
    assert!(moves.contains(&Move::new(Source::Center, TileColor::Red, Dest::Row(4))));
    assert!(!moves.contains(&Move::new(Source::Center, TileColor::Blue, Dest::Row(4))));
}

#[test]
fn no_moves_after_game_over() {
    let mut pos = Position::startpos();
    pos.game_over = true;
    assert!(legal_moves(&pos).is_empty());
}
