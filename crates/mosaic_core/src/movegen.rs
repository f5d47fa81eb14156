use crate::board::NUM_ROWS;
use crate::position::Position;
use crate::types::{Dest, Move, Source, TileColor};

fn colors_present(tiles: &[TileColor]) -> [bool; 5] {
    let mut present = [false; 5];
    for t in tiles {
        present[t.idx()] = true;
    }
    present
}

/// Generate every legal move into `out` (cleared first).
///
/// Generation order is canonical: factories in index order, then the center;
/// colors in color-index order; staging rows ascending, then the penalty
/// row. Repeated calls on the same position produce the same ordering.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    if pos.game_over {
        return;
    }
    let board = &pos.players[pos.to_move];

    let emit = |source: Source, present: [bool; 5], out: &mut Vec<Move>| {
        for color in TileColor::ALL {
            if !present[color.idx()] {
                continue;
            }
            for r in 0..NUM_ROWS {
                if board.can_stage(r, color) {
                    out.push(Move::new(source, color, Dest::Row(r as u8)));
                }
            }
            out.push(Move::new(source, color, Dest::Floor));
        }
    };

    for (i, f) in pos.factories.iter().enumerate() {
        emit(Source::Factory(i as u8), colors_present(f), out);
    }
    emit(Source::Center, colors_present(&pos.center), out);
}

/// Convenience wrapper returning a fresh vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    moves
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
