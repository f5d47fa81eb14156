use mosaic_core::{evaluate, PlayerBoard, Position, TileColor, NUM_ROWS};

/// Quadratic column progress plus linear color-set progress. Rewards grid
/// shapes that head toward the +7/+10 end bonuses.
fn structure_bonus(board: &PlayerBoard) -> f64 {
    let mut bonus = 0.0;
    for c in 0..NUM_ROWS {
        let filled = (0..NUM_ROWS).filter(|&r| board.wall[r][c]).count() as f64;
        bonus += filled * filled * 0.08;
    }
    for color in TileColor::ALL {
        bonus += f64::from(board.wall_count(color)) * 0.1;
    }
    bonus
}

/// Leaf evaluation from the side-to-move perspective: exact score delta for
/// finished games, otherwise the shared projection heuristic plus a grid
/// structure term.
pub(crate) fn leaf(pos: &Position) -> f64 {
    if pos.game_over {
        let s = pos.terminal_score().scores;
        return f64::from(s[pos.to_move] - s[1 - pos.to_move]);
    }
    evaluate(pos) + structure_bonus(&pos.players[pos.to_move])
        - structure_bonus(&pos.players[1 - pos.to_move])
}
