use crate::board::{wall_column, PlayerBoard, NUM_ROWS};
use crate::position::Position;

/// Projected points for one board: banked score, plus the value of staged
/// tiles (full rows at their placement value, partial rows discounted),
/// minus pending penalty-row points, plus a nudge for near-complete grid
/// rows.
fn projected_score(board: &PlayerBoard) -> f64 {
    let mut total = board.score as f64;

    for r in 0..NUM_ROWS {
        let sr = board.staging[r];
        if let Some(color) = sr.color {
            let col = wall_column(r, color);
            let place = board.placement_score(r, col) as f64;
            if sr.count == PlayerBoard::row_capacity(r) {
                total += place;
            } else {
                total += place * 0.5 * sr.count as f64 / (r + 1) as f64;
            }
        }
    }

    total -= board.floor_penalty() as f64;

    for r in 0..NUM_ROWS {
        let filled = board.wall[r].iter().filter(|&&c| c).count();
        if filled == NUM_ROWS - 1 {
            total += 1.5;
        }
    }

    total
}

/// Fast static evaluation from the side-to-move perspective, in points.
///
/// Used as the alpha-beta leaf heuristic and for candidate ordering in the
/// endgame planner; deliberately lookahead-free.
pub fn evaluate(pos: &Position) -> f64 {
    let me = projected_score(&pos.players[pos.to_move]);
    let opp = projected_score(&pos.players[1 - pos.to_move]);
    me - opp
}

/// Static evaluation from a fixed player's perspective regardless of whose
/// turn it is. Needed where turn order is non-alternating across round
/// boundaries.
pub fn evaluate_for(pos: &Position, player: usize) -> f64 {
    let me = projected_score(&pos.players[player]);
    let opp = projected_score(&pos.players[1 - player]);
    me - opp
}
