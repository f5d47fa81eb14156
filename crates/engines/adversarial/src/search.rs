use crate::eval;
use mosaic_core::{legal_moves, Move, Position, TimeControl};

/// Sort moves by pattern urgency, strongest first, to improve pruning.
/// Ties keep generation order, which is canonical, so ordering is stable.
fn order_moves(pos: &Position, moves: &mut [Move]) {
    let mut keyed: Vec<(f64, Move)> = moves
        .iter()
        .map(|&mv| (patterns::urgency_hint(pos, mv), mv))
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    for (slot, (_, mv)) in moves.iter_mut().zip(keyed) {
        *slot = mv;
    }
}

/// Bounded minimax with alpha-beta pruning.
///
/// Returns `(value, stopped)` where the value is from the perspective of
/// `pos.to_move` and `stopped` means the clock cut the level short (the
/// value is then unusable by the caller).
pub(crate) fn minimax(
    pos: &Position,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    tc: &TimeControl,
    nodes: &mut u64,
) -> (f64, bool) {
    if tc.should_check_time(*nodes) && tc.check_time() {
        return (eval::leaf(pos), true);
    }
    if pos.game_over || depth == 0 {
        return (eval::leaf(pos), false);
    }

    let mut moves = legal_moves(pos);
    if moves.is_empty() {
        return (eval::leaf(pos), false);
    }
    order_moves(pos, &mut moves);

    let mut best = f64::NEG_INFINITY;
    for mv in moves {
        let child = pos.apply(mv);
        *nodes += 1;

        // negate only across an actual change of side
        let same_side = child.to_move == pos.to_move;
        let (value, stopped) = if same_side {
            minimax(&child, depth - 1, alpha, beta, tc, nodes)
        } else {
            let (v, s) = minimax(&child, depth - 1, -beta, -alpha, tc, nodes);
            (-v, s)
        };

        if stopped {
            return (if best.is_finite() { best } else { value }, true);
        }
        if value > best {
            best = value;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    (best, false)
}
