//! Semi-greedy playout policy. Most plies pick the move with the best
//! immediate heuristic; the rest pick uniformly at random so playouts keep
//! some variety without straying into nonsense lines.

use mosaic_core::{legal_moves, Dest, Move, PlayerBoard, Position, Source};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fraction of plies played greedily.
const GREEDY_RATE: f64 = 0.7;
/// Safety cap; games end well before this many plies.
const MAX_PLIES: u32 = 400;

/// Cheap one-ply heuristic: tiles usefully staged, a bonus for filling the
/// row, penalties for spillage. No cloning, no lookahead.
fn greedy_key(pos: &Position, mv: Move) -> f64 {
    let taken = match mv.source {
        Source::Factory(i) => pos.factories[i as usize]
            .iter()
            .filter(|&&t| t == mv.color)
            .count() as f64,
        Source::Center => pos.center.iter().filter(|&&t| t == mv.color).count() as f64,
    };
    let board = &pos.players[pos.to_move];
    match mv.dest {
        Dest::Row(r) => {
            let r = r as usize;
            let space = f64::from(PlayerBoard::row_capacity(r) - board.staging[r].count);
            let placed = taken.min(space);
            let spill = taken - placed;
            let fill_bonus = if placed >= space { 2.0 } else { 0.0 };
            placed + fill_bonus - 1.5 * spill
        }
        Dest::Floor => -1.5 * taken,
    }
}

/// Play the position to the end of the game, returning the final score
/// difference player 0 − player 1.
pub(crate) fn playout(start: &Position, rng: &mut StdRng) -> f64 {
    let mut pos = start.clone();
    let mut plies = 0;
    while !pos.game_over && plies < MAX_PLIES {
        let moves = legal_moves(&pos);
        let Some(&fallback) = moves.first() else {
            break;
        };
        let mv = if rng.gen_bool(GREEDY_RATE) {
            let mut best = fallback;
            let mut best_key = greedy_key(&pos, best);
            for &candidate in &moves[1..] {
                let key = greedy_key(&pos, candidate);
                if key > best_key {
                    best_key = key;
                    best = candidate;
                }
            }
            best
        } else {
            *moves.choose(rng).unwrap_or(&fallback)
        };
        pos = pos.apply(mv);
        plies += 1;
    }
    let s = pos.terminal_score().scores;
    f64::from(s[0] - s[1])
}
