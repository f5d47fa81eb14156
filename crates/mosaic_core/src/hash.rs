//! Canonical position hashing for the shared analysis cache.
//!
//! The game has no repetition rule, so there is no need for incremental
//! updates; a single FNV-1a pass over a canonical encoding is cheap enough
//! per assessment call. Factories and the center are hashed as per-color
//! counts so tile ordering within a display never changes the key.

use crate::board::{wall_column, NUM_ROWS};
use crate::position::Position;
use crate::types::{Move, TileColor};

struct Fnv(u64);

impl Fnv {
    fn new() -> Self {
        Fnv(0xcbf29ce484222325)
    }

    fn mix(&mut self, x: u64) {
        self.0 ^= x;
        self.0 = self.0.wrapping_mul(0x100000001b3);
    }
}

fn color_counts(tiles: &[TileColor]) -> [u64; 5] {
    let mut counts = [0u64; 5];
    for t in tiles {
        counts[t.idx()] += 1;
    }
    counts
}

/// Canonical 64-bit key for a position.
pub fn position_hash(pos: &Position) -> u64 {
    let mut h = Fnv::new();
    h.mix(pos.to_move as u64 + 1);
    h.mix(pos.round as u64);
    h.mix(u64::from(pos.game_over));
    h.mix(u64::from(pos.center_has_marker));

    for &c in &pos.bag {
        h.mix(c as u64 + 1);
    }
    for &c in &pos.discard {
        h.mix(c as u64 + 1);
    }
    for f in &pos.factories {
        for c in color_counts(f) {
            h.mix(c + 1);
        }
    }
    for c in color_counts(&pos.center) {
        h.mix(c + 1);
    }

    for board in &pos.players {
        for sr in &board.staging {
            let color_tag = sr.color.map_or(0, |c| c.idx() as u64 + 1);
            h.mix(color_tag << 8 | sr.count as u64);
        }
        for r in 0..NUM_ROWS {
            let mut bits = 0u64;
            for c in 0..NUM_ROWS {
                if board.wall[r][c] {
                    bits |= 1 << c;
                }
            }
            h.mix(bits + 1);
        }
        for c in color_counts(&board.floor) {
            h.mix(c + 1);
        }
        h.mix(u64::from(board.has_marker));
        h.mix(board.score as u64 + 1);
    }

    h.0
}

/// Stable key for a move, used to derive per-move simulation seeds.
pub fn move_hash(mv: Move) -> u64 {
    let mut h = Fnv::new();
    let src = match mv.source {
        crate::types::Source::Factory(i) => i as u64 + 1,
        crate::types::Source::Center => 0,
    };
    let dst = match mv.dest {
        crate::types::Dest::Row(r) => r as u64 + 1,
        crate::types::Dest::Floor => 0,
    };
    h.mix(src);
    h.mix(mv.color.idx() as u64 + 1);
    h.mix(dst);
    // fold in the grid column so color/row pairs spread
    if let crate::types::Dest::Row(r) = mv.dest {
        h.mix(wall_column(r as usize, mv.color) as u64 + 1);
    }
    h.0
}
