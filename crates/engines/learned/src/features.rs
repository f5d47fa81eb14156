//! Feature encoding for the learned value model.
//!
//! Converts a position into a flat f32 vector from one player's
//! perspective: the friendly board block comes first, the opponent block
//! second, followed by global draft-state features. All values are
//! normalized into roughly [0, 1] so linear weights stay comparable.

use mosaic_core::{PlayerBoard, Position, FLOOR_CAPACITY, NUM_ROWS};

/// Per-player block layout, relative to the block base offset.
pub const WALL_OFFSET: usize = 0;
pub const STAGING_COLOR_OFFSET: usize = 25;
pub const STAGING_FILL_OFFSET: usize = 50;
pub const FLOOR_OFFSET: usize = 55;
pub const MARKER_OFFSET: usize = 56;
pub const SCORE_OFFSET: usize = 57;

/// Size of one player block.
pub const PLAYER_BLOCK: usize = 58;

/// Global features start after both player blocks.
pub const GLOBAL_OFFSET: usize = 2 * PLAYER_BLOCK;

/// Total vector length: two player blocks plus bag/discard counts,
/// round number and remaining draft supply.
pub const NUM_FEATURES: usize = GLOBAL_OFFSET + 12;

/// Encodes `pos` from `perspective`'s point of view.
///
/// The perspective player's block occupies indices `0..PLAYER_BLOCK`,
/// the opponent's the next block, so the same weight vector applies to
/// either seat.
pub fn encode(pos: &Position, perspective: usize) -> Vec<f32> {
    let mut features = vec![0.0f32; NUM_FEATURES];

    for (slot, player) in [perspective, 1 - perspective].iter().enumerate() {
        let base = slot * PLAYER_BLOCK;
        encode_player(&pos.players[*player], base, &mut features);
    }

    let g = GLOBAL_OFFSET;
    for c in 0..5 {
        features[g + c] = f32::from(pos.bag[c]) / 20.0;
        features[g + 5 + c] = f32::from(pos.discard[c]) / 20.0;
    }
    features[g + 10] = pos.round as f32 / 10.0;
    features[g + 11] = pos.remaining_supply() as f32 / 20.0;

    features
}

fn encode_player(board: &PlayerBoard, base: usize, features: &mut [f32]) {
    for r in 0..NUM_ROWS {
        for c in 0..NUM_ROWS {
            if board.wall[r][c] {
                features[base + WALL_OFFSET + r * NUM_ROWS + c] = 1.0;
            }
        }
    }
    for r in 0..NUM_ROWS {
        let sr = &board.staging[r];
        if let Some(color) = sr.color {
            features[base + STAGING_COLOR_OFFSET + r * NUM_ROWS + color.idx()] = 1.0;
            features[base + STAGING_FILL_OFFSET + r] =
                f32::from(sr.count) / f32::from(PlayerBoard::row_capacity(r));
        }
    }
    features[base + FLOOR_OFFSET] = board.floor.len() as f32 / FLOOR_CAPACITY as f32;
    if board.has_marker {
        features[base + MARKER_OFFSET] = 1.0;
    }
    features[base + SCORE_OFFSET] = board.score as f32 / 100.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::{StagingRow, TileColor};

    #[test]
    fn startpos_vector_shape_and_bounds() {
        let pos = Position::startpos();
        let features = encode(&pos, 0);
        assert_eq!(features.len(), NUM_FEATURES);
        assert!(features.iter().all(|f| (0.0..=5.0).contains(f)));
        // empty walls and staging rows
        assert!(features[..GLOBAL_OFFSET].iter().all(|f| *f == 0.0));
    }

    #[test]
    fn perspective_swaps_player_blocks() {
        let mut pos = Position::empty();
        pos.players[0].wall[0][0] = true;
        pos.players[1].score = 40;

        let p0 = encode(&pos, 0);
        let p1 = encode(&pos, 1);
        assert_eq!(p0[WALL_OFFSET], 1.0);
        assert_eq!(p1[PLAYER_BLOCK + WALL_OFFSET], 1.0);
        assert_eq!(p0[PLAYER_BLOCK + SCORE_OFFSET], 0.4);
        assert_eq!(p1[SCORE_OFFSET], 0.4);
    }

    #[test]
    fn staging_rows_encode_color_and_fill() {
        let mut pos = Position::empty();
        pos.players[0].staging[2] = StagingRow {
            color: Some(TileColor::Red),
            count: 3,
        };
        let features = encode(&pos, 0);
        let one_hot = STAGING_COLOR_OFFSET + 2 * NUM_ROWS + TileColor::Red.idx();
        assert_eq!(features[one_hot], 1.0);
        assert_eq!(features[STAGING_FILL_OFFSET + 2], 1.0);
    }
}
