use crate::types::TileColor;
use serde::{Deserialize, Serialize};

/// Number of staging rows / grid rows per player.
pub const NUM_ROWS: usize = 5;
/// Slots on the penalty row (overflow beyond this goes to the discard).
pub const FLOOR_CAPACITY: usize = 7;
/// Points subtracted per occupied penalty slot, in slot order.
pub const FLOOR_PENALTIES: [i32; FLOOR_CAPACITY] = [1, 1, 2, 2, 2, 3, 3];

/// Grid column a color occupies in a given row under the fixed color scheme.
pub fn wall_column(row: usize, color: TileColor) -> usize {
    (row + color.idx()) % NUM_ROWS
}

/// Color of a grid cell under the fixed color scheme (inverse of
/// [`wall_column`]).
pub fn wall_color(row: usize, col: usize) -> TileColor {
    TileColor::ALL[(col + NUM_ROWS - row) % NUM_ROWS]
}

/// A fixed-capacity holding row for a single color. Capacity is the row
/// index plus one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingRow {
    pub color: Option<TileColor>,
    pub count: u8,
}

/// One player's side of the table: staging rows, the completion grid, the
/// penalty row, and accumulated score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub staging: [StagingRow; NUM_ROWS],
    /// Completion grid occupancy; the color of each cell is fixed by
    /// [`wall_color`].
    pub wall: [[bool; NUM_ROWS]; NUM_ROWS],
    /// Tiles currently on the penalty row (discarded at round end)
    pub floor: Vec<TileColor>,
    /// Whether this player holds the round-starter marker
    pub has_marker: bool,
    pub score: i32,
}

impl Default for PlayerBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerBoard {
    pub fn new() -> Self {
        Self {
            staging: [StagingRow::default(); NUM_ROWS],
            wall: [[false; NUM_ROWS]; NUM_ROWS],
            floor: Vec::new(),
            has_marker: false,
            score: 0,
        }
    }

    pub fn row_capacity(row: usize) -> u8 {
        (row + 1) as u8
    }

    /// Whether tiles of `color` may be staged on `row`: the row must have
    /// space, hold no other color, and the matching grid cell must be empty.
    pub fn can_stage(&self, row: usize, color: TileColor) -> bool {
        if row >= NUM_ROWS {
            return false;
        }
        let sr = &self.staging[row];
        if sr.count >= Self::row_capacity(row) {
            return false;
        }
        if let Some(existing) = sr.color {
            if existing != color {
                return false;
            }
        }
        !self.wall[row][wall_column(row, color)]
    }

    /// Occupied penalty slots, including the starter marker.
    pub fn floor_slots(&self) -> usize {
        self.floor.len() + usize::from(self.has_marker)
    }

    /// Points that will be subtracted for the penalty row at round end.
    pub fn floor_penalty(&self) -> i32 {
        FLOOR_PENALTIES[..self.floor_slots().min(FLOOR_CAPACITY)]
            .iter()
            .sum()
    }

    /// Points a tile placed at (row, col) would score: the lengths of the
    /// contiguous horizontal and vertical runs through the cell, counting
    /// each run only when it extends beyond the placed tile itself.
    pub fn placement_score(&self, row: usize, col: usize) -> i32 {
        let mut h = 1i32;
        let mut c = col;
        while c > 0 && self.wall[row][c - 1] {
            h += 1;
            c -= 1;
        }
        c = col;
        while c + 1 < NUM_ROWS && self.wall[row][c + 1] {
            h += 1;
            c += 1;
        }

        let mut v = 1i32;
        let mut r = row;
        while r > 0 && self.wall[r - 1][col] {
            v += 1;
            r -= 1;
        }
        r = row;
        while r + 1 < NUM_ROWS && self.wall[r + 1][col] {
            v += 1;
            r += 1;
        }

        match (h, v) {
            (1, 1) => 1,
            (1, _) => v,
            (_, 1) => h,
            _ => h + v,
        }
    }

    /// Number of complete horizontal grid rows.
    pub fn completed_rows(&self) -> usize {
        self.wall
            .iter()
            .filter(|row| row.iter().all(|&c| c))
            .count()
    }

    /// Number of complete grid columns.
    pub fn completed_columns(&self) -> usize {
        (0..NUM_ROWS)
            .filter(|&c| (0..NUM_ROWS).all(|r| self.wall[r][c]))
            .count()
    }

    /// Number of colors with all five grid cells placed.
    pub fn completed_colors(&self) -> usize {
        TileColor::ALL
            .iter()
            .filter(|&&color| (0..NUM_ROWS).all(|r| self.wall[r][wall_column(r, color)]))
            .count()
    }

    /// End-of-game bonus: +2 per row, +7 per column, +10 per color set.
    pub fn end_bonus(&self) -> i32 {
        2 * self.completed_rows() as i32
            + 7 * self.completed_columns() as i32
            + 10 * self.completed_colors() as i32
    }

    /// Tiles of `color` already placed on the grid.
    pub fn wall_count(&self, color: TileColor) -> u32 {
        (0..NUM_ROWS)
            .filter(|&r| self.wall[r][wall_column(r, color)])
            .count() as u32
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
