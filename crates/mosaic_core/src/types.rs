use serde::{Deserialize, Serialize};

/// The five tile colors of the drafting game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileColor {
    Blue,
    Yellow,
    Red,
    Black,
    White,
}

impl TileColor {
    pub const ALL: [TileColor; 5] = [
        TileColor::Blue,
        TileColor::Yellow,
        TileColor::Red,
        TileColor::Black,
        TileColor::White,
    ];

    pub fn idx(self) -> usize {
        match self {
            TileColor::Blue => 0,
            TileColor::Yellow => 1,
            TileColor::Red => 2,
            TileColor::Black => 3,
            TileColor::White => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TileColor::Blue => "blue",
            TileColor::Yellow => "yellow",
            TileColor::Red => "red",
            TileColor::Black => "black",
            TileColor::White => "white",
        }
    }
}

/// Where tiles are drafted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    /// Factory display by index (0-based)
    Factory(u8),
    /// The shared center pool
    Center,
}

/// Where drafted tiles are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dest {
    /// Staging row by index (0-based, capacity index + 1)
    Row(u8),
    /// Straight to the penalty row
    Floor,
}

/// A drafting move: take every tile of one color from one source and place
/// the tiles on one destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub source: Source,
    pub color: TileColor,
    pub dest: Dest,
}

impl Move {
    pub fn new(source: Source, color: TileColor, dest: Dest) -> Self {
        Self {
            source,
            color,
            dest,
        }
    }

    /// Canonical textual identity, e.g. `f2-red-r3` or `c-blue-floor`.
    ///
    /// Used for display and as the final ranking tie-break, so it must be
    /// unique per distinct move.
    pub fn notation(&self) -> String {
        let src = match self.source {
            Source::Factory(i) => format!("f{}", i),
            Source::Center => "c".to_string(),
        };
        let dst = match self.dest {
            Dest::Row(r) => format!("r{}", r),
            Dest::Floor => "floor".to_string(),
        };
        format!("{}-{}-{}", src, self.color.name(), dst)
    }
}
