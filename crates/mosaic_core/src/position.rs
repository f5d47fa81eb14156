use crate::board::{wall_column, PlayerBoard, StagingRow, FLOOR_CAPACITY, NUM_ROWS};
use crate::types::{Dest, Move, Source, TileColor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of factory displays in the two-player game.
pub const NUM_FACTORIES: usize = 5;
/// Tiles per factory display.
pub const FACTORY_CAPACITY: usize = 4;
/// Tiles of each color in the game.
pub const TILES_PER_COLOR: u32 = 20;

/// Final (or running) scores of both players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScores {
    pub scores: [i32; 2],
}

/// Structural violations of the position invariants. Assessment rejects the
/// position outright when any of these hold.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("expected {NUM_FACTORIES} factories, found {0}")]
    FactoryCount(usize),
    #[error("factory {index} holds {count} tiles (capacity {FACTORY_CAPACITY})")]
    FactoryOverflow { index: usize, count: usize },
    #[error("player {player} staging row {row} is malformed")]
    StagingRow { player: usize, row: usize },
    #[error("player {player} staging row {row} holds a color already on the grid")]
    StagingConflict { player: usize, row: usize },
    #[error("player {player} penalty row exceeds {FLOOR_CAPACITY} slots")]
    FloorOverflow { player: usize },
    #[error("player {player} has negative score {score}")]
    NegativeScore { player: usize, score: i32 },
    #[error("player to move must be 0 or 1, got {0}")]
    PlayerIndex(usize),
    #[error("round number must be at least 1")]
    RoundZero,
    #[error("tile conservation violated for {color:?}: counted {counted}, expected {TILES_PER_COLOR}")]
    Conservation { color: TileColor, counted: u32 },
}

/// Complete immutable game state: factories, center pool, supply bag,
/// discard, both player boards, and turn/round bookkeeping.
///
/// The struct is plain data; all mutation goes through [`Position::apply`]
/// (which clones) so callers can treat positions as values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Ordered factory displays, each a multiset of up to 4 tiles
    pub factories: Vec<Vec<TileColor>>,
    /// Shared center pool
    pub center: Vec<TileColor>,
    /// Whether the round-starter marker still sits in the center
    pub center_has_marker: bool,
    /// Supply bag, tile counts per color
    pub bag: [u8; 5],
    /// Discard pile, tile counts per color
    pub discard: [u8; 5],
    pub players: [PlayerBoard; 2],
    /// Player to move (0 or 1)
    pub to_move: usize,
    /// Round number, starting at 1
    pub round: u32,
    pub game_over: bool,
}

impl Position {
    /// A fresh game: full bag minus the deterministically drawn first-round
    /// factory fill, marker in the center, player 0 to move.
    pub fn startpos() -> Self {
        let mut p = Position {
            factories: vec![Vec::with_capacity(FACTORY_CAPACITY); NUM_FACTORIES],
            center: Vec::new(),
            center_has_marker: true,
            bag: [TILES_PER_COLOR as u8; 5],
            discard: [0; 5],
            players: [PlayerBoard::new(), PlayerBoard::new()],
            to_move: 0,
            round: 1,
            game_over: false,
        };
        p.fill_factories();
        p
    }

    /// An empty position shell (no tiles dealt). Useful for constructing
    /// specific test scenarios; callers must keep the bag consistent.
    pub fn empty() -> Self {
        Position {
            factories: vec![Vec::new(); NUM_FACTORIES],
            center: Vec::new(),
            center_has_marker: false,
            bag: [TILES_PER_COLOR as u8; 5],
            discard: [0; 5],
            players: [PlayerBoard::new(), PlayerBoard::new()],
            to_move: 0,
            round: 1,
            game_over: false,
        }
    }

    /// Tiles not yet locked onto either grid: bag, discard, factories,
    /// center, staging rows, and penalty rows. Equal to 100 minus the tiles
    /// placed on grids, so it only shrinks at round resolution. Drives
    /// phase classification.
    pub fn remaining_supply(&self) -> u32 {
        let loose: u32 = self.factories.iter().map(|f| f.len() as u32).sum::<u32>()
            + self.center.len() as u32;
        let counts: u32 = self.bag.iter().map(|&c| c as u32).sum::<u32>()
            + self.discard.iter().map(|&c| c as u32).sum::<u32>();
        let held: u32 = self
            .players
            .iter()
            .map(|b| {
                b.staging.iter().map(|sr| sr.count as u32).sum::<u32>() + b.floor.len() as u32
            })
            .sum();
        loose + counts + held
    }

    /// Whether the drafting phase of the current round still has tiles.
    pub fn draft_tiles_remaining(&self) -> bool {
        !self.center.is_empty() || self.factories.iter().any(|f| !f.is_empty())
    }

    /// Current scores; final scores once `game_over` is set.
    pub fn terminal_score(&self) -> PlayerScores {
        PlayerScores {
            scores: [self.players[0].score, self.players[1].score],
        }
    }

    /// Whether `mv` is legal in this position.
    pub fn is_legal(&self, mv: Move) -> bool {
        if self.game_over {
            return false;
        }
        let available = match mv.source {
            Source::Factory(i) => self
                .factories
                .get(i as usize)
                .map_or(false, |f| f.contains(&mv.color)),
            Source::Center => self.center.contains(&mv.color),
        };
        if !available {
            return false;
        }
        match mv.dest {
            Dest::Row(r) => self.players[self.to_move].can_stage(r as usize, mv.color),
            Dest::Floor => true,
        }
    }

    /// Apply a legal move, returning the resulting position. Resolves the
    /// round (grid tiling, penalties, refill) when the draft empties.
    pub fn apply(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.apply_mut(mv);
        next
    }

    fn apply_mut(&mut self, mv: Move) {
        let mover = self.to_move;
        let mut taken: u8 = 0;

        match mv.source {
            Source::Factory(i) => {
                let tiles = std::mem::take(&mut self.factories[i as usize]);
                for t in tiles {
                    if t == mv.color {
                        taken += 1;
                    } else {
                        self.center.push(t);
                    }
                }
            }
            Source::Center => {
                let mut rest = Vec::with_capacity(self.center.len());
                for &t in &self.center {
                    if t == mv.color {
                        taken += 1;
                    } else {
                        rest.push(t);
                    }
                }
                self.center = rest;
                if self.center_has_marker {
                    self.center_has_marker = false;
                    self.players[mover].has_marker = true;
                }
            }
        }

        match mv.dest {
            Dest::Row(r) => {
                let r = r as usize;
                let cap = PlayerBoard::row_capacity(r);
                let row = &mut self.players[mover].staging[r];
                if row.color.is_none() {
                    row.color = Some(mv.color);
                }
                let placed = taken.min(cap - row.count);
                row.count += placed;
                let overflow = taken - placed;
                Self::drop_to_floor(&mut self.players[mover], &mut self.discard, mv.color, overflow);
            }
            Dest::Floor => {
                Self::drop_to_floor(&mut self.players[mover], &mut self.discard, mv.color, taken);
            }
        }

        self.to_move = 1 - self.to_move;

        if !self.draft_tiles_remaining() {
            self.resolve_round();
        }
    }

    fn drop_to_floor(board: &mut PlayerBoard, discard: &mut [u8; 5], color: TileColor, n: u8) {
        for _ in 0..n {
            if board.floor_slots() < FLOOR_CAPACITY {
                board.floor.push(color);
            } else {
                discard[color.idx()] += 1;
            }
        }
    }

    /// End-of-round resolution: tile the grids, apply penalties, hand the
    /// lead to the marker holder, then either finish the game or refill.
    fn resolve_round(&mut self) {
        for p in 0..2 {
            for r in 0..NUM_ROWS {
                let sr = self.players[p].staging[r];
                if let Some(color) = sr.color {
                    if sr.count == PlayerBoard::row_capacity(r) {
                        let col = wall_column(r, color);
                        let gained = self.players[p].placement_score(r, col);
                        self.players[p].wall[r][col] = true;
                        self.players[p].score += gained;
                        // one tile to the grid, the rest to the discard
                        self.discard[color.idx()] += r as u8;
                        self.players[p].staging[r] = StagingRow::default();
                    }
                }
            }

            let penalty = self.players[p].floor_penalty();
            self.players[p].score = (self.players[p].score - penalty).max(0);
            for t in std::mem::take(&mut self.players[p].floor) {
                self.discard[t.idx()] += 1;
            }
        }

        if self.players[0].has_marker {
            self.to_move = 0;
        } else if self.players[1].has_marker {
            self.to_move = 1;
        }
        for board in &mut self.players {
            board.has_marker = false;
        }

        let finished = self.players.iter().any(|b| b.completed_rows() > 0);
        if finished {
            for board in &mut self.players {
                board.score += board.end_bonus();
            }
            self.game_over = true;
        } else {
            self.round += 1;
            self.center_has_marker = true;
            self.fill_factories();
        }
    }

    fn fill_factories(&mut self) {
        for i in 0..NUM_FACTORIES {
            while self.factories[i].len() < FACTORY_CAPACITY {
                match self.draw_from_bag() {
                    Some(t) => self.factories[i].push(t),
                    None => return,
                }
            }
        }
    }

    /// Canonical deterministic draw: the most plentiful color first, ties by
    /// color index. Refills the bag from the discard when empty.
    fn draw_from_bag(&mut self) -> Option<TileColor> {
        if self.bag.iter().all(|&c| c == 0) {
            self.bag = self.discard;
            self.discard = [0; 5];
        }
        let mut best: Option<usize> = None;
        for i in 0..5 {
            if self.bag[i] > 0 && best.map_or(true, |b| self.bag[i] > self.bag[b]) {
                best = Some(i);
            }
        }
        let i = best?;
        self.bag[i] -= 1;
        Some(TileColor::ALL[i])
    }

    /// Validate all structural invariants. Malformed positions are rejected
    /// before any assessment is attempted.
    pub fn validate(&self) -> Result<(), PositionError> {
        if self.to_move > 1 {
            return Err(PositionError::PlayerIndex(self.to_move));
        }
        if self.round == 0 {
            return Err(PositionError::RoundZero);
        }
        if self.factories.len() != NUM_FACTORIES {
            return Err(PositionError::FactoryCount(self.factories.len()));
        }
        for (index, f) in self.factories.iter().enumerate() {
            if f.len() > FACTORY_CAPACITY {
                return Err(PositionError::FactoryOverflow {
                    index,
                    count: f.len(),
                });
            }
        }

        for (player, board) in self.players.iter().enumerate() {
            for (row, sr) in board.staging.iter().enumerate() {
                let bad_count = sr.count > PlayerBoard::row_capacity(row)
                    || (sr.count == 0) != sr.color.is_none();
                if bad_count {
                    return Err(PositionError::StagingRow { player, row });
                }
                if let Some(color) = sr.color {
                    if board.wall[row][wall_column(row, color)] {
                        return Err(PositionError::StagingConflict { player, row });
                    }
                }
            }
            if board.floor_slots() > FLOOR_CAPACITY {
                return Err(PositionError::FloorOverflow { player });
            }
            if board.score < 0 {
                return Err(PositionError::NegativeScore {
                    player,
                    score: board.score,
                });
            }
        }

        for color in TileColor::ALL {
            let i = color.idx();
            let mut counted = self.bag[i] as u32 + self.discard[i] as u32;
            counted += self
                .factories
                .iter()
                .flatten()
                .filter(|&&t| t == color)
                .count() as u32;
            counted += self.center.iter().filter(|&&t| t == color).count() as u32;
            for board in &self.players {
                counted += board
                    .staging
                    .iter()
                    .filter(|sr| sr.color == Some(color))
                    .map(|sr| sr.count as u32)
                    .sum::<u32>();
                counted += board.floor.iter().filter(|&&t| t == color).count() as u32;
                counted += board.wall_count(color);
            }
            if counted != TILES_PER_COLOR {
                return Err(PositionError::Conservation { color, counted });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
