//! Game-phase state machine.
//!
//! Classification is a pure function of the round counter and the remaining
//! tile supply, so two structurally equal positions always land in the same
//! phase. The supply only shrinks when tiles lock onto a grid, which makes
//! it a direct measure of how close the game is to a completed grid row.

use mosaic_core::Position;
use serde::{Deserialize, Serialize};

/// Rounds at or beyond this are late-phase regardless of supply.
const LATE_ROUND: u32 = 5;
/// Rounds at or beyond this are one round from the end in practice.
const TERMINAL_ROUND: u32 = 7;
/// Supply thresholds: 100 tiles minus tiles locked onto grids.
const LATE_SUPPLY: u32 = 78;
const TERMINAL_SUPPLY: u32 = 68;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Early,
    Mid,
    Late,
    TerminalAdjacent,
}

impl Phase {
    pub fn classify(pos: &Position) -> Phase {
        if pos.game_over {
            return Phase::TerminalAdjacent;
        }
        let supply = pos.remaining_supply();
        if pos.round >= TERMINAL_ROUND || supply <= TERMINAL_SUPPLY {
            Phase::TerminalAdjacent
        } else if pos.round >= LATE_ROUND || supply <= LATE_SUPPLY {
            Phase::Late
        } else if pos.round <= 2 {
            Phase::Early
        } else {
            Phase::Mid
        }
    }

    /// Whether deep sequence planning should run in this phase.
    pub fn is_late(self) -> bool {
        matches!(self, Phase::Late | Phase::TerminalAdjacent)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Early => "early",
            Phase::Mid => "mid",
            Phase::Late => "late",
            Phase::TerminalAdjacent => "terminal-adjacent",
        }
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod phase_tests;
