//! Pattern Detector
//!
//! Scans a (position, move) pair for tactical and strategic motifs from a
//! fixed, closed taxonomy:
//! - *blocking*: denying an opponent's needed color
//! - *scoring-completion*: grid row/column/color-set completion
//! - *penalty-risk*: staging overflow into the penalty row
//! - *positional-control*: factory/pool dominance and late-round counting
//!
//! Each family is a pure, lookahead-free predicate returning at most one
//! match with a deterministic urgency formula. Families never inspect each
//! other's output; overlap resolution belongs to the assessor. A detector
//! that cannot compute (malformed input) reports no match; it never panics
//! or errors to the caller.

mod blocking;
mod completion;
mod control;
mod penalty;

use mosaic_core::{Dest, Move, Position, Source, NUM_ROWS};
use serde::{Deserialize, Serialize};

/// How pressing a detected motif is. Drives the bounded score bonus and
/// search move ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// Scale factor applied to a family's bonus cap.
    pub fn weight(self) -> f64 {
        match self {
            Urgency::Low => 0.25,
            Urgency::Medium => 0.5,
            Urgency::High => 0.75,
            Urgency::Critical => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }
}

/// The closed set of pattern families. Each variant carries its own
/// detection function; extension happens by adding a variant, not a
/// subclass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    Blocking,
    ScoringCompletion,
    PenaltyRisk,
    PositionalControl,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Blocking,
        PatternKind::ScoringCompletion,
        PatternKind::PenaltyRisk,
        PatternKind::PositionalControl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PatternKind::Blocking => "blocking",
            PatternKind::ScoringCompletion => "scoring-completion",
            PatternKind::PenaltyRisk => "penalty-risk",
            PatternKind::PositionalControl => "positional-control",
        }
    }

    /// Whether the family flags a liability rather than an opportunity.
    /// The assessor subtracts these contributions instead of adding them.
    pub fn is_negative(self) -> bool {
        matches!(self, PatternKind::PenaltyRisk)
    }

    fn run(self, pos: &Position, mv: Move) -> Option<PatternMatch> {
        match self {
            PatternKind::Blocking => blocking::detect(pos, mv),
            PatternKind::ScoringCompletion => completion::detect(pos, mv),
            PatternKind::PenaltyRisk => penalty::detect(pos, mv),
            PatternKind::PositionalControl => control::detect(pos, mv),
        }
    }
}

/// A detected motif for one (position, move) pair. Produced fresh per pair,
/// never mutated, discarded once the assessor has consumed it.
#[derive(Clone, Debug, Serialize)]
pub struct PatternMatch {
    pub kind: PatternKind,
    pub urgency: Urgency,
    /// Detector confidence in [0, 1]
    pub confidence: f64,
    /// Short human-readable justification, quoted in explanations
    pub rationale: String,
    /// The move this match is attached to
    pub mv: Move,
}

fn input_ok(pos: &Position, mv: Move) -> bool {
    if pos.to_move > 1 || pos.game_over {
        return false;
    }
    let source_ok = match mv.source {
        Source::Factory(i) => (i as usize) < pos.factories.len(),
        Source::Center => true,
    };
    let dest_ok = match mv.dest {
        Dest::Row(r) => (r as usize) < NUM_ROWS,
        Dest::Floor => true,
    };
    source_ok && dest_ok
}

/// Tiles of `color` a player could still draft this round, before the move.
pub(crate) fn draft_supply(pos: &Position, color: mosaic_core::TileColor) -> u32 {
    pos.factories
        .iter()
        .flatten()
        .chain(pos.center.iter())
        .filter(|&&t| t == color)
        .count() as u32
}

/// Tiles of the move's color the mover picks up.
pub(crate) fn tiles_taken(pos: &Position, mv: Move) -> u32 {
    match mv.source {
        Source::Factory(i) => pos
            .factories
            .get(i as usize)
            .map_or(0, |f| f.iter().filter(|&&t| t == mv.color).count() as u32),
        Source::Center => pos.center.iter().filter(|&&t| t == mv.color).count() as u32,
    }
}

/// Run every pattern family over the (position, move) pair.
///
/// Malformed or inapplicable input yields an empty vector; absence of a
/// match means "no pattern found", not an error.
pub fn detect(pos: &Position, mv: Move) -> Vec<PatternMatch> {
    if !input_ok(pos, mv) || tiles_taken(pos, mv) == 0 {
        return Vec::new();
    }
    PatternKind::ALL
        .iter()
        .filter_map(|kind| kind.run(pos, mv))
        .collect()
}

/// Cheap ordering heuristic for search: the strongest positive-family
/// urgency weight attached to the move, minus the penalty-risk weight.
pub fn urgency_hint(pos: &Position, mv: Move) -> f64 {
    let mut best = 0.0f64;
    let mut liability = 0.0f64;
    for m in detect(pos, mv) {
        if m.kind.is_negative() {
            liability += m.urgency.weight();
        } else {
            best = best.max(m.urgency.weight());
        }
    }
    best - liability
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
