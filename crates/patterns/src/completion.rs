//! Scoring-completion family: the move fills a staging row, guaranteeing a
//! grid placement at round end. Urgency rises with what the placement
//! finishes: a full grid row or color set outranks a column, which outranks
//! a plain high-value placement.

use crate::{tiles_taken, PatternKind, PatternMatch, Urgency};
use mosaic_core::{wall_column, Dest, Move, PlayerBoard, Position, NUM_ROWS};

pub(crate) fn detect(pos: &Position, mv: Move) -> Option<PatternMatch> {
    let row = match mv.dest {
        Dest::Row(r) => r as usize,
        Dest::Floor => return None,
    };
    let board = &pos.players[pos.to_move];
    if !board.can_stage(row, mv.color) {
        return None;
    }

    let taken = tiles_taken(pos, mv) as u8;
    let current = board.staging[row].count;
    if current + taken < PlayerBoard::row_capacity(row) {
        return None;
    }

    let col = wall_column(row, mv.color);
    let placement = board.placement_score(row, col);

    let row_filled = board.wall[row].iter().filter(|&&c| c).count();
    let col_filled = (0..NUM_ROWS).filter(|&r| board.wall[r][col]).count();
    let completes_row = row_filled == NUM_ROWS - 1;
    let completes_column = col_filled == NUM_ROWS - 1;
    let completes_color = board.wall_count(mv.color) as usize == NUM_ROWS - 1;

    let (urgency, what) = if completes_row {
        (Urgency::Critical, "completes a grid row")
    } else if completes_color {
        (Urgency::Critical, "completes a color set")
    } else if completes_column {
        (Urgency::High, "completes a grid column")
    } else if placement >= 5 {
        (Urgency::High, "secures a high-value placement")
    } else if placement >= 3 {
        (Urgency::Medium, "secures a connected placement")
    } else {
        (Urgency::Low, "secures a placement")
    };

    Some(PatternMatch {
        kind: PatternKind::ScoringCompletion,
        urgency,
        // round resolution is deterministic once the row is full
        confidence: 1.0,
        rationale: format!(
            "fills staging row {} and {} worth {} point(s)",
            row + 1,
            what,
            placement
        ),
        mv,
    })
}
