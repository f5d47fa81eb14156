//! Blocking family: denying an opponent a color they are committed to.
//!
//! Urgency scales with the number of opponent completion paths the move
//! removes: a committed staging row whose remaining need can no longer be
//! met from the draft supply after this move counts as one removed path.

use crate::{tiles_taken, PatternKind, PatternMatch, Urgency};
use mosaic_core::{Move, PlayerBoard, Position, NUM_ROWS};

pub(crate) fn detect(pos: &Position, mv: Move) -> Option<PatternMatch> {
    let opponent = &pos.players[1 - pos.to_move];
    let taken = tiles_taken(pos, mv);
    let supply = crate::draft_supply(pos, mv.color);
    if taken == 0 || supply == 0 {
        return None;
    }
    let after = supply - taken;

    let mut committed = 0u32;
    let mut denied = 0u32;
    for r in 0..NUM_ROWS {
        let sr = opponent.staging[r];
        if sr.color != Some(mv.color) {
            continue;
        }
        committed += 1;
        let need = u32::from(PlayerBoard::row_capacity(r) - sr.count);
        if need > 0 && need <= supply && need > after {
            denied += 1;
        }
    }

    if denied > 0 {
        let urgency = match denied {
            1 => Urgency::Medium,
            2 => Urgency::High,
            _ => Urgency::Critical,
        };
        // a bigger share of the supply taken means the denial is harder to
        // recover from
        let confidence = (taken as f64 / supply as f64).clamp(0.0, 1.0);
        return Some(PatternMatch {
            kind: PatternKind::Blocking,
            urgency,
            confidence,
            rationale: format!(
                "denies {} of the opponent's {} committed path(s) for {}",
                denied,
                committed,
                mv.color.name()
            ),
            mv,
        });
    }

    // no outright denial, but starving a committed color to near-zero supply
    if committed > 0 && after < 2 {
        return Some(PatternMatch {
            kind: PatternKind::Blocking,
            urgency: Urgency::Low,
            confidence: 0.4,
            rationale: format!(
                "leaves only {} {} tile(s) for the opponent's committed row",
                after,
                mv.color.name()
            ),
            mv,
        });
    }

    None
}
