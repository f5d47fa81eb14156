//! Penalty-risk family: the move sends tiles (or the starter marker) onto
//! the penalty row. Urgency scales with the points that will be lost at
//! round end. This family flags a liability; the assessor subtracts its
//! contribution.

use crate::{tiles_taken, PatternKind, PatternMatch, Urgency};
use mosaic_core::{Dest, Move, PlayerBoard, Position, Source, FLOOR_CAPACITY, FLOOR_PENALTIES};

fn penalty_for_slots(used: usize) -> i32 {
    FLOOR_PENALTIES[..used.min(FLOOR_CAPACITY)].iter().sum()
}

pub(crate) fn detect(pos: &Position, mv: Move) -> Option<PatternMatch> {
    let board = &pos.players[pos.to_move];
    let taken = tiles_taken(pos, mv);

    let overflow = match mv.dest {
        Dest::Floor => taken,
        Dest::Row(r) => {
            let r = r as usize;
            if !board.can_stage(r, mv.color) {
                return None;
            }
            let space = u32::from(PlayerBoard::row_capacity(r) - board.staging[r].count);
            taken.saturating_sub(space)
        }
    };
    let marker = u32::from(mv.source == Source::Center && pos.center_has_marker);
    let added = (overflow + marker) as usize;
    if added == 0 {
        return None;
    }

    let before = board.floor_slots();
    let lost = penalty_for_slots(before + added) - penalty_for_slots(before);
    if lost == 0 {
        return None;
    }

    let urgency = match lost {
        1 => Urgency::Low,
        2 => Urgency::Medium,
        3..=4 => Urgency::High,
        _ => Urgency::Critical,
    };

    Some(PatternMatch {
        kind: PatternKind::PenaltyRisk,
        urgency,
        // the loss is certain once the tiles land on the row
        confidence: 1.0,
        rationale: format!(
            "sends {} item(s) to the penalty row for -{} point(s)",
            added, lost
        ),
        mv,
    })
}

#[cfg(test)]
mod tests {
    use crate::{detect, PatternKind, Urgency};
    use mosaic_core::{Dest, Move, Position, Source, TileColor};

    fn penalty_match(pos: &Position, mv: Move) -> Option<crate::PatternMatch> {
        detect(pos, mv)
            .into_iter()
            .find(|m| m.kind == PatternKind::PenaltyRisk)
    }

    fn pos_with_factory(tiles: Vec<TileColor>) -> Position {
        let mut pos = Position::empty();
        for t in &tiles {
            pos.bag[t.idx()] -= 1;
        }
        pos.factories[0] = tiles;
        pos
    }

    #[test]
    fn clean_staging_has_no_penalty_risk() {
        let pos = pos_with_factory(vec![TileColor::Blue, TileColor::Red]);
        pos.validate().expect("fixture must validate");
        let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Row(2));
        assert!(penalty_match(&pos, mv).is_none());
    }

    #[test]
    fn floor_dump_urgency_tracks_points_lost() {
        let pos = pos_with_factory(vec![TileColor::Blue]);
        let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Floor);
        let m = penalty_match(&pos, mv).expect("one tile, one point");
        assert_eq!(m.urgency, Urgency::Low);

        let pos = pos_with_factory(vec![TileColor::Blue; 3]);
        let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Floor);
        let m = penalty_match(&pos, mv).expect("three tiles, four points");
        assert_eq!(m.urgency, Urgency::High);

        let pos = pos_with_factory(vec![TileColor::Blue; 4]);
        let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Floor);
        let m = penalty_match(&pos, mv).expect("four tiles, six points");
        assert_eq!(m.urgency, Urgency::Critical);
    }

    #[test]
    fn staging_overflow_counts_only_the_spill() {
        let pos = pos_with_factory(vec![TileColor::Blue; 3]);
        // row 1 holds two tiles; the third spills for -1
        let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Row(1));
        let m = penalty_match(&pos, mv).expect("one spilled tile");
        assert_eq!(m.urgency, Urgency::Low);
    }

    #[test]
    fn taking_the_marker_is_low_risk() {
        let mut pos = Position::empty();
        pos.center = vec![TileColor::Red];
        pos.bag[TileColor::Red.idx()] -= 1;
        pos.center_has_marker = true;
        pos.validate().expect("fixture must validate");

        let mv = Move::new(Source::Center, TileColor::Red, Dest::Row(2));
        let m = penalty_match(&pos, mv).expect("marker occupies a penalty slot");
        assert_eq!(m.urgency, Urgency::Low);
    }
}
