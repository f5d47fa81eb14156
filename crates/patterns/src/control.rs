//! Positional-control family: dominance over the draft supply of one color
//! plus late-round tile counting. Taking the whole remaining supply of a
//! color late in the round is the strongest form.

use crate::{tiles_taken, PatternKind, PatternMatch, Urgency};
use mosaic_core::{Move, Position};

pub(crate) fn detect(pos: &Position, mv: Move) -> Option<PatternMatch> {
    let taken = tiles_taken(pos, mv);
    let supply = crate::draft_supply(pos, mv.color);
    if taken == 0 || supply == 0 {
        return None;
    }
    let frac = taken as f64 / supply as f64;

    if taken < 3 && frac < 0.5 {
        return None;
    }

    let draft_total: u32 = pos.factories.iter().map(|f| f.len() as u32).sum::<u32>()
        + pos.center.len() as u32;
    let draft_after = draft_total - taken;

    let urgency = if frac >= 1.0 && draft_after <= 4 {
        // final say over the color with the round nearly drafted out
        Urgency::Critical
    } else if frac >= 1.0 {
        Urgency::High
    } else if frac >= 0.5 {
        Urgency::Medium
    } else {
        Urgency::Low
    };

    Some(PatternMatch {
        kind: PatternKind::PositionalControl,
        urgency,
        confidence: frac.clamp(0.0, 1.0),
        rationale: format!(
            "takes {} of {} remaining {} tile(s)",
            taken,
            supply,
            mv.color.name()
        ),
        mv,
    })
}

#[cfg(test)]
mod tests {
    use crate::{detect, PatternKind, Urgency};
    use mosaic_core::{Dest, Move, Position, Source, TileColor};

    fn control_match(pos: &Position, mv: Move) -> Option<crate::PatternMatch> {
        detect(pos, mv)
            .into_iter()
            .find(|m| m.kind == PatternKind::PositionalControl)
    }

    #[test]
    fn small_share_is_not_control() {
        let mut pos = Position::empty();
        pos.factories[0] = vec![TileColor::Blue];
        pos.factories[1] = vec![TileColor::Blue; 4];
        pos.bag[TileColor::Blue.idx()] -= 5;
        pos.validate().expect("fixture must validate");

        let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Row(4));
        assert!(control_match(&pos, mv).is_none());
    }

    #[test]
    fn taking_the_last_tiles_late_is_critical() {
        let mut pos = Position::empty();
        pos.factories[0] = vec![TileColor::Blue, TileColor::Blue, TileColor::Red];
        pos.bag[TileColor::Blue.idx()] -= 2;
        pos.bag[TileColor::Red.idx()] -= 1;
        pos.validate().expect("fixture must validate");

        let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Row(4));
        let m = control_match(&pos, mv).expect("full supply taken late");
        assert_eq!(m.urgency, Urgency::Critical);
    }

    #[test]
    fn majority_share_is_medium() {
        let mut pos = Position::empty();
        pos.factories[0] = vec![TileColor::Blue; 3];
        pos.factories[1] = vec![TileColor::Blue, TileColor::Blue];
        // keep the round young so the late-round bump does not apply
        pos.factories[2] = vec![TileColor::Red; 4];
        pos.factories[3] = vec![TileColor::Yellow; 4];
        pos.bag[TileColor::Blue.idx()] -= 5;
        pos.bag[TileColor::Red.idx()] -= 4;
        pos.bag[TileColor::Yellow.idx()] -= 4;
        pos.validate().expect("fixture must validate");

        let mv = Move::new(Source::Factory(0), TileColor::Blue, Dest::Row(4));
        let m = control_match(&pos, mv).expect("3 of 5 tiles taken");
        assert_eq!(m.urgency, Urgency::Medium);
    }
}
