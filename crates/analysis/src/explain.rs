//! Template-generated explanations.
//!
//! Each explanation cites the two strongest contributing signals for the
//! move, then appends a disagreement warning when the evaluators split
//! beyond the configured threshold. Pattern signals reuse the detector's
//! own rationale text so the prose names concrete board facts.

use crate::config::AssessConfig;
use crate::consensus::ConsensusResult;
use crate::score::ScoreBreakdown;
use patterns::{PatternKind, PatternMatch};

/// Explanation used when no component produced a usable signal.
pub fn blackout() -> String {
    "insufficient information: no evaluator or pattern produced a signal within budget"
        .to_string()
}

pub fn explain(
    config: &AssessConfig,
    breakdown: &ScoreBreakdown,
    consensus: Option<&ConsensusResult>,
    matches: &[PatternMatch],
) -> String {
    let mut signals: Vec<(f64, String)> = Vec::new();

    for kind in PatternKind::ALL {
        let strongest = matches
            .iter()
            .filter(|m| m.kind == kind)
            .max_by(|a, b| {
                let wa = a.urgency.weight() * a.confidence;
                let wb = b.urgency.weight() * b.confidence;
                wa.partial_cmp(&wb).unwrap_or(std::cmp::Ordering::Equal)
            });
        if let Some(m) = strongest {
            let mut points = m.urgency.weight() * m.confidence * config.pattern_family_cap;
            if kind.is_negative() {
                points = -points;
            }
            signals.push((points, m.rationale.clone()));
        }
    }

    if let Some(c) = consensus {
        let text = if c.contributors.len() == 1 {
            format!(
                "{} projects {:+.1} points",
                c.contributors[0].label(),
                c.value
            )
        } else {
            format!(
                "consensus of {} engines projects {:+.1} points",
                c.contributors.len(),
                c.value
            )
        };
        signals.push((breakdown.consensus, text));
    }

    if breakdown.endgame != 0.0 {
        signals.push((
            breakdown.endgame,
            format!("endgame plan contributes {:+.1} points", breakdown.endgame),
        ));
    }

    if signals.is_empty() {
        return blackout();
    }

    signals.sort_by(|a, b| {
        b.0.abs()
            .partial_cmp(&a.0.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut text = match signals.len() {
        1 => signals[0].1.clone(),
        _ => format!("{}; {}", signals[0].1, signals[1].1),
    };

    if let Some(c) = consensus {
        if c.disagreement > config.disagreement_threshold {
            text.push_str(&format!(
                "; warning: evaluators disagree sharply (spread {:.0}% of the scale)",
                c.disagreement * 100.0
            ));
        }
    }

    text
}
