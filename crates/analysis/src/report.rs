//! Assessment report storage.
//!
//! The persistence boundary: a ranked batch plus enough position identity
//! to match it back up later. Storage failing is never fatal to an
//! assessment; callers decide whether to care.

use crate::assess::MoveQualityResult;
use mosaic_core::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Canonical hash of the assessed position, as a hex string.
    pub position: String,
    pub round: u32,
    pub to_move: usize,
    pub results: Vec<MoveQualityResult>,
}

impl AssessmentReport {
    pub fn new(pos: &Position, results: Vec<MoveQualityResult>) -> Self {
        Self {
            position: format!("{:016x}", mosaic_core::position_hash(pos)),
            round: pos.round,
            to_move: pos.to_move,
            results,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a previously saved report.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Plain-text ranked listing for terminal output.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Assessment of position {} (round {}, player {} to move)\n",
            self.position, self.round, self.to_move
        ));
        out.push_str(&format!("{} legal moves\n\n", self.results.len()));
        for r in &self.results {
            out.push_str(&format!(
                "{:>3}. {:<16} {:>5.1}  {:<10} {}\n",
                r.rank + 1,
                r.notation,
                r.score,
                r.tier.label(),
                r.explanation
            ));
        }
        out
    }
}
