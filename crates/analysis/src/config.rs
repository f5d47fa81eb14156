//! Scoring calibration, loadable from TOML.
//!
//! The weights that fold consensus value, pattern bonuses, endgame plans
//! and disagreement into the final score are deliberately configurable;
//! the defaults are the calibration the tier-boundary tests pin down.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessConfig {
    /// Points available to the normalized consensus value.
    pub consensus_weight: f64,
    /// Bonus ceiling for a single pattern family.
    pub pattern_family_cap: f64,
    /// Bonus ceiling across all positive pattern families.
    pub pattern_total_cap: f64,
    /// Ceiling (either sign) for the endgame-plan contribution.
    pub endgame_cap: f64,
    /// Disagreement above this surfaces a warning and starts costing points.
    pub disagreement_threshold: f64,
    /// Points lost per unit of disagreement beyond the threshold.
    pub disagreement_penalty: f64,
    /// Divisor in the logistic squashing of raw point differentials.
    pub normalization_scale: f64,
    /// Alpha-beta depth per move.
    pub depth: u8,
    /// Per-move wall clock in milliseconds; None = depth-limited only.
    pub move_time_ms: Option<u64>,
    /// Endgame planning horizon in plies.
    pub horizon: u8,
    /// Base seed for simulation search (mixed with position/move hashes).
    pub base_seed: u64,
}

impl Default for AssessConfig {
    fn default() -> Self {
        Self {
            consensus_weight: 70.0,
            pattern_family_cap: 12.0,
            pattern_total_cap: 30.0,
            endgame_cap: 10.0,
            disagreement_threshold: 0.25,
            disagreement_penalty: 12.0,
            normalization_scale: 15.0,
            depth: 3,
            move_time_ms: Some(200),
            horizon: 4,
            base_seed: 0x6d6f_7361_6963,
        }
    }
}

impl AssessConfig {
    /// Loads calibration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: AssessConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.consensus_weight <= 0.0 || self.consensus_weight > 100.0 {
            return Err(ConfigError::Invalid(format!(
                "consensus_weight {} out of (0, 100]",
                self.consensus_weight
            )));
        }
        if self.pattern_family_cap < 0.0 || self.pattern_total_cap < self.pattern_family_cap {
            return Err(ConfigError::Invalid(
                "pattern caps must satisfy 0 <= family <= total".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.disagreement_threshold) {
            return Err(ConfigError::Invalid(format!(
                "disagreement_threshold {} out of [0, 1]",
                self.disagreement_threshold
            )));
        }
        if self.normalization_scale <= 0.0 {
            return Err(ConfigError::Invalid(
                "normalization_scale must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
