//! Move-quality assessment.
//!
//! Fuses the pattern detector, the three evaluation engines, the endgame
//! planner, and the strategic analyzer into one deterministic 0-100 score,
//! tier, and explanation per legal move. The assessor is the only component
//! that sees every other crate; everything below it stays independent.

pub mod assess;
pub mod cache;
pub mod config;
pub mod consensus;
pub mod explain;
pub mod report;
pub mod score;

pub use assess::{AssessError, Assessor, MoveQualityResult};
pub use cache::AnalysisCache;
pub use config::{AssessConfig, ConfigError};
pub use consensus::{combine, ConsensusResult};
pub use report::{AssessmentReport, ReportError};
pub use score::{score_components, ScoreBreakdown, Tier};
