//! Game-phase classification and late-game sequence planning.
//!
//! The planner only runs in late phases, where the remaining tile supply is
//! small enough that a bounded-branching forward search over concrete move
//! sequences is both tractable and worth the extra wall-clock cost.

pub mod phase;
pub mod planner;

pub use phase::Phase;
pub use planner::{plan_sequence, EndgamePlan, DEFAULT_HORIZON};
