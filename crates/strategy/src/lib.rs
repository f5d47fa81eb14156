//! Game-theoretic move analysis.
//!
//! Builds a small payoff matrix over both players' top candidate moves,
//! looks for a pure-strategy equilibrium by iterated best response, and
//! maintains a lightweight opponent model whose traits re-weight a move's
//! strategic value inside a bounded band. The payoff function is injected
//! by the caller so the evaluation stack stays out of this crate.

pub mod analyzer;
pub mod equilibrium;
pub mod opponent;

pub use analyzer::{StrategicAnalyzer, WEIGHT_MAX, WEIGHT_MIN};
pub use equilibrium::{
    find_equilibrium, EquilibriumOutcome, EquilibriumResult, PayoffMatrix, MAX_ITERATIONS, TOP_N,
};
pub use opponent::OpponentModel;
