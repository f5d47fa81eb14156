//! Evaluation budgets and wall-clock control for move evaluators.
//!
//! Every evaluator must honor a hard wall-clock budget and degrade
//! gracefully: stop at its next natural boundary and return the best result
//! found so far, or `None` when the budget expired before any work was done.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Limits for a single evaluator invocation.
///
/// The time limit takes precedence over depth: when time runs out the
/// evaluator must return immediately with whatever it has.
#[derive(Debug, Clone)]
pub struct EvalBudget {
    /// Maximum search depth in plies (ignored by engines without depth)
    pub depth: u8,
    /// Maximum wall-clock time for this evaluation (None = unlimited)
    pub move_time: Option<Duration>,
    /// Time controller for checking if evaluation should stop
    pub time_control: TimeControl,
}

impl EvalBudget {
    /// Depth-only budget (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Depth plus wall-clock budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Wall-clock budget only (unbounded depth).
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// A budget that is already exhausted. Evaluators given this must
    /// report unavailability rather than doing any work.
    pub fn zero() -> Self {
        Self::depth_and_time(0, Duration::ZERO)
    }

    /// Whether evaluation should stop right now.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call when evaluation begins.
    pub fn start(&self) {
        self.time_control.start();
    }

    /// True when no work at all fits in this budget.
    pub fn is_exhausted(&self) -> bool {
        self.depth == 0 || self.move_time == Some(Duration::ZERO) || self.time_control.check_time()
    }
}

impl Default for EvalBudget {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Thread-safe stop flag plus clock, cheaply cloneable across evaluation
/// threads. `is_stopped()` is an atomic load, cheap enough to call on every
/// node; the actual clock read happens every `check_interval` nodes.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<std::sync::RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(std::sync::RwLock::new(None)),
            time_limit,
            check_interval: 256,
        }
    }

    /// Start the clock and clear the stop flag.
    pub fn start(&self) {
        if let Ok(mut start) = self.start_time.write() {
            *start = Some(Instant::now());
        }
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force evaluation to stop at its next boundary.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Read the clock and latch the stop flag if the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.time_limit {
            let started = self.start_time.read().map(|s| *s).unwrap_or(None);
            if let Some(start) = started {
                if start.elapsed() >= limit {
                    self.stop();
                    return true;
                }
            }
        }
        false
    }

    /// Whether the node counter has reached a clock-check boundary.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    /// Elapsed time since `start`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .map(|s| *s)
            .unwrap_or(None)
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod budget_tests;
