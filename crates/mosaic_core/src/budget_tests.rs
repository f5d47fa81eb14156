use super::*;
use std::thread;
use std::time::Duration;

#[test]
fn depth_only_budget_never_stops() {
    let budget = EvalBudget::depth(5);
    assert_eq!(budget.depth, 5);
    assert!(budget.move_time.is_none());
    assert!(!budget.should_stop());
}

#[test]
fn zero_budget_is_exhausted_immediately() {
    let budget = EvalBudget::zero();
    budget.start();
    assert!(budget.is_exhausted());
}

#[test]
fn time_control_expires() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));
    tc.start();
    assert!(!tc.is_stopped());

    thread::sleep(Duration::from_millis(20));
    tc.check_time();
    assert!(tc.is_stopped());
}

#[test]
fn time_control_without_limit_runs_on() {
    let tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    tc.check_time();
    assert!(!tc.is_stopped());
}

#[test]
fn manual_stop_latches() {
    let tc = TimeControl::new(None);
    tc.start();
    assert!(!tc.is_stopped());
    tc.stop();
    assert!(tc.is_stopped());
}
