//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Processing time**: SPT, LPT
//! - **Remaining work**: SRPT, LRPT
//! - **Timing**: EST
//!
//! # Score Convention
//! All rules return lower scores for higher priority tasks.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Task;

// ======================== Processing-time rules ========================

/// Shortest Processing Time.
///
/// Prioritizes the operation with the shortest duration.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, task: Task, context: &DispatchContext<'_>) -> RuleScore {
        context.instance().duration_of(task) as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Longest Processing Time.
///
/// Prioritizes the operation with the longest duration.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl DispatchingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, task: Task, context: &DispatchContext<'_>) -> RuleScore {
        -(context.instance().duration_of(task) as f64)
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

// ======================== Remaining-work rules ========================

/// Shortest Remaining Processing Time.
///
/// Prioritizes the job closest to completion: the sum of the durations of
/// the task and every later operation of its job.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl DispatchingRule for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, task: Task, context: &DispatchContext<'_>) -> RuleScore {
        context.instance().remaining_duration(task) as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}

/// Longest Remaining Processing Time.
///
/// Prioritizes the job with the most work left. Keeps long jobs from
/// dominating the makespan at the end of the schedule.
#[derive(Debug, Clone, Copy)]
pub struct Lrpt;

impl DispatchingRule for Lrpt {
    fn name(&self) -> &'static str {
        "LRPT"
    }

    fn evaluate(&self, task: Task, context: &DispatchContext<'_>) -> RuleScore {
        -(context.instance().remaining_duration(task) as f64)
    }

    fn description(&self) -> &'static str {
        "Longest Remaining Processing Time"
    }
}

// ======================== Timing rules ========================

/// Earliest Start Time.
///
/// Prioritizes tasks that can start soonest: max(job free, machine free).
/// Used as the primary criterion of the EST-gated rules.
#[derive(Debug, Clone, Copy)]
pub struct Est;

impl DispatchingRule for Est {
    fn name(&self) -> &'static str {
        "EST"
    }

    fn evaluate(&self, task: Task, context: &DispatchContext<'_>) -> RuleScore {
        context.earliest_start(task) as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Start Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Instance;

    fn sample() -> Instance {
        // Job 0: 1 then 8 (remaining 9); job 1: 4 then 1 (remaining 5).
        Instance::from_pairs("sample", 2, &[&[(0, 1), (1, 8)], &[(1, 4), (0, 1)]])
    }

    #[test]
    fn test_spt() {
        let inst = sample();
        let ctx = DispatchContext::new(&inst);
        assert!(Spt.evaluate(Task::new(0, 0), &ctx) < Spt.evaluate(Task::new(1, 0), &ctx));
    }

    #[test]
    fn test_lpt() {
        let inst = sample();
        let ctx = DispatchContext::new(&inst);
        assert!(Lpt.evaluate(Task::new(1, 0), &ctx) < Lpt.evaluate(Task::new(0, 0), &ctx));
    }

    #[test]
    fn test_srpt() {
        let inst = sample();
        let ctx = DispatchContext::new(&inst);
        assert!(Srpt.evaluate(Task::new(1, 0), &ctx) < Srpt.evaluate(Task::new(0, 0), &ctx));
        assert!((Srpt.evaluate(Task::new(0, 1), &ctx) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_lrpt() {
        let inst = sample();
        let ctx = DispatchContext::new(&inst);
        assert!(Lrpt.evaluate(Task::new(0, 0), &ctx) < Lrpt.evaluate(Task::new(1, 0), &ctx));
    }

    #[test]
    fn test_est() {
        let inst = sample();
        let ctx = DispatchContext::new(&inst).with_machine_free(0, 7);
        // (0,0) waits for machine 0 until 7; (1,0) can start now.
        assert!((Est.evaluate(Task::new(0, 0), &ctx) - 7.0).abs() < 1e-10);
        assert!(Est.evaluate(Task::new(1, 0), &ctx) < Est.evaluate(Task::new(0, 0), &ctx));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Spt.description(), "Shortest Processing Time");
        assert_eq!(Est.name(), "EST");
    }
}
