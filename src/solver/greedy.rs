//! Priority-rule list scheduling.
//!
//! # Algorithm
//!
//! 1. The dispatchable set starts with operation 0 of every job.
//! 2. The rule engine picks one dispatchable task.
//! 3. The task starts at max(job free, machine free); both trackers move
//!    to its end.
//! 4. The task leaves the set and its job successor, if any, is appended.
//!
//! The result is semi-active: no task can start earlier without changing
//! a machine order.
//!
//! # Complexity
//! O(n² · m) rule evaluations, n = jobs, m = machines.
//!
//! # Reference
//! Giffler & Thompson (1960), "Algorithms for Solving Production-Scheduling
//! Problems"

use tracing::debug;

use super::{Deadline, ExitCause, SolveResult, Solver};
use crate::dispatching::{DispatchContext, PriorityRule};
use crate::encoding::ResourceOrder;
use crate::models::{Instance, Schedule, Task};

/// Constructive solver driven by a [`PriorityRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedySolver {
    rule: PriorityRule,
}

impl GreedySolver {
    /// Creates a greedy solver for the given rule.
    pub fn new(rule: PriorityRule) -> Self {
        Self { rule }
    }

    /// The priority rule in use.
    pub fn rule(&self) -> PriorityRule {
        self.rule
    }

    /// Builds the machine orders and the matching schedule.
    pub fn construct<'a>(&self, instance: &'a Instance) -> (ResourceOrder<'a>, Schedule<'a>) {
        let engine = self.rule.engine();
        let num_tasks = instance.num_tasks();
        let mut context = DispatchContext::new(instance);
        let mut order = ResourceOrder::new(instance);
        let mut starts = vec![vec![0i64; num_tasks]; instance.num_jobs];

        let mut dispatchable: Vec<Task> = if num_tasks == 0 {
            Vec::new()
        } else {
            (0..instance.num_jobs).map(|j| Task::new(j, 0)).collect()
        };

        while let Some(task) = engine.select_best(&dispatchable, &context) {
            dispatchable.retain(|&t| t != task);
            starts[task.job][task.op] = context.commit(task);
            order.push(task);
            if task.op + 1 < num_tasks {
                dispatchable.push(Task::new(task.job, task.op + 1));
            }
        }

        (order, Schedule::new(instance, starts))
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> String {
        format!("greedy({})", self.rule)
    }

    fn solve<'a>(&self, instance: &'a Instance, _deadline: Deadline) -> SolveResult<'a> {
        let (_, schedule) = self.construct(instance);
        debug!(
            event = "greedy_built",
            rule = %self.rule,
            makespan = schedule.makespan(),
        );
        SolveResult::new(schedule, ExitCause::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use crate::test_utils::{ft06, random_instance, two_by_two};
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn deadline() -> Deadline {
        Deadline::after(Duration::from_secs(10))
    }

    #[test]
    fn test_spt_on_two_by_two() {
        let inst = two_by_two();
        let result = GreedySolver::new(PriorityRule::Spt).solve(&inst, deadline());
        // (1,0) d2 first, then (0,0) d3, then (0,1) d2, then (1,1) d4.
        assert_eq!(result.schedule.start_times(), &[vec![0, 3], vec![0, 3]]);
        assert_eq!(result.makespan(), 7);
        assert_eq!(result.exit_cause, ExitCause::Blocked);
    }

    #[test]
    fn test_order_matches_schedule() {
        let inst = ft06();
        for rule in PriorityRule::ALL {
            let (order, schedule) = GreedySolver::new(rule).construct(&inst);
            let decoded = order.to_schedule().unwrap();
            assert_eq!(decoded, schedule, "rule {rule}");
        }
    }

    #[test]
    fn test_est_lrpt_on_ft06() {
        let inst = ft06();
        let result = GreedySolver::new(PriorityRule::EstLrpt).solve(&inst, deadline());
        assert!(result.schedule.is_valid());
        assert!(result.makespan() >= 55);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::new("empty", 0, Vec::new());
        let result = GreedySolver::new(PriorityRule::Spt).solve(&inst, deadline());
        assert_eq!(result.makespan(), 0);
    }

    #[test]
    fn test_name() {
        assert_eq!(GreedySolver::new(PriorityRule::EstSrpt).name(), "greedy(EST_SRPT)");
    }

    proptest! {
        #[test]
        fn prop_every_rule_is_valid(
            num_jobs in 1usize..7,
            num_machines in 1usize..6,
            seed in any::<u64>(),
        ) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let inst = random_instance(num_jobs, num_machines, &mut rng);
            for rule in PriorityRule::ALL {
                let (_, schedule) = GreedySolver::new(rule).construct(&inst);
                prop_assert!(schedule.is_valid());
                prop_assert!(schedule.makespan() >= inst.total_duration() / num_machines as i64);
            }
        }
    }
}
