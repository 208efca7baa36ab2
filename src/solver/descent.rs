//! Steepest-descent local search on the critical-path neighborhood.
//!
//! # Algorithm
//!
//! 1. Seed with a greedy schedule (EST_LRPT by default).
//! 2. Cut the critical path of the best schedule into blocks and try
//!    every boundary swap on its machine order.
//! 3. A candidate with strictly smaller makespan becomes the new best
//!    right away; scanning continues against it. Each swap is undone
//!    before the next one is tried.
//! 4. Repeat while the last pass improved and the deadline has not passed.
//!
//! Exits `Blocked` at a local optimum, `Timeout` if the deadline cut off
//! a pass that was still improving.
//!
//! # Reference
//! Nowicki & Smutnicki (1996), "A Fast Taboo Search Algorithm for the Job
//! Shop Problem"

use tracing::{debug, info, trace};

use super::{Deadline, ExitCause, GreedySolver, SolveResult, Solver};
use crate::dispatching::PriorityRule;
use crate::encoding::{Encoding, ResourceOrder};
use crate::models::Instance;
use crate::neighborhood::{blocks_of_critical_path, neighbors};

/// Descent solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescentSolver {
    seed_rule: PriorityRule,
}

impl DescentSolver {
    /// Creates a descent solver seeded by EST_LRPT.
    pub fn new() -> Self {
        Self {
            seed_rule: PriorityRule::EstLrpt,
        }
    }

    /// Sets the priority rule of the seeding greedy construction.
    pub fn with_seed_rule(mut self, rule: PriorityRule) -> Self {
        self.seed_rule = rule;
        self
    }
}

impl Default for DescentSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for DescentSolver {
    fn name(&self) -> String {
        format!("descent({})", self.seed_rule)
    }

    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> SolveResult<'a> {
        let (_, mut best) = GreedySolver::new(self.seed_rule).construct(instance);
        info!(
            event = "descent_start",
            instance = %instance.name,
            seed_makespan = best.makespan(),
        );

        let mut improved = true;
        let mut passes = 0usize;
        while improved && !deadline.is_past() {
            improved = false;
            passes += 1;

            let mut order = ResourceOrder::from_schedule(&best);
            let blocks = blocks_of_critical_path(&order, &best.critical_path());

            for swap in blocks.iter().flat_map(neighbors) {
                swap.apply_on(&mut order);
                match order.to_schedule() {
                    Some(candidate) if candidate.makespan() < best.makespan() => {
                        debug!(
                            event = "descent_improved",
                            pass = passes,
                            %swap,
                            makespan = candidate.makespan(),
                        );
                        best = candidate;
                        improved = true;
                    }
                    Some(candidate) => {
                        trace!(%swap, makespan = candidate.makespan(), "candidate rejected");
                    }
                    None => trace!(%swap, "candidate infeasible"),
                }
                swap.apply_on(&mut order);
            }
        }

        let exit_cause = if improved {
            ExitCause::Timeout
        } else {
            ExitCause::Blocked
        };
        info!(
            event = "descent_end",
            instance = %instance.name,
            makespan = best.makespan(),
            passes,
            exit = %exit_cause,
        );
        SolveResult::new(best, exit_cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ft06, random_instance};
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn test_not_worse_than_seed_on_ft06() {
        let inst = ft06();
        let (_, seed) = GreedySolver::new(PriorityRule::EstLrpt).construct(&inst);
        let result = DescentSolver::new().solve(&inst, Deadline::after(Duration::from_secs(10)));

        assert!(result.schedule.is_valid());
        assert!(result.makespan() <= seed.makespan());
        assert!(result.makespan() >= 55);
        assert_eq!(result.exit_cause, ExitCause::Blocked);
    }

    #[test]
    fn test_expired_deadline_returns_seed() {
        let inst = ft06();
        let (_, seed) = GreedySolver::new(PriorityRule::EstLrpt).construct(&inst);
        let result = DescentSolver::new().solve(&inst, Deadline::after(Duration::ZERO));

        assert_eq!(result.schedule, seed);
        assert_eq!(result.exit_cause, ExitCause::Timeout);
    }

    #[test]
    fn test_name() {
        let solver = DescentSolver::new().with_seed_rule(PriorityRule::Spt);
        assert_eq!(solver.name(), "descent(SPT)");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_never_worse_than_seed(
            num_jobs in 2usize..7,
            num_machines in 2usize..6,
            seed in any::<u64>(),
        ) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let inst = random_instance(num_jobs, num_machines, &mut rng);
            let (_, greedy) = GreedySolver::new(PriorityRule::EstLrpt).construct(&inst);

            let result = DescentSolver::new().solve(&inst, Deadline::after(Duration::from_secs(5)));
            prop_assert!(result.schedule.is_valid());
            prop_assert!(result.makespan() <= greedy.makespan());
        }
    }
}
