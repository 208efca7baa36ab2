//! Random restart baseline.
//!
//! Samples shuffled job-number sequences until the deadline and keeps the
//! shortest schedule. Every sample is feasible by construction.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use super::{BasicSolver, Deadline, ExitCause, SolveResult, Solver};
use crate::encoding::{Encoding, JobNumbers};
use crate::models::Instance;

/// Random sampling solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomSolver {
    /// Fixed seed for reproducible runs; `None` seeds from the thread RNG.
    seed: Option<u64>,
}

impl RandomSolver {
    /// Creates a randomly seeded solver.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Solver for RandomSolver {
    fn name(&self) -> String {
        "random".to_string()
    }

    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> SolveResult<'a> {
        let mut rng = self.rng();
        let mut best = BasicSolver.solve(instance, deadline).schedule;
        let mut encoding = JobNumbers::round_robin(instance);
        let mut samples = 0u64;

        while !deadline.is_past() {
            encoding.jobs_mut().shuffle(&mut rng);
            samples += 1;
            if let Some(candidate) = encoding.to_schedule() {
                if candidate.makespan() < best.makespan() {
                    debug!(event = "random_improved", makespan = candidate.makespan(), samples);
                    best = candidate;
                }
            }
        }

        debug!(event = "random_done", samples, makespan = best.makespan());
        SolveResult::new(best, ExitCause::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ft06;
    use std::time::Duration;

    #[test]
    fn test_improves_on_round_robin() {
        let inst = ft06();
        let basic = BasicSolver.solve(&inst, Deadline::after(Duration::ZERO));
        let result = RandomSolver::new()
            .with_seed(7)
            .solve(&inst, Deadline::after(Duration::from_millis(50)));

        assert!(result.schedule.is_valid());
        assert!(result.makespan() <= basic.makespan());
        assert_eq!(result.exit_cause, ExitCause::Timeout);
    }

    #[test]
    fn test_past_deadline_returns_baseline() {
        let inst = ft06();
        let result = RandomSolver::new()
            .with_seed(1)
            .solve(&inst, Deadline::after(Duration::ZERO));
        assert!(result.schedule.is_valid());
    }
}
