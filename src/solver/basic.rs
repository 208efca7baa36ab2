//! Round-robin baseline.

use super::{Deadline, ExitCause, SolveResult, Solver};
use crate::encoding::{Encoding, JobNumbers};
use crate::models::{Instance, Schedule};

/// Dispatches operation 0 of every job, then operation 1 of every job,
/// and so on. Useful as a reference point for the other solvers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicSolver;

impl BasicSolver {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for BasicSolver {
    fn name(&self) -> String {
        "basic".to_string()
    }

    fn solve<'a>(&self, instance: &'a Instance, _deadline: Deadline) -> SolveResult<'a> {
        // A complete job-number sequence always decodes.
        let schedule = JobNumbers::round_robin(instance)
            .to_schedule()
            .unwrap_or_else(|| {
                Schedule::new(instance, vec![vec![0; instance.num_tasks()]; instance.num_jobs])
            });
        SolveResult::new(schedule, ExitCause::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ft06, two_by_two};
    use std::time::Duration;

    #[test]
    fn test_two_by_two() {
        let inst = two_by_two();
        let result = BasicSolver::new().solve(&inst, Deadline::after(Duration::from_secs(1)));
        // (0,0) [0,3), (1,0) [0,2), (0,1) [3,5), (1,1) [3,7)
        assert_eq!(result.schedule.start_times(), &[vec![0, 3], vec![0, 3]]);
        assert_eq!(result.exit_cause, ExitCause::Blocked);
    }

    #[test]
    fn test_ft06_is_valid() {
        let inst = ft06();
        let result = BasicSolver::new().solve(&inst, Deadline::after(Duration::from_secs(1)));
        assert!(result.schedule.is_valid());
        assert!(result.makespan() >= 55);
    }
}
