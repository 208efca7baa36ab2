//! Dispatch state shared with dispatching rules.

use crate::models::{Instance, Task};

/// Runtime construction state passed to dispatching rules.
///
/// Tracks, for every job and every machine, the earliest time it is free
/// again. Both start at 0 and are advanced by [`DispatchContext::commit`].
#[derive(Debug, Clone)]
pub struct DispatchContext<'a> {
    instance: &'a Instance,
    job_free: Vec<i64>,
    machine_free: Vec<i64>,
}

impl<'a> DispatchContext<'a> {
    /// Creates a context where every job and machine is free at time 0.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            job_free: vec![0; instance.num_jobs],
            machine_free: vec![0; instance.num_machines],
        }
    }

    /// Sets the free time of a job.
    pub fn with_job_free(mut self, job: usize, time: i64) -> Self {
        self.job_free[job] = time;
        self
    }

    /// Sets the free time of a machine.
    pub fn with_machine_free(mut self, machine: usize, time: i64) -> Self {
        self.machine_free[machine] = time;
        self
    }

    /// The instance being scheduled.
    #[inline]
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Earliest time the task could start: max(job free, machine free).
    #[inline]
    pub fn earliest_start(&self, task: Task) -> i64 {
        let machine = self.instance.machine_of(task);
        self.job_free[task.job].max(self.machine_free[machine])
    }

    /// Dispatches the task at its earliest start and returns that start.
    ///
    /// Both the job and the machine become free at `start + duration`.
    pub fn commit(&mut self, task: Task) -> i64 {
        let start = self.earliest_start(task);
        let end = start + self.instance.duration_of(task);
        self.job_free[task.job] = end;
        self.machine_free[self.instance.machine_of(task)] = end;
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::two_by_two;

    #[test]
    fn test_commit_advances_both_trackers() {
        let inst = two_by_two();
        let mut ctx = DispatchContext::new(&inst);
        assert_eq!(ctx.commit(Task::new(0, 0)), 0);
        // (1,1) runs on machine 0, busy until 3.
        assert_eq!(ctx.earliest_start(Task::new(1, 1)), 3);
        // (0,1) must wait for job 0 until 3.
        assert_eq!(ctx.earliest_start(Task::new(0, 1)), 3);
        assert_eq!(ctx.commit(Task::new(1, 0)), 0);
        assert_eq!(ctx.commit(Task::new(0, 1)), 3);
        assert_eq!(ctx.commit(Task::new(1, 1)), 3);
    }

    #[test]
    fn test_builder_free_times() {
        let inst = two_by_two();
        let ctx = DispatchContext::new(&inst)
            .with_job_free(1, 4)
            .with_machine_free(1, 6);
        assert_eq!(ctx.earliest_start(Task::new(1, 0)), 6);
        assert_eq!(ctx.earliest_start(Task::new(0, 0)), 0);
    }
}
