//! Problem instance model.
//!
//! A job-shop instance: `num_jobs` jobs, each a fixed sequence of
//! operations, each operation occupying one of `num_machines` machines for
//! a fixed duration. Every job visits every machine exactly once, so the
//! number of operations per job equals the number of machines.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7

use serde::{Deserialize, Serialize};

use super::Task;

/// One processing step of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Machine the operation runs on (0-indexed).
    pub machine: usize,
    /// Processing time (time units, ≥ 1).
    pub duration: i64,
}

impl Operation {
    /// Creates a new operation.
    pub fn new(machine: usize, duration: i64) -> Self {
        Self { machine, duration }
    }
}

/// An immutable job-shop problem instance.
///
/// Loaded once and shared read-only by every encoding, schedule and solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance name (e.g. `ft06`).
    pub name: String,
    /// Number of jobs.
    pub num_jobs: usize,
    /// Number of machines.
    pub num_machines: usize,
    /// Operations of each job, in processing order.
    pub jobs: Vec<Vec<Operation>>,
}

impl Instance {
    /// Creates an instance from its job table.
    ///
    /// `num_jobs` is taken from the table; structural checks are done by
    /// [`crate::validation::validate_instance`].
    pub fn new(name: impl Into<String>, num_machines: usize, jobs: Vec<Vec<Operation>>) -> Self {
        Self {
            name: name.into(),
            num_jobs: jobs.len(),
            num_machines,
            jobs,
        }
    }

    /// Builds an instance from `(machine, duration)` pairs per job.
    pub fn from_pairs(
        name: impl Into<String>,
        num_machines: usize,
        jobs: &[&[(usize, i64)]],
    ) -> Self {
        let jobs = jobs
            .iter()
            .map(|ops| {
                ops.iter()
                    .map(|&(machine, duration)| Operation::new(machine, duration))
                    .collect()
            })
            .collect();
        Self::new(name, num_machines, jobs)
    }

    /// Number of operations per job.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_machines
    }

    /// Total number of operations in the instance.
    #[inline]
    pub fn total_tasks(&self) -> usize {
        self.num_jobs * self.num_tasks()
    }

    /// Machine used by operation `op` of `job`.
    #[inline]
    pub fn machine(&self, job: usize, op: usize) -> usize {
        self.jobs[job][op].machine
    }

    /// Duration of operation `op` of `job`.
    #[inline]
    pub fn duration(&self, job: usize, op: usize) -> i64 {
        self.jobs[job][op].duration
    }

    /// Machine used by a task.
    #[inline]
    pub fn machine_of(&self, task: Task) -> usize {
        self.machine(task.job, task.op)
    }

    /// Duration of a task.
    #[inline]
    pub fn duration_of(&self, task: Task) -> i64 {
        self.duration(task.job, task.op)
    }

    /// Index of the operation of `job` that runs on `machine`.
    ///
    /// Returns `None` if the job never visits the machine.
    pub fn task_with_machine(&self, job: usize, machine: usize) -> Option<usize> {
        self.jobs[job].iter().position(|o| o.machine == machine)
    }

    /// Processing time left in the task's job, the task itself included.
    pub fn remaining_duration(&self, task: Task) -> i64 {
        self.jobs[task.job][task.op..]
            .iter()
            .map(|o| o.duration)
            .sum()
    }

    /// Sum of every operation duration (a trivial makespan upper bound).
    pub fn total_duration(&self) -> i64 {
        self.jobs.iter().flatten().map(|o| o.duration).sum()
    }
}
