//! Operation-based encoding (job numbers).
//!
//! # Encoding
//!
//! A sequence of job indices of length `num_jobs × num_machines`. The k-th
//! occurrence of job `j` means "dispatch the k-th operation of `j` now".
//! Any sequence where each job appears exactly `num_machines` times decodes
//! to a feasible schedule.
//!
//! # Reference
//! Bierwirth (1995), "A generalized permutation approach to JSSP"

use std::fmt;

use super::Encoding;
use crate::models::{Instance, Schedule, Task};

/// Job-number sequence encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobNumbers<'a> {
    instance: &'a Instance,
    jobs: Vec<usize>,
}

impl<'a> JobNumbers<'a> {
    /// Creates an empty (partially built) encoding.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            jobs: Vec::with_capacity(instance.total_tasks()),
        }
    }

    /// Creates an encoding from a full job sequence.
    pub fn from_jobs(instance: &'a Instance, jobs: Vec<usize>) -> Self {
        Self { instance, jobs }
    }

    /// Operation 0 of every job, then operation 1 of every job, and so on.
    pub fn round_robin(instance: &'a Instance) -> Self {
        let jobs = (0..instance.num_tasks())
            .flat_map(|_| 0..instance.num_jobs)
            .collect();
        Self { instance, jobs }
    }

    /// Extracts the dispatch sequence of a schedule.
    ///
    /// At each step the job whose next operation starts earliest is
    /// emitted; ties go to the lowest job index.
    pub fn from_schedule(schedule: &Schedule<'a>) -> Self {
        let instance = schedule.instance();
        let num_tasks = instance.num_tasks();
        let mut next_op = vec![0usize; instance.num_jobs];
        let mut enc = Self::new(instance);

        for _ in 0..instance.total_tasks() {
            let next = (0..instance.num_jobs)
                .filter(|&j| next_op[j] < num_tasks)
                .map(|j| Task::new(j, next_op[j]))
                .min_by_key(|&t| (schedule.start_time(t), t.job));

            if let Some(task) = next {
                enc.push(task.job);
                next_op[task.job] += 1;
            }
        }
        enc
    }

    /// Appends a job index at the cursor.
    pub fn push(&mut self, job: usize) {
        self.jobs.push(job);
    }

    /// Index of the first element not yet set.
    #[inline]
    pub fn next_to_set(&self) -> usize {
        self.jobs.len()
    }

    /// The job sequence.
    #[inline]
    pub fn jobs(&self) -> &[usize] {
        &self.jobs
    }

    /// Mutable access to the job sequence (e.g. for shuffling).
    #[inline]
    pub fn jobs_mut(&mut self) -> &mut [usize] {
        &mut self.jobs
    }

    /// Whether every job appears exactly `num_tasks` times.
    pub fn is_complete(&self) -> bool {
        let inst = self.instance;
        if self.jobs.len() != inst.total_tasks() {
            return false;
        }
        let mut counts = vec![0usize; inst.num_jobs];
        for &j in &self.jobs {
            match counts.get_mut(j) {
                Some(c) => *c += 1,
                None => return false,
            }
        }
        counts.iter().all(|&c| c == inst.num_tasks())
    }
}

impl<'a> Encoding<'a> for JobNumbers<'a> {
    fn instance(&self) -> &'a Instance {
        self.instance
    }

    fn to_schedule(&self) -> Option<Schedule<'a>> {
        let inst = self.instance;
        if self.jobs.len() != inst.total_tasks() {
            return None;
        }

        let num_tasks = inst.num_tasks();
        let mut machine_free = vec![0i64; inst.num_machines];
        let mut next_op = vec![0usize; inst.num_jobs];
        let mut starts = vec![vec![0i64; num_tasks]; inst.num_jobs];

        for &job in &self.jobs {
            let op = *next_op.get(job)?;
            if op >= num_tasks {
                return None;
            }
            let machine = inst.machine(job, op);
            let job_ready = match op {
                0 => 0,
                _ => starts[job][op - 1] + inst.duration(job, op - 1),
            };
            let start = job_ready.max(machine_free[machine]);

            starts[job][op] = start;
            machine_free[machine] = start + inst.duration(job, op);
            next_op[job] = op + 1;
        }

        Some(Schedule::new(inst, starts))
    }
}

impl fmt::Display for JobNumbers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::test_utils::random_instance;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn sample3() -> Instance {
        Instance::from_pairs(
            "sample3",
            3,
            &[&[(0, 3), (1, 3), (2, 2)], &[(1, 2), (0, 3), (2, 4)]],
        )
    }

    #[test]
    fn test_to_schedule() {
        let inst = sample3();
        let enc = JobNumbers::from_jobs(&inst, vec![0, 0, 1, 1, 0, 1]);
        let s = enc.to_schedule().unwrap();
        // (0,0) m0 [0,3); (0,1) m1 [3,6); (1,0) m1 [6,8); (1,1) m0 [8,11);
        // (0,2) m2 [6,8); (1,2) m2 [11,15)
        assert_eq!(s.start_times(), &[vec![0, 3, 6], vec![6, 8, 11]]);
        assert_eq!(s.makespan(), 15);
        assert!(s.is_valid());
    }

    #[test]
    fn test_round_robin() {
        let inst = sample3();
        let enc = JobNumbers::round_robin(&inst);
        assert_eq!(enc.jobs(), &[0, 1, 0, 1, 0, 1]);
        assert!(enc.is_complete());
        assert!(enc.to_schedule().unwrap().is_valid());
    }

    #[test]
    fn test_partial_encoding() {
        let inst = sample3();
        let mut enc = JobNumbers::new(&inst);
        enc.push(0);
        enc.push(1);
        assert_eq!(enc.next_to_set(), 2);
        assert!(!enc.is_complete());
        assert!(enc.to_schedule().is_none());
    }

    #[test]
    fn test_malformed_multiplicity() {
        let inst = sample3();
        let enc = JobNumbers::from_jobs(&inst, vec![0, 0, 0, 0, 1, 1]);
        assert!(!enc.is_complete());
        assert!(enc.to_schedule().is_none());

        let enc = JobNumbers::from_jobs(&inst, vec![0, 0, 0, 1, 1, 7]);
        assert!(enc.to_schedule().is_none());
    }

    #[test]
    fn test_from_schedule_roundtrip() {
        let inst = sample3();
        let enc = JobNumbers::from_jobs(&inst, vec![0, 0, 1, 1, 0, 1]);
        let s = enc.to_schedule().unwrap();
        let back = JobNumbers::from_schedule(&s);
        assert!(back.is_complete());
        assert_eq!(back.to_schedule().unwrap().makespan(), s.makespan());
    }

    #[test]
    fn test_display() {
        let inst = sample3();
        let enc = JobNumbers::from_jobs(&inst, vec![0, 1, 1, 0, 0, 1]);
        assert_eq!(enc.to_string(), "[0, 1, 1, 0, 0, 1]");
    }

    proptest! {
        #[test]
        fn prop_any_permutation_is_valid(
            num_jobs in 1usize..6,
            num_machines in 1usize..5,
            seed in any::<u64>(),
        ) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let inst = random_instance(num_jobs, num_machines, &mut rng);

            let mut enc = JobNumbers::round_robin(&inst);
            enc.jobs_mut().shuffle(&mut rng);
            prop_assert!(enc.is_complete());
            let s = enc.to_schedule().unwrap();
            prop_assert!(s.is_valid());
        }
    }
}
