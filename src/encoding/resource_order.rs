//! Machine-based encoding (resource order).
//!
//! # Encoding
//!
//! For each machine, the ordered list of tasks it processes. On machine
//! `m` the list holds exactly one task per job: the operation of that job
//! that runs on `m`. The list length doubles as the cursor of the next free
//! slot during incremental construction.
//!
//! Unlike job numbers, an arbitrary resource order may be infeasible: two
//! machines can each wait for the other (a cycle in the disjunctive
//! graph). Decoding reports this as `None`.

use std::fmt;

use super::Encoding;
use crate::models::{Instance, Schedule, Task};

/// Per-machine dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOrder<'a> {
    instance: &'a Instance,
    tasks_by_machine: Vec<Vec<Task>>,
}

impl<'a> ResourceOrder<'a> {
    /// Creates an empty order (no slot filled on any machine).
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            tasks_by_machine: (0..instance.num_machines)
                .map(|_| Vec::with_capacity(instance.num_jobs))
                .collect(),
        }
    }

    /// Creates an order from explicit per-machine task lists.
    pub fn from_machines(instance: &'a Instance, tasks_by_machine: Vec<Vec<Task>>) -> Self {
        Self {
            instance,
            tasks_by_machine,
        }
    }

    /// Extracts the machine orders of a schedule: on each machine, tasks
    /// sorted by start time (job index breaking ties).
    pub fn from_schedule(schedule: &Schedule<'a>) -> Self {
        let instance = schedule.instance();
        let tasks_by_machine = (0..instance.num_machines)
            .map(|machine| {
                let mut tasks: Vec<Task> = (0..instance.num_jobs)
                    .filter_map(|j| {
                        instance
                            .task_with_machine(j, machine)
                            .map(|op| Task::new(j, op))
                    })
                    .collect();
                tasks.sort_by_key(|&t| (schedule.start_time(t), t.job));
                tasks
            })
            .collect();
        Self {
            instance,
            tasks_by_machine,
        }
    }

    /// Appends a task to the next free slot of its machine.
    pub fn push(&mut self, task: Task) {
        let machine = self.instance.machine_of(task);
        self.tasks_by_machine[machine].push(task);
    }

    /// Number of filled slots on a machine.
    #[inline]
    pub fn next_free_slot(&self, machine: usize) -> usize {
        self.tasks_by_machine[machine].len()
    }

    /// Dispatch order of a machine.
    #[inline]
    pub fn tasks_on(&self, machine: usize) -> &[Task] {
        &self.tasks_by_machine[machine]
    }

    /// Task in a given slot.
    #[inline]
    pub fn task_at(&self, machine: usize, slot: usize) -> Task {
        self.tasks_by_machine[machine][slot]
    }

    /// Slot index of a task on its machine.
    pub fn slot_of(&self, task: Task) -> Option<usize> {
        let machine = self.instance.machine_of(task);
        self.tasks_by_machine[machine]
            .iter()
            .position(|&t| t == task)
    }

    /// Exchanges two slots of one machine.
    pub fn swap_slots(&mut self, machine: usize, a: usize, b: usize) {
        self.tasks_by_machine[machine].swap(a, b);
    }
}

impl<'a> Encoding<'a> for ResourceOrder<'a> {
    fn instance(&self) -> &'a Instance {
        self.instance
    }

    fn to_schedule(&self) -> Option<Schedule<'a>> {
        let inst = self.instance;
        let num_tasks = inst.num_tasks();
        let mut starts = vec![vec![0i64; num_tasks]; inst.num_jobs];
        let mut next_by_job = vec![0usize; inst.num_jobs];
        let mut next_by_machine = vec![0usize; inst.num_machines];
        let mut machine_free = vec![0i64; inst.num_machines];

        for _ in 0..inst.total_tasks() {
            // A task that is next both on its machine and on its job.
            let task = (0..inst.num_machines)
                .filter_map(|m| {
                    self.tasks_by_machine[m]
                        .get(next_by_machine[m])
                        .map(|&t| (m, t))
                })
                .find(|&(m, t)| {
                    t.job < inst.num_jobs
                        && t.op == next_by_job[t.job]
                        && inst.machine_of(t) == m
                })
                .map(|(_, t)| t)?;

            let machine = inst.machine_of(task);
            let job_ready = match task.job_predecessor() {
                Some(p) => starts[p.job][p.op] + inst.duration_of(p),
                None => 0,
            };
            let start = job_ready.max(machine_free[machine]);

            starts[task.job][task.op] = start;
            next_by_job[task.job] += 1;
            next_by_machine[machine] += 1;
            machine_free[machine] = start + inst.duration_of(task);
        }

        Some(Schedule::new(inst, starts))
    }
}

impl fmt::Display for ResourceOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (machine, tasks) in self.tasks_by_machine.iter().enumerate() {
            write!(f, "Machine {machine}:")?;
            for t in tasks {
                write!(f, " {t}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::JobNumbers;
    use crate::test_utils::{ft06, random_instance, two_by_two};
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn example_order(inst: &Instance) -> ResourceOrder<'_> {
        ResourceOrder::from_machines(
            inst,
            vec![
                vec![Task::new(0, 0), Task::new(1, 1)],
                vec![Task::new(1, 0), Task::new(0, 1)],
            ],
        )
    }

    #[test]
    fn test_two_by_two_scenario() {
        let inst = two_by_two();
        let s = example_order(&inst).to_schedule().unwrap();
        assert_eq!(s.start_times(), &[vec![0, 3], vec![0, 3]]);
        assert_eq!(s.makespan(), 7);
        assert!(s.is_valid());
    }

    #[test]
    fn test_cyclic_order_is_infeasible() {
        let inst = two_by_two();
        // m0 waits for (1,1), which waits for (1,0), which sits behind
        // (0,1) on m1, which waits for (0,0) behind (1,1) on m0.
        let order = ResourceOrder::from_machines(
            &inst,
            vec![
                vec![Task::new(1, 1), Task::new(0, 0)],
                vec![Task::new(0, 1), Task::new(1, 0)],
            ],
        );
        assert!(order.to_schedule().is_none());
    }

    #[test]
    fn test_incomplete_order_is_infeasible() {
        let inst = two_by_two();
        let mut order = ResourceOrder::new(&inst);
        order.push(Task::new(0, 0));
        order.push(Task::new(1, 0));
        assert_eq!(order.next_free_slot(0), 1);
        assert_eq!(order.next_free_slot(1), 1);
        assert!(order.to_schedule().is_none());
    }

    #[test]
    fn test_push_fills_slots_in_order() {
        let inst = two_by_two();
        let mut order = ResourceOrder::new(&inst);
        for t in [Task::new(0, 0), Task::new(1, 0), Task::new(0, 1), Task::new(1, 1)] {
            order.push(t);
        }
        assert_eq!(order, example_order(&inst));
        assert_eq!(order.slot_of(Task::new(1, 1)), Some(1));
        assert_eq!(order.task_at(1, 0), Task::new(1, 0));
    }

    #[test]
    fn test_from_schedule_roundtrip() {
        let inst = ft06();
        let s = JobNumbers::round_robin(&inst).to_schedule().unwrap();
        let order = ResourceOrder::from_schedule(&s);
        let back = order.to_schedule().unwrap();
        assert_eq!(back.makespan(), s.makespan());
        assert!(back.is_valid());
    }

    #[test]
    fn test_display() {
        let inst = two_by_two();
        let text = example_order(&inst).to_string();
        assert_eq!(text, "Machine 0: (0,0) (1,1)\nMachine 1: (1,0) (0,1)\n");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_preserves_makespan(
            num_jobs in 1usize..7,
            num_machines in 1usize..6,
            seed in any::<u64>(),
        ) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let inst = random_instance(num_jobs, num_machines, &mut rng);
            let mut enc = JobNumbers::round_robin(&inst);
            enc.jobs_mut().shuffle(&mut rng);
            let s = enc.to_schedule().unwrap();

            let back = ResourceOrder::from_schedule(&s).to_schedule().unwrap();
            prop_assert_eq!(back.makespan(), s.makespan());
        }
    }
}
