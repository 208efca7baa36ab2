//! Schedule (solution) model.
//!
//! A schedule assigns a start time to every task of an instance. Validity,
//! makespan and the critical path are all derived from the start-time
//! matrix.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7.1

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Instance, Task};

/// A concrete timed schedule for an [`Instance`].
///
/// `starts[job][op]` is the start time of operation `op` of `job`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<'a> {
    instance: &'a Instance,
    starts: Vec<Vec<i64>>,
}

/// A task-machine-time assignment, exported from a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Scheduled task.
    pub task: Task,
    /// Machine the task occupies.
    pub machine: usize,
    /// Start time.
    pub start: i64,
    /// End time (start + duration).
    pub end: i64,
}

/// A constraint violation found in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Task that starts too early.
    pub task: Task,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Task starts before the previous operation of its job finished.
    PrecedenceViolation,
    /// Task overlaps another task on the same machine.
    MachineOverlap,
    /// Task starts before time 0.
    NegativeStart,
}

impl Assignment {
    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Violation {
    /// Creates a precedence violation.
    pub fn precedence_violation(task: Task, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::PrecedenceViolation,
            task,
            message: message.into(),
        }
    }

    /// Creates a machine overlap violation.
    pub fn machine_overlap(task: Task, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::MachineOverlap,
            task,
            message: message.into(),
        }
    }

    /// Creates a negative start violation.
    pub fn negative_start(task: Task, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::NegativeStart,
            task,
            message: message.into(),
        }
    }
}

impl<'a> Schedule<'a> {
    /// Creates a schedule from a `num_jobs × num_tasks` start-time matrix.
    pub fn new(instance: &'a Instance, starts: Vec<Vec<i64>>) -> Self {
        debug_assert_eq!(starts.len(), instance.num_jobs);
        Self { instance, starts }
    }

    /// The instance this schedule belongs to.
    #[inline]
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Raw start-time matrix.
    #[inline]
    pub fn start_times(&self) -> &[Vec<i64>] {
        &self.starts
    }

    /// Start time of a task.
    #[inline]
    pub fn start_time(&self, task: Task) -> i64 {
        self.starts[task.job][task.op]
    }

    /// End time of a task.
    #[inline]
    pub fn end_time(&self, task: Task) -> i64 {
        self.start_time(task) + self.instance.duration_of(task)
    }

    /// Iterates every task in (job, op) order.
    pub fn tasks(&self) -> impl Iterator<Item = Task> + '_ {
        let num_tasks = self.instance.num_tasks();
        (0..self.instance.num_jobs).flat_map(move |j| (0..num_tasks).map(move |o| Task::new(j, o)))
    }

    /// Makespan: latest end time over all tasks.
    pub fn makespan(&self) -> i64 {
        self.tasks().map(|t| self.end_time(t)).max().unwrap_or(0)
    }

    /// Every violated precedence, overlap or negative-start constraint.
    pub fn violations(&self) -> Vec<Violation> {
        let inst = self.instance;
        let mut violations = Vec::new();

        for task in self.tasks() {
            if self.start_time(task) < 0 {
                violations.push(Violation::negative_start(
                    task,
                    format!("{task} starts at {}", self.start_time(task)),
                ));
            }
            if let Some(pred) = task.job_predecessor() {
                if self.start_time(task) < self.end_time(pred) {
                    violations.push(Violation::precedence_violation(
                        task,
                        format!(
                            "{task} starts at {} before {pred} ends at {}",
                            self.start_time(task),
                            self.end_time(pred)
                        ),
                    ));
                }
            }
        }

        for machine in 0..inst.num_machines {
            let mut on_machine: Vec<Task> = self
                .tasks()
                .filter(|&t| inst.machine_of(t) == machine)
                .collect();
            on_machine.sort_by_key(|&t| (self.start_time(t), t));

            for pair in on_machine.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                if self.start_time(next) < self.end_time(prev) {
                    violations.push(Violation::machine_overlap(
                        next,
                        format!(
                            "{next} starts at {} on machine {machine} while {prev} runs until {}",
                            self.start_time(next),
                            self.end_time(prev)
                        ),
                    ));
                }
            }
        }

        violations
    }

    /// Whether precedence and machine exclusivity hold for every task.
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// The first task, in (job, op) order, whose end equals the makespan.
    pub fn last_task(&self) -> Option<Task> {
        let makespan = self.makespan();
        self.tasks().find(|&t| self.end_time(t) == makespan)
    }

    /// Task on the same machine that ends exactly when `task` starts.
    fn machine_predecessor(&self, task: Task) -> Option<Task> {
        let inst = self.instance;
        let machine = inst.machine_of(task);
        let start = self.start_time(task);
        (0..inst.num_jobs)
            .filter(|&j| j != task.job)
            .filter_map(|j| inst.task_with_machine(j, machine).map(|op| Task::new(j, op)))
            .find(|&t| self.end_time(t) == start)
    }

    /// A longest zero-slack chain of tasks ending at the makespan.
    ///
    /// Traced backward from [`Schedule::last_task`]: at each step the
    /// same-job predecessor is taken if it ends exactly at the current
    /// start, otherwise the same-machine task ending there. The chain stops
    /// at a task starting at 0 or with slack on both sides. Returned in
    /// chronological order.
    pub fn critical_path(&self) -> Vec<Task> {
        let Some(last) = self.last_task() else {
            return Vec::new();
        };

        let mut path = vec![last];
        let mut current = last;
        while self.start_time(current) > 0 {
            let start = self.start_time(current);
            let previous = current
                .job_predecessor()
                .filter(|&p| self.end_time(p) == start)
                .or_else(|| self.machine_predecessor(current));

            match previous {
                Some(p) => {
                    path.push(p);
                    current = p;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }

    /// Exports the schedule as assignments, sorted by (start, task).
    pub fn assignments(&self) -> Vec<Assignment> {
        let mut out: Vec<Assignment> = self
            .tasks()
            .map(|task| Assignment {
                task,
                machine: self.instance.machine_of(task),
                start: self.start_time(task),
                end: self.end_time(task),
            })
            .collect();
        out.sort_by_key(|a| (a.start, a.task));
        out
    }

    /// Busy time of a machine divided by the makespan.
    ///
    /// Returns `None` for an empty schedule.
    pub fn machine_utilization(&self, machine: usize) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        let busy: i64 = self
            .tasks()
            .filter(|&t| self.instance.machine_of(t) == machine)
            .map(|t| self.instance.duration_of(t))
            .sum();
        Some(busy as f64 / horizon as f64)
    }
}

impl fmt::Display for Schedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (job, starts) in self.starts.iter().enumerate() {
            write!(f, "Job {job}:")?;
            for (op, start) in starts.iter().enumerate() {
                let task = Task::new(job, op);
                write!(
                    f,
                    " [m{} {}-{}]",
                    self.instance.machine_of(task),
                    start,
                    self.end_time(task)
                )?;
            }
            writeln!(f)?;
        }
        write!(f, "makespan: {}", self.makespan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Instance {
        Instance::from_pairs("2x2", 2, &[&[(0, 3), (1, 2)], &[(1, 2), (0, 4)]])
    }

    #[test]
    fn test_schedule_makespan() {
        let inst = two_by_two();
        let s = Schedule::new(&inst, vec![vec![0, 3], vec![0, 3]]);
        assert_eq!(s.makespan(), 7);
        assert!(s.is_valid());
    }

    #[test]
    fn test_precedence_violation() {
        let inst = two_by_two();
        // Job 0 op 1 starts at 2, before op 0 ends at 3.
        let s = Schedule::new(&inst, vec![vec![0, 2], vec![0, 3]]);
        let v = s.violations();
        assert!(!s.is_valid());
        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::PrecedenceViolation
                && v.task == Task::new(0, 1)));
    }

    #[test]
    fn test_machine_overlap() {
        let inst = two_by_two();
        // Machine 0: job0 op0 [0,3) and job1 op1 [2,6) overlap.
        let s = Schedule::new(&inst, vec![vec![0, 3], vec![0, 2]]);
        let v = s.violations();
        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::MachineOverlap));
    }

    #[test]
    fn test_negative_start() {
        let inst = two_by_two();
        let s = Schedule::new(&inst, vec![vec![-1, 3], vec![0, 3]]);
        assert!(s
            .violations()
            .iter()
            .any(|v| v.violation_type == ViolationType::NegativeStart));
    }

    #[test]
    fn test_critical_path_mixed_edges() {
        let inst = two_by_two();
        let s = Schedule::new(&inst, vec![vec![0, 3], vec![0, 3]]);
        // Makespan task is (1,1) ending at 7; it starts at 3 when machine 0
        // frees after (0,0), and (1,0) ends at 2 so the job edge has slack.
        assert_eq!(s.last_task(), Some(Task::new(1, 1)));
        assert_eq!(s.critical_path(), vec![Task::new(0, 0), Task::new(1, 1)]);
    }

    #[test]
    fn test_critical_path_prefers_job_edge() {
        // Both predecessors of (1,1) end at 2.
        let inst = Instance::from_pairs("tie", 2, &[&[(0, 2), (1, 1)], &[(1, 2), (0, 1)]]);
        let s = Schedule::new(&inst, vec![vec![0, 2], vec![0, 2]]);
        assert!(s.is_valid());
        assert_eq!(s.last_task(), Some(Task::new(0, 1)));
        // (0,1) starts at 2: job pred (0,0) ends at 2 and machine pred (1,0)
        // ends at 2; the job edge wins.
        assert_eq!(s.critical_path(), vec![Task::new(0, 0), Task::new(0, 1)]);
    }

    #[test]
    fn test_critical_path_single_machine_chain() {
        let inst = Instance::from_pairs("chain", 1, &[&[(0, 2)], &[(0, 3)], &[(0, 1)]]);
        let s = Schedule::new(&inst, vec![vec![0], vec![2], vec![5]]);
        assert_eq!(
            s.critical_path(),
            vec![Task::new(0, 0), Task::new(1, 0), Task::new(2, 0)]
        );
    }

    #[test]
    fn test_assignments_sorted() {
        let inst = two_by_two();
        let s = Schedule::new(&inst, vec![vec![0, 3], vec![0, 3]]);
        let a = s.assignments();
        assert_eq!(a.len(), 4);
        assert_eq!(a[0].task, Task::new(0, 0));
        assert_eq!(a[3].end, 7);
        assert_eq!(a[3].duration(), 4);
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"machine\""));
    }

    #[test]
    fn test_machine_utilization() {
        let inst = two_by_two();
        let s = Schedule::new(&inst, vec![vec![0, 3], vec![0, 3]]);
        // Machine 0 busy 3 + 4 = 7 over 7.
        assert!((s.machine_utilization(0).unwrap() - 1.0).abs() < 1e-10);
        // Machine 1 busy 2 + 2 = 4 over 7.
        assert!((s.machine_utilization(1).unwrap() - 4.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_schedule() {
        let inst = Instance::new("empty", 0, Vec::new());
        let s = Schedule::new(&inst, Vec::new());
        assert_eq!(s.makespan(), 0);
        assert!(s.is_valid());
        assert!(s.critical_path().is_empty());
        assert!(s.machine_utilization(0).is_none());
    }
}
