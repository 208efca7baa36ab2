//! Task (operation reference) model.
//!
//! A task names one operation of a job: `(job, op)`. It is the key used by
//! encodings, schedules and the taboo matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One operation of one job.
///
/// Example: `Task::new(2, 3)` is the fourth operation of the third job
/// (both indices start at 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Task {
    /// Job index.
    pub job: usize,
    /// Operation index within the job.
    pub op: usize,
}

impl Task {
    /// Creates a new task reference.
    #[inline]
    pub const fn new(job: usize, op: usize) -> Self {
        Self { job, op }
    }

    /// Scalar id in `0..num_jobs * num_tasks`, used to index square matrices.
    #[inline]
    pub fn id(&self, num_tasks: usize) -> usize {
        self.job * num_tasks + self.op
    }

    /// Inverse of [`Task::id`].
    #[inline]
    pub fn from_id(id: usize, num_tasks: usize) -> Self {
        Self::new(id / num_tasks, id % num_tasks)
    }

    /// The previous operation of the same job, if any.
    #[inline]
    pub fn job_predecessor(&self) -> Option<Task> {
        self.op.checked_sub(1).map(|op| Task::new(self.job, op))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.job, self.op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_task_id_roundtrip() {
        let t = Task::new(2, 3);
        assert_eq!(t.id(4), 11);
        assert_eq!(Task::from_id(11, 4), t);
    }

    #[test]
    fn test_task_value_equality() {
        let mut set = HashSet::new();
        set.insert(Task::new(1, 0));
        assert!(set.contains(&Task::new(1, 0)));
        assert!(!set.contains(&Task::new(0, 1)));
    }

    #[test]
    fn test_job_predecessor() {
        assert_eq!(Task::new(1, 0).job_predecessor(), None);
        assert_eq!(Task::new(1, 2).job_predecessor(), Some(Task::new(1, 1)));
    }

    #[test]
    fn test_task_display() {
        assert_eq!(Task::new(0, 2).to_string(), "(0,2)");
    }
}
