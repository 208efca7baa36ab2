//! Shared fixtures for unit tests.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Instance, Operation};

/// The 2 jobs × 2 machines instance used across the test suite.
///
/// Job 0 = [(m0, 3), (m1, 2)], job 1 = [(m1, 2), (m0, 4)].
pub fn two_by_two() -> Instance {
    Instance::from_pairs("2x2", 2, &[&[(0, 3), (1, 2)], &[(1, 2), (0, 4)]])
}

/// Fisher and Thompson's 6 × 6 instance (optimum 55).
pub fn ft06() -> Instance {
    Instance::from_pairs(
        "ft06",
        6,
        &[
            &[(2, 1), (0, 3), (1, 6), (3, 7), (5, 3), (4, 6)],
            &[(1, 8), (2, 5), (4, 10), (5, 10), (0, 10), (3, 4)],
            &[(2, 5), (3, 4), (5, 8), (0, 9), (1, 1), (4, 7)],
            &[(1, 5), (0, 5), (2, 5), (3, 3), (4, 8), (5, 9)],
            &[(2, 9), (1, 3), (4, 5), (5, 4), (0, 3), (3, 1)],
            &[(1, 3), (3, 3), (5, 9), (0, 10), (4, 4), (2, 1)],
        ],
    )
}

/// A random instance where each job visits every machine once.
pub fn random_instance<R: Rng>(num_jobs: usize, num_machines: usize, rng: &mut R) -> Instance {
    let jobs = (0..num_jobs)
        .map(|_| {
            let mut machines: Vec<usize> = (0..num_machines).collect();
            machines.shuffle(rng);
            machines
                .into_iter()
                .map(|m| Operation::new(m, rng.random_range(1..=20)))
                .collect()
        })
        .collect();
    Instance::new("random", num_machines, jobs)
}
