//! Solvers: constructive heuristics and critical-path local search.
//!
//! Every solver implements [`Solver`]: it receives an instance and a
//! monotonic [`Deadline`] and returns its best schedule together with the
//! reason it stopped.
//!
//! | Solver | Kind | Stops |
//! |--------|------|-------|
//! | [`BasicSolver`] | round-robin job numbers | immediately (`Blocked`) |
//! | [`RandomSolver`] | shuffled job numbers | at the deadline (`Timeout`) |
//! | [`GreedySolver`] | priority-rule list scheduling | immediately (`Blocked`) |
//! | [`DescentSolver`] | steepest descent on N5 moves | local optimum or deadline |
//! | [`TabuSolver`] | tabu search on N5 moves | iteration cap or deadline |
//!
//! The deadline is checked once per outer iteration; an iteration in
//! progress always completes.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7
//! - Nowicki & Smutnicki (1996), "A Fast Taboo Search Algorithm for the Job
//!   Shop Problem"
//! - Glover & Laguna (1997), "Tabu Search"

mod basic;
mod descent;
mod greedy;
mod random;
mod tabu;

pub use basic::BasicSolver;
pub use descent::DescentSolver;
pub use greedy::GreedySolver;
pub use random::RandomSolver;
pub use tabu::{TabuList, TabuMove, TabuSearch, TabuSolver};

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Schedule};

/// Why a solver returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExitCause {
    /// The deadline passed while the search could still have continued.
    Timeout,
    /// The search ran to completion: construction finished, a local
    /// optimum was reached or the iteration cap was hit.
    Blocked,
}

impl fmt::Display for ExitCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCause::Timeout => f.write_str("Timeout"),
            ExitCause::Blocked => f.write_str("Blocked"),
        }
    }
}

/// A monotonic point in time after which solvers stop iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(Instant);

impl Deadline {
    /// A deadline at the given instant.
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }

    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    /// Whether the deadline has been reached.
    #[inline]
    pub fn is_past(&self) -> bool {
        Instant::now() >= self.0
    }

    /// Time left before the deadline (zero once past).
    pub fn remaining(&self) -> Duration {
        self.0.saturating_duration_since(Instant::now())
    }

    /// The underlying instant.
    pub fn instant(&self) -> Instant {
        self.0
    }
}

/// Outcome of a solver run.
#[derive(Debug, Clone)]
pub struct SolveResult<'a> {
    /// Best schedule found.
    pub schedule: Schedule<'a>,
    /// Why the solver stopped.
    pub exit_cause: ExitCause,
}

impl<'a> SolveResult<'a> {
    /// Creates a result.
    pub fn new(schedule: Schedule<'a>, exit_cause: ExitCause) -> Self {
        Self {
            schedule,
            exit_cause,
        }
    }

    /// Makespan of the returned schedule.
    pub fn makespan(&self) -> i64 {
        self.schedule.makespan()
    }
}

/// Common contract of all solvers.
///
/// Implementations own no state across calls; each call builds its own
/// encodings and search structures.
pub trait Solver: Send + Sync + fmt::Debug {
    /// Short description, e.g. `greedy(EST_LRPT)`.
    fn name(&self) -> String;

    /// Solves the instance, stopping no later than one outer iteration
    /// past the deadline.
    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> SolveResult<'a>;
}
