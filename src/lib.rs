//! Job-shop scheduling engine.
//!
//! Builds and improves schedules for the classical job-shop problem
//! (JSSP): n jobs, each a fixed sequence of operations, one per machine;
//! every machine runs one operation at a time; the goal is a short
//! makespan.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Instance`, `Task`, `Schedule`,
//!   `Assignment`, `Violation`
//! - **`encoding`**: `JobNumbers` and `ResourceOrder` solution encodings and
//!   their decoding into semi-active schedules
//! - **`dispatching`**: Priority rules (SPT, LPT, SRPT, LRPT and their EST
//!   variants) and the rule engine behind greedy construction
//! - **`neighborhood`**: Critical-path blocks and boundary swaps
//! - **`solver`**: Basic, random, greedy, descent and tabu solvers behind
//!   one `Solver` contract
//! - **`validation`**: Instance integrity checks
//! - **`io`**: Instance text format and best-known makespans
//! - **`config`**: TOML run configuration
//! - **`benchmark`**: Solver catalog, KPIs, CSV report and runner
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use u_jobshop::models::Instance;
//! use u_jobshop::solver::{Deadline, Solver, TabuSolver};
//!
//! let instance = Instance::from_pairs(
//!     "2x2",
//!     2,
//!     &[&[(0, 3), (1, 2)], &[(1, 2), (0, 4)]],
//! );
//! let result = TabuSolver::new(100, 5).solve(&instance, Deadline::after(Duration::from_secs(1)));
//! assert!(result.schedule.is_valid());
//! assert_eq!(result.makespan(), 7);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Brucker (2007), "Scheduling Algorithms"
//! - Nowicki & Smutnicki (1996), "A Fast Taboo Search Algorithm for the Job
//!   Shop Problem"

pub mod benchmark;
pub mod config;
pub mod dispatching;
pub mod encoding;
pub mod error;
pub mod io;
pub mod models;
pub mod neighborhood;
pub mod solver;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
