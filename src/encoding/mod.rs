//! Solution encodings.
//!
//! Two interconvertible representations of a candidate solution. Both are
//! decoded into a [`Schedule`] by deterministic list scheduling: every
//! operation starts as soon as both its job predecessor and its machine
//! predecessor have finished (a semi-active schedule).
//!
//! - **JobNumbers** (operation-based): a sequence of job indices; the k-th
//!   occurrence of job `j` dispatches the k-th operation of `j`.
//! - **ResourceOrder** (machine-based): for each machine, the order in which
//!   its operations are processed.
//!
//! # Reference
//! - Bierwirth (1995), "A generalized permutation approach to JSSP"
//! - Cheng et al. (1996), "A Tutorial Survey of JSSP using GA"

mod job_numbers;
mod resource_order;

pub use job_numbers::JobNumbers;
pub use resource_order::ResourceOrder;

use crate::models::{Instance, Schedule};

/// A representation of a solution that can be decoded into a schedule.
pub trait Encoding<'a> {
    /// The instance this encoding belongs to.
    fn instance(&self) -> &'a Instance;

    /// Decodes into a timed schedule.
    ///
    /// Returns `None` when the encoding does not describe a feasible
    /// schedule (incomplete, or cyclic for a resource order).
    fn to_schedule(&self) -> Option<Schedule<'a>>;
}
