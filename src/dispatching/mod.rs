//! Dispatching rules and rule engine for greedy construction.
//!
//! Provides priority-based dispatching rules (SPT, LPT, SRPT, LRPT, EST)
//! and a composable rule engine that applies them in sequence, each later
//! rule only breaking the ties of the previous ones.
//!
//! # Usage
//!
//! ```
//! use u_jobshop::dispatching::{rules, DispatchContext, RuleEngine};
//! use u_jobshop::models::{Instance, Task};
//!
//! let instance = Instance::from_pairs("demo", 1, &[&[(0, 5)], &[(0, 2)]]);
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Est)
//!     .with_tie_breaker(rules::Spt);
//!
//! let context = DispatchContext::new(&instance);
//! let next = engine.select_best(&[Task::new(0, 0), Task::new(1, 0)], &context);
//! assert_eq!(next, Some(Task::new(1, 0)));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
mod priority;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;
pub use priority::PriorityRule;

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates the priority of a dispatchable task.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for tasks that should be scheduled first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "EST").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a task given the current dispatch state.
    fn evaluate(&self, task: Task, context: &DispatchContext<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
