//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules lexicographically: the first rule decides,
//! the next one is consulted only when the previous scores tie.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Task;

/// A composable rule engine for task prioritization.
///
/// When every rule ties, the task met first in the candidate slice wins.
///
/// # Example
/// ```
/// use u_jobshop::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Est)
///     .with_tie_breaker(rules::Lrpt);
/// assert_eq!(engine.rule_names(), vec!["EST", "LRPT"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after the rules added before it.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the highest-priority task, or `None` for an empty slice.
    pub fn select_best(&self, tasks: &[Task], context: &DispatchContext<'_>) -> Option<Task> {
        let mut best: Option<Task> = None;
        for &task in tasks {
            best = match best {
                Some(b) if self.compare(task, b, context) != Ordering::Less => Some(b),
                _ => Some(task),
            };
        }
        best
    }

    /// Evaluates a single task and returns scores from each rule.
    pub fn evaluate(&self, task: Task, context: &DispatchContext<'_>) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(task, context))
            .collect()
    }

    fn compare(&self, a: Task, b: Task, context: &DispatchContext<'_>) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
