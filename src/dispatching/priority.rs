//! Named priority rules used by the greedy constructor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{rules, RuleEngine};

/// The eight priority rules of the greedy constructor.
///
/// Plain rules rank every dispatchable task by one criterion. EST-gated
/// rules first keep only the tasks with the minimum earliest start time,
/// then rank those by the same criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityRule {
    Spt,
    Lpt,
    Srpt,
    Lrpt,
    EstSpt,
    EstLpt,
    EstSrpt,
    EstLrpt,
}

impl PriorityRule {
    /// Every rule, plain ones first.
    pub const ALL: [PriorityRule; 8] = [
        PriorityRule::Spt,
        PriorityRule::Lpt,
        PriorityRule::Srpt,
        PriorityRule::Lrpt,
        PriorityRule::EstSpt,
        PriorityRule::EstLpt,
        PriorityRule::EstSrpt,
        PriorityRule::EstLrpt,
    ];

    /// Rule name, e.g. `EST_LRPT`.
    pub fn name(&self) -> &'static str {
        match self {
            PriorityRule::Spt => "SPT",
            PriorityRule::Lpt => "LPT",
            PriorityRule::Srpt => "SRPT",
            PriorityRule::Lrpt => "LRPT",
            PriorityRule::EstSpt => "EST_SPT",
            PriorityRule::EstLpt => "EST_LPT",
            PriorityRule::EstSrpt => "EST_SRPT",
            PriorityRule::EstLrpt => "EST_LRPT",
        }
    }

    /// Whether the rule filters by earliest start time first.
    pub fn is_est_gated(&self) -> bool {
        matches!(
            self,
            PriorityRule::EstSpt
                | PriorityRule::EstLpt
                | PriorityRule::EstSrpt
                | PriorityRule::EstLrpt
        )
    }

    /// Builds the rule engine implementing this rule.
    pub fn engine(&self) -> RuleEngine {
        let engine = if self.is_est_gated() {
            RuleEngine::new().with_rule(rules::Est)
        } else {
            RuleEngine::new()
        };
        match self {
            PriorityRule::Spt | PriorityRule::EstSpt => engine.with_tie_breaker(rules::Spt),
            PriorityRule::Lpt | PriorityRule::EstLpt => engine.with_tie_breaker(rules::Lpt),
            PriorityRule::Srpt | PriorityRule::EstSrpt => engine.with_tie_breaker(rules::Srpt),
            PriorityRule::Lrpt | PriorityRule::EstLrpt => engine.with_tie_breaker(rules::Lrpt),
        }
    }
}

impl fmt::Display for PriorityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriorityRule {
    type Err = String;

    /// Parses a rule name, case-insensitively (`est_lrpt`, `EST_LRPT`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriorityRule::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown priority rule \"{s}\""))
    }
}
