//! Named solver registry.

use crate::config::RunConfig;
use crate::dispatching::PriorityRule;
use crate::error::{Error, Result};
use crate::solver::{BasicSolver, DescentSolver, GreedySolver, RandomSolver, Solver, TabuSolver};

/// Tabu presets registered as `tabu_1` .. `tabu_6`: (max iterations, tenure).
pub const TABU_PRESETS: [(usize, usize); 6] = [
    (1, 1),
    (10, 3),
    (100, 5),
    (1000, 10),
    (5000, 10),
    (50000, 15),
];

/// Solvers addressable by name, in registration order.
#[derive(Debug, Default)]
pub struct SolverCatalog {
    entries: Vec<(String, Box<dyn Solver>)>,
}

impl SolverCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in solvers.
    ///
    /// `basic`, `random`, `greedy_<rule>` for each priority rule (e.g.
    /// `greedy_est_lrpt`), `descent`, `tabu_1` .. `tabu_6`.
    pub fn builtin() -> Self {
        let mut catalog = Self::new()
            .with_solver("basic", BasicSolver::new())
            .with_solver("random", RandomSolver::new());

        for rule in PriorityRule::ALL {
            let name = format!("greedy_{}", rule.name().to_ascii_lowercase());
            catalog.register(name, GreedySolver::new(rule));
        }

        catalog.register("descent", DescentSolver::new());
        for (i, (max_iterations, tenure)) in TABU_PRESETS.into_iter().enumerate() {
            catalog.register(format!("tabu_{}", i + 1), TabuSolver::new(max_iterations, tenure));
        }
        catalog
    }

    /// The built-in solvers plus the tabu entries of a run configuration.
    ///
    /// A configured random seed replaces the default `random` solver.
    pub fn from_config(config: &RunConfig) -> Self {
        let mut catalog = Self::builtin();
        if let Some(seed) = config.random_seed {
            catalog.register("random", RandomSolver::new().with_seed(seed));
        }
        for entry in &config.tabu {
            catalog.register(
                entry.name.clone(),
                TabuSolver::new(entry.max_iterations, entry.tenure),
            );
        }
        catalog
    }

    /// Registers a solver, replacing any solver with the same name.
    pub fn register(&mut self, name: impl Into<String>, solver: impl Solver + 'static) {
        let name = name.into();
        let solver: Box<dyn Solver> = Box::new(solver);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = solver,
            None => self.entries.push((name, solver)),
        }
    }

    /// Registers a solver (builder form).
    pub fn with_solver(mut self, name: impl Into<String>, solver: impl Solver + 'static) -> Self {
        self.register(name, solver);
        self
    }

    /// Looks a solver up by name.
    pub fn get(&self, name: &str) -> Option<&dyn Solver> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_ref())
    }

    /// Looks a solver up by name, failing with [`Error::UnknownSolver`].
    pub fn resolve(&self, name: &str) -> Result<&dyn Solver> {
        self.get(name)
            .ok_or_else(|| Error::UnknownSolver(name.to_string()))
    }

    /// Whether a solver is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of registered solvers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
