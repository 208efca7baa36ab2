//! Run configuration.
//!
//! A benchmark run is described by a TOML file and/or command-line flags:
//! which solvers to compare on which instances, the per-solver time budget,
//! where instance files live and where to write the CSV report.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use u_jobshop::config::RunConfig;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     timeout_secs = 2
//!     solvers = ["greedy_est_lrpt", "descent", "long_tabu"]
//!     instances = ["ft06", "la01"]
//!
//!     [[tabu]]
//!     name = "long_tabu"
//!     max_iterations = 20000
//!     tenure = 12
//! "#).unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(2));
//! assert_eq!(config.tabu.len(), 1);
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings of one benchmark run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Time budget of each (instance, solver) pair, in seconds.
    pub timeout_secs: u64,
    /// Directory holding instance files, one file per instance name.
    pub instance_dir: PathBuf,
    /// Solver names, looked up in the solver catalog.
    pub solvers: Vec<String>,
    /// Instance names.
    pub instances: Vec<String>,
    /// CSV report path; no report is written when absent.
    pub output: Option<PathBuf>,
    /// Seed of the random solver, for reproducible runs.
    pub random_seed: Option<u64>,
    /// Extra tabu configurations registered in the catalog.
    pub tabu: Vec<TabuEntry>,
}

/// A named tabu-search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TabuEntry {
    /// Catalog name.
    pub name: String,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Iterations a reversed move stays forbidden.
    pub tenure: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 1,
            instance_dir: PathBuf::from("instances"),
            solvers: Vec::new(),
            instances: Vec::new(),
            output: None,
            random_seed: None,
            tabu: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Time budget of each (instance, solver) pair.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Path of an instance file.
    pub fn instance_path(&self, name: &str) -> PathBuf {
        self.instance_dir.join(name)
    }

    /// Sets the time budget in seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Sets the instance directory.
    pub fn with_instance_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.instance_dir = dir.into();
        self
    }

    /// Adds a solver name.
    pub fn with_solver(mut self, name: impl Into<String>) -> Self {
        self.solvers.push(name.into());
        self
    }

    /// Adds an instance name.
    pub fn with_instance(mut self, name: impl Into<String>) -> Self {
        self.instances.push(name.into());
        self
    }

    /// Sets the CSV report path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Sets the random solver seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Registers an extra tabu configuration.
    pub fn with_tabu(
        mut self,
        name: impl Into<String>,
        max_iterations: usize,
        tenure: usize,
    ) -> Self {
        self.tabu.push(TabuEntry {
            name: name.into(),
            max_iterations,
            tenure,
        });
        self
    }
}
