//! Benchmark runner.

use std::time::Instant;

use tracing::{error, info};

use super::{CsvReport, ReportRow, ScheduleKpi, SolverCatalog};
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::io::{best_known, is_known, load_instance};
use crate::solver::{Deadline, Solver};

/// Runs every configured solver on every configured instance.
///
/// All names are checked before any solving begins; an unknown solver or
/// instance aborts the run.
#[derive(Debug)]
pub struct Benchmark {
    config: RunConfig,
    catalog: SolverCatalog,
}

impl Benchmark {
    /// Creates a benchmark with the built-in catalog plus the configured
    /// tabu entries.
    pub fn new(config: RunConfig) -> Self {
        let catalog = SolverCatalog::from_config(&config);
        Self { config, catalog }
    }

    /// Replaces the solver catalog.
    pub fn with_catalog(mut self, catalog: SolverCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The solver catalog.
    pub fn catalog(&self) -> &SolverCatalog {
        &self.catalog
    }

    /// Runs the benchmark and returns one row per (instance, solver) pair.
    ///
    /// Each solver gets a fresh deadline of `now + timeout`. The report is
    /// also written to the configured output path, if any.
    pub fn run(&self) -> Result<CsvReport> {
        let solvers = self.resolve_solvers()?;
        self.check_instances()?;

        info!(
            event = "benchmark_start",
            solvers = solvers.len(),
            instances = self.config.instances.len(),
            timeout_secs = self.config.timeout_secs,
        );

        let mut report = CsvReport::new();
        for instance_name in &self.config.instances {
            let instance = load_instance(self.config.instance_path(instance_name))?;
            let reference = best_known(instance_name);

            for &(solver_name, solver) in &solvers {
                let started = Instant::now();
                let result = solver.solve(&instance, Deadline::after(self.config.timeout()));
                let runtime_ms = started.elapsed().as_millis() as u64;

                if !result.schedule.is_valid() {
                    error!(
                        event = "invalid_schedule",
                        instance = %instance_name,
                        solver = %solver_name,
                        violations = result.schedule.violations().len(),
                    );
                    return Err(Error::InvalidSchedule {
                        solver: solver_name.to_string(),
                        instance: instance_name.clone(),
                    });
                }

                let kpi = ScheduleKpi::calculate(&result.schedule, reference);
                info!(
                    event = "solve_end",
                    instance = %instance_name,
                    solver = %solver_name,
                    makespan = kpi.makespan,
                    runtime_ms,
                    exit = %result.exit_cause,
                );

                report.push(ReportRow {
                    instance: instance_name.clone(),
                    num_jobs: instance.num_jobs,
                    num_machines: instance.num_machines,
                    solver: solver_name.to_string(),
                    runtime_ms,
                    makespan: kpi.makespan,
                    best_known: kpi.best_known,
                    deviation_pct: kpi.deviation_pct,
                    exit_cause: result.exit_cause,
                });
            }
        }

        if let Some(path) = &self.config.output {
            report.write_to(path)?;
            info!(event = "report_written", path = %path.display(), rows = report.rows().len());
        }
        Ok(report)
    }

    fn resolve_solvers(&self) -> Result<Vec<(&str, &dyn Solver)>> {
        self.config
            .solvers
            .iter()
            .map(|name| match self.catalog.resolve(name) {
                Ok(solver) => Ok((name.as_str(), solver)),
                Err(e) => {
                    let available: Vec<&str> = self.catalog.names().collect();
                    error!(event = "unknown_solver", solver = %name, ?available);
                    Err(e)
                }
            })
            .collect()
    }

    /// An instance is known if it has a reference makespan or a file in
    /// the instance directory.
    fn check_instances(&self) -> Result<()> {
        for name in &self.config.instances {
            if !is_known(name) && !self.config.instance_path(name).is_file() {
                error!(event = "unknown_instance", instance = %name);
                return Err(Error::UnknownInstance(name.clone()));
            }
        }
        Ok(())
    }
}
