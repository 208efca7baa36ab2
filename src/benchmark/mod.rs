//! Benchmark orchestration: solver catalog, KPIs and CSV reporting.
//!
//! [`Benchmark`] runs each configured solver on each configured instance
//! under a per-run deadline, checks the returned schedules and collects
//! one [`ReportRow`] per pair into a [`CsvReport`].
//!
//! # Usage
//!
//! ```no_run
//! use u_jobshop::benchmark::Benchmark;
//! use u_jobshop::config::RunConfig;
//!
//! let config = RunConfig::new()
//!     .with_solver("greedy_est_lrpt")
//!     .with_solver("tabu_4")
//!     .with_instance("ft06")
//!     .with_output("results.csv");
//!
//! let report = Benchmark::new(config).run()?;
//! for summary in report.summaries() {
//!     println!("{}: {:?}", summary.solver, summary.avg_deviation_pct);
//! }
//! # Ok::<(), u_jobshop::Error>(())
//! ```

mod catalog;
mod kpi;
mod report;
mod runner;

pub use catalog::{SolverCatalog, TABU_PRESETS};
pub use kpi::{deviation_pct, ScheduleKpi};
pub use report::{CsvReport, ReportRow, SolverSummary, CSV_HEADER};
pub use runner::Benchmark;
