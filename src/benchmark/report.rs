//! Comparison report: one row per (instance, solver) pair.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::solver::ExitCause;

/// CSV header, in column order.
pub const CSV_HEADER: &str = "instance,solver,runtime_ms,makespan,best_known,deviation_pct";

/// Result of one solver on one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Instance name.
    pub instance: String,
    /// Number of jobs of the instance.
    pub num_jobs: usize,
    /// Number of machines of the instance.
    pub num_machines: usize,
    /// Catalog name of the solver.
    pub solver: String,
    /// Wall-clock solve time (ms).
    pub runtime_ms: u64,
    /// Makespan of the returned schedule.
    pub makespan: i64,
    /// Reference makespan, if known.
    pub best_known: Option<i64>,
    /// Percentage above the reference.
    pub deviation_pct: Option<f64>,
    /// Why the solver stopped.
    pub exit_cause: ExitCause,
}

/// Averages of one solver over every instance of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSummary {
    /// Catalog name of the solver.
    pub solver: String,
    /// Number of instances solved.
    pub runs: usize,
    /// Mean solve time (ms).
    pub avg_runtime_ms: f64,
    /// Mean deviation over the instances with a reference makespan.
    pub avg_deviation_pct: Option<f64>,
}

/// Append-only report sink, exported as CSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvReport {
    rows: Vec<ReportRow>,
}

impl CsvReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Per-solver averages, in order of first appearance.
    pub fn summaries(&self) -> Vec<SolverSummary> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: BTreeMap<&str, Vec<&ReportRow>> = BTreeMap::new();
        for row in &self.rows {
            let group = groups.entry(row.solver.as_str()).or_default();
            if group.is_empty() {
                order.push(row.solver.as_str());
            }
            group.push(row);
        }

        order
            .into_iter()
            .map(|solver| {
                let rows = &groups[solver];
                let runs = rows.len();
                let avg_runtime_ms =
                    rows.iter().map(|r| r.runtime_ms as f64).sum::<f64>() / runs as f64;
                let deviations: Vec<f64> = rows.iter().filter_map(|r| r.deviation_pct).collect();
                let avg_deviation_pct = if deviations.is_empty() {
                    None
                } else {
                    Some(deviations.iter().sum::<f64>() / deviations.len() as f64)
                };
                SolverSummary {
                    solver: solver.to_string(),
                    runs,
                    avg_runtime_ms,
                    avg_deviation_pct,
                }
            })
            .collect()
    }

    /// Renders the report as CSV; unknown values are left empty.
    pub fn to_csv_string(&self) -> String {
        let mut output = String::new();
        output.push_str(CSV_HEADER);
        output.push('\n');

        for row in &self.rows {
            let best = row.best_known.map(|b| b.to_string()).unwrap_or_default();
            let deviation = row
                .deviation_pct
                .map(|d| format!("{d:.2}"))
                .unwrap_or_default();
            // Writing to a String cannot fail.
            let _ = writeln!(
                output,
                "{},{},{},{},{},{}",
                csv_field(&row.instance),
                csv_field(&row.solver),
                row.runtime_ms,
                row.makespan,
                best,
                deviation
            );
        }
        output
    }

    /// Writes the CSV to a file, replacing its content.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_csv_string())?;
        Ok(())
    }
}

/// Quotes a text field containing any CSV delimiter (RFC 4180); embedded
/// quotes are doubled.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
