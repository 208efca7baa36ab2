//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Machine utilization | Busy time / makespan, per machine |
//! | Avg utilization | Mean of the machine utilizations |
//! | Deviation | 100 · (C_max − best known) / best known |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Makespan: latest completion time.
    pub makespan: i64,
    /// Utilization of each machine (0.0..1.0), indexed by machine.
    pub utilization_by_machine: Vec<f64>,
    /// Average machine utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Reference makespan, when the instance is a known benchmark.
    pub best_known: Option<i64>,
    /// Percentage above the reference makespan.
    pub deviation_pct: Option<f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    ///
    /// # Arguments
    /// * `schedule` - The schedule to evaluate.
    /// * `best_known` - Reference makespan of the instance, if any.
    pub fn calculate(schedule: &Schedule<'_>, best_known: Option<i64>) -> Self {
        let makespan = schedule.makespan();
        let num_machines = schedule.instance().num_machines;

        let utilization_by_machine: Vec<f64> = (0..num_machines)
            .map(|m| schedule.machine_utilization(m).unwrap_or(0.0))
            .collect();
        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            utilization_by_machine.iter().sum::<f64>() / utilization_by_machine.len() as f64
        };

        Self {
            makespan,
            utilization_by_machine,
            avg_utilization,
            best_known,
            deviation_pct: best_known.and_then(|best| deviation_pct(makespan, best)),
        }
    }

    /// Whether the schedule is within `max_deviation_pct` of the reference.
    ///
    /// Always true when no reference is known.
    pub fn meets_threshold(&self, max_deviation_pct: f64) -> bool {
        self.deviation_pct
            .map_or(true, |d| d <= max_deviation_pct)
    }
}

/// Percentage by which `makespan` exceeds `best_known`.
///
/// Returns `None` for a non-positive reference.
pub fn deviation_pct(makespan: i64, best_known: i64) -> Option<f64> {
    if best_known <= 0 {
        return None;
    }
    Some(100.0 * (makespan - best_known) as f64 / best_known as f64)
}
