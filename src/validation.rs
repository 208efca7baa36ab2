//! Structural validation of problem instances.
//!
//! Checks that an instance is a proper job shop before any solver runs:
//! - Every job has exactly one operation per machine
//! - Machine references are in range
//! - Durations are positive
//!
//! Solvers and encodings assume these invariants and index without further
//! checks.

use std::collections::HashSet;

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The instance has no job or no machine.
    EmptyInstance,
    /// A job does not have exactly one operation per machine.
    RaggedJob,
    /// An operation references a machine that doesn't exist.
    InvalidMachineReference,
    /// A job visits the same machine twice.
    DuplicateMachine,
    /// An operation has a zero or negative duration.
    NonPositiveDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an instance.
///
/// Checks:
/// 1. At least one job and one machine
/// 2. `jobs.len() == num_jobs`
/// 3. Each job has `num_machines` operations
/// 4. All machine references are `< num_machines`
/// 5. No job visits a machine twice
/// 6. All durations are `>= 1`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    if instance.num_jobs == 0 || instance.num_machines == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInstance,
            format!(
                "Instance '{}' has {} jobs and {} machines",
                instance.name, instance.num_jobs, instance.num_machines
            ),
        ));
    }

    if instance.jobs.len() != instance.num_jobs {
        errors.push(ValidationError::new(
            ValidationErrorKind::RaggedJob,
            format!(
                "Instance declares {} jobs but lists {}",
                instance.num_jobs,
                instance.jobs.len()
            ),
        ));
    }

    for (job, ops) in instance.jobs.iter().enumerate() {
        if ops.len() != instance.num_machines {
            errors.push(ValidationError::new(
                ValidationErrorKind::RaggedJob,
                format!(
                    "Job {job} has {} operations, expected {}",
                    ops.len(),
                    instance.num_machines
                ),
            ));
        }

        let mut seen = HashSet::new();
        for (op, operation) in ops.iter().enumerate() {
            if operation.machine >= instance.num_machines {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidMachineReference,
                    format!(
                        "Operation ({job},{op}) references unknown machine {}",
                        operation.machine
                    ),
                ));
            } else if !seen.insert(operation.machine) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateMachine,
                    format!("Job {job} visits machine {} twice", operation.machine),
                ));
            }

            if operation.duration < 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveDuration,
                    format!(
                        "Operation ({job},{op}) has duration {}",
                        operation.duration
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
