//! Crate-wide error type.
//!
//! Infeasible encodings are not errors: `ResourceOrder::to_schedule`
//! returns `None` for them and the search loops simply discard the
//! candidate. Everything here terminates a run.

use thiserror::Error;

use crate::validation::ValidationError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, configuring or reporting a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid instance: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    #[error("unknown solver \"{0}\"")]
    UnknownSolver(String),

    #[error("unknown instance \"{0}\"")]
    UnknownInstance(String),

    #[error("solver \"{solver}\" returned an invalid schedule for \"{instance}\"")]
    InvalidSchedule { solver: String, instance: String },

    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}
