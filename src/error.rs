//! Error types.
//!
//! Every failure is fatal for a run. Parse errors carry the source name
//! and 1-based line number so the input file can be fixed and rerun.

use std::fmt;
use std::path::PathBuf;

use crate::validation::ValidationError;

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, TimesheetError>;

/// Top-level error for a timesheet run.
#[derive(Debug, thiserror::Error)]
pub enum TimesheetError {
    /// Opening, reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The project set cannot be sampled.
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// Input failed validation.
    #[error("invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
}

impl TimesheetError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<Vec<ValidationError>> for TimesheetError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A malformed input line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{source_name}:{line}: {kind}")]
pub struct ParseError {
    /// Name of the input (usually a file path).
    pub source_name: String,
    /// 1-based line number.
    pub line: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(source_name: &str, line: usize, kind: ParseErrorKind) -> Self {
        Self {
            source_name: source_name.to_string(),
            line,
            kind,
        }
    }
}

/// Categories of parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An expected separator (`": "`, `" - "`, `","`) is missing.
    MissingDelimiter(&'static str),
    /// A clock time did not match `h:mmAM`.
    InvalidTime(String),
    /// A weight is not a non-negative base-10 integer.
    InvalidWeight(String),
    /// A required field is blank.
    EmptyField(&'static str),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingDelimiter(d) => write!(f, "missing delimiter {d:?}"),
            ParseErrorKind::InvalidTime(t) => write!(f, "invalid time {t:?}"),
            ParseErrorKind::InvalidWeight(w) => write!(f, "invalid weight {w:?}"),
            ParseErrorKind::EmptyField(name) => write!(f, "empty {name}"),
        }
    }
}

/// Errors building a [`crate::sampling::WeightedSampler`].
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// No projects to draw from.
    #[error("project set is empty")]
    Empty,

    /// Every project has weight zero.
    #[error("all project weights are zero")]
    AllZero,

    /// The weights do not form a valid distribution.
    #[error("invalid project weights: {0}")]
    Invalid(#[from] rand::distr::weighted::Error),
}
