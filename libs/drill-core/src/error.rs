//! Error types for drill-core.

use thiserror::Error;

/// Result type alias using DrillError.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors that stop a drill run.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("source contains no records")]
    EmptySource,

    #[error("match percentage is undefined for an answer with no words")]
    UndefinedPercentage,

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decomposing a stored answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("answer is empty")]
    EmptyAnswer,
}

impl ParseError {
    /// Attach the question line of the offending record.
    pub fn at_line(self, line: usize) -> DrillError {
        DrillError::MalformedRecord {
            line,
            reason: self.to_string(),
        }
    }
}
