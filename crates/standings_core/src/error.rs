//! Errors raised while loading standings

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StandingsError>;

#[derive(Debug, Error)]
pub enum StandingsError {
    /// A data line that cannot become a [`TeamRecord`](crate::TeamRecord).
    /// `line` is 1-based and counts the header.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("failed to read standings: {0}")]
    Read(#[from] csv::Error),
}

impl StandingsError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
