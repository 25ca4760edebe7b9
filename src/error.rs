//! Error type shared by every fallible operation in the crate.

use thiserror::Error as ThisError;

/// Errors reported by graph construction and tour heuristics.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Malformed or insufficient point set, or an invalid argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A vertex index outside `0..n`, or a degenerate `(i, i)` pair.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    /// A heuristic could not produce a valid tour.
    #[error("construction failed: {0}")]
    Construction(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn index_out_of_range(message: impl Into<String>) -> Self {
        Self::IndexOutOfRange(message.into())
    }

    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction(message.into())
    }
}
