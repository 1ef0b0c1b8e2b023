//! # Error reporting
//!
//! Errors raised by this crate itself, as opposed to a backend rejecting an operation. A backend
//! rejection is never an `Error`: it is reported as the backend's own `false` or `SolveStatus`.
use std::error;
use std::fmt;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Misuse of the expression algebra or of the solver facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A "not equal" relation was requested.
    ///
    /// Linear programs only know `<=`, `>=` and `==` rows.
    UnsupportedRelation,
    /// An expression refers to column index zero; columns are numbered from one.
    InvalidColumn,
    /// A row index outside of `1..=nr_rows`.
    RowOutOfRange {
        /// Requested row.
        index: usize,
        /// Number of rows in the model at the moment of the request.
        nr_rows: usize,
    },
    /// A column index outside of `1..=nr_columns`.
    ColumnOutOfRange {
        /// Requested column.
        index: usize,
        /// Number of columns in the model at the moment of the request.
        nr_columns: usize,
    },
}

impl Error {
    /// Semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnsupportedRelation => "RELATION_UNSUPPORTED",
            Error::InvalidColumn => "COLUMN_INVALID",
            Error::RowOutOfRange { .. } => "ROW_OUT_OF_RANGE",
            Error::ColumnOutOfRange { .. } => "COLUMN_OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedRelation => write!(
                f, "[{}] Inequality is not supported as a constraint type", self.code(),
            ),
            Error::InvalidColumn => write!(
                f, "[{}] Column index 0 does not exist, columns are numbered from 1", self.code(),
            ),
            Error::RowOutOfRange { index, nr_rows } => write!(
                f, "[{}] Row {} does not exist, the model has {} rows", self.code(), index, nr_rows,
            ),
            Error::ColumnOutOfRange { index, nr_columns } => write!(
                f, "[{}] Column {} does not exist, the model has {} columns",
                self.code(), index, nr_columns,
            ),
        }
    }
}

impl error::Error for Error {}
