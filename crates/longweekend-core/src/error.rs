//! Error types for longweekend-core.
//!
//! The calculation itself never fails. Errors are raised at the
//! boundaries: when parsing input and when constructing values whose
//! invariants the caller violated.

use thiserror::Error;

/// The main error type for long weekend operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LongWeekendError {
    /// A value violates the calculator's input contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error parsing a date, weekday or holiday line.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias for long weekend operations.
pub type Result<T> = std::result::Result<T, LongWeekendError>;
