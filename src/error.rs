//! Error types for transfer function evaluation.

use crate::complex::Complex;
use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the evaluation kernel.
///
/// Both variants are deterministic consequences of the input; retrying the
/// same call yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The denominator evaluated to exactly `0 + 0i` (a pole).
    #[error("Division by zero: denominator vanishes at {at}")]
    DivisionByZero {
        /// Point at which the division was attempted
        at: Complex,
    },

    /// Malformed input, e.g. an empty coefficient sequence.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }
}
