//! Error types for denso operations.
//!
//! Every failure is a contract violation detected eagerly at the call
//! site; there is no retry or partial recovery.

use std::fmt;

/// Main error type for denso operations.
///
/// # Examples
///
/// ```
/// use denso::error::DensoError;
///
/// let err = DensoError::DimensionMismatch {
///     expected: "3x3".to_string(),
///     actual: "2x3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum DensoError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Index or range outside the valid bounds of a container.
    IndexOutOfBounds {
        /// Offending index
        index: usize,
        /// Exclusive upper bound
        bound: usize,
    },

    /// Scalar division by zero.
    DivideByZero {
        /// Operation that attempted the division
        context: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Operation requires a fitted model.
    NotFitted {
        /// Component that has not been fitted
        what: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for DensoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DensoError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            DensoError::IndexOutOfBounds { index, bound } => {
                write!(f, "index {index} out of bounds (len={bound})")
            }
            DensoError::DivideByZero { context } => {
                write!(f, "division by zero in {context}")
            }
            DensoError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            DensoError::NotFitted { what } => {
                write!(f, "{what} is not fitted; call fit() first")
            }
            DensoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DensoError {}

impl From<&str> for DensoError {
    fn from(msg: &str) -> Self {
        DensoError::Other(msg.to_string())
    }
}

impl From<String> for DensoError {
    fn from(msg: String) -> Self {
        DensoError::Other(msg)
    }
}

impl DensoError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, bound: usize) -> Self {
        Self::IndexOutOfBounds { index, bound }
    }

    /// Create an empty input error.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DensoError>;
