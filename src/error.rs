//! Error types for constraint evaluation

use thiserror::Error;

/// Main error type for constraint parsing and evaluation
///
/// An absent input value is not an error: it evaluates to `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("Malformed operand '{operand}': {reason}")]
    MalformedOperand { operand: String, reason: String },
}

impl ConstraintError {
    pub(crate) fn malformed(operand: &str, reason: impl Into<String>) -> Self {
        ConstraintError::MalformedOperand {
            operand: operand.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<ConstraintError> for pyo3::PyErr {
    fn from(err: ConstraintError) -> pyo3::PyErr {
        use pyo3::exceptions::PyValueError;

        match err {
            ConstraintError::InvalidConstraint(msg) => {
                PyValueError::new_err(format!("Invalid constraint: {}", msg))
            }
            ConstraintError::MalformedOperand { operand, reason } => {
                PyValueError::new_err(format!("Malformed operand '{}': {}", operand, reason))
            }
        }
    }
}

/// Result type alias for constraint evaluation
pub type Result<T> = std::result::Result<T, ConstraintError>;
