//! Error types for sizing calculations.

use thiserror::Error;

/// Reasons a sizing request is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// A field is out of range or malformed.
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        /// Request field name, or the result field that overflowed.
        field: &'static str,
        /// Constraint that was violated.
        reason: String,
    },

    /// An efficiency denominator is zero.
    #[error("division by zero: {field} must be nonzero")]
    DivisionByZero {
        /// Request field name.
        field: &'static str,
    },
}

impl SizingError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn division_by_zero(field: &'static str) -> Self {
        Self::DivisionByZero { field }
    }

    /// Stable snake-case tag for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::DivisionByZero { .. } => "division_by_zero",
        }
    }

    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } | Self::DivisionByZero { field } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, SizingError>;
