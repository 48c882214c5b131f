//! Error types for the Rentflow library.
//!
//! Every input constraint violation surfaces as [`RentflowError::InvalidArgument`];
//! arithmetic that cannot produce a finite amount surfaces as
//! [`RentflowError::ComputationOverflow`]. Neither is recovered internally.

use thiserror::Error;

/// A specialized Result type for Rentflow operations.
pub type RentflowResult<T> = Result<T, RentflowError>;

/// The main error type for Rentflow operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RentflowError {
    /// An input violates its stated constraint.
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the offending input.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A computation could not produce a finite amount.
    #[error("Computation overflow in {operation}")]
    ComputationOverflow {
        /// The operation that overflowed.
        operation: String,
    },
}

impl RentflowError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a computation overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::ComputationOverflow {
            operation: operation.into(),
        }
    }

    /// Renames the rejected field, e.g. `date` to `move_in_date`.
    #[must_use]
    pub fn with_field(self, name: impl Into<String>) -> Self {
        match self {
            Self::InvalidArgument { reason, .. } => Self::InvalidArgument {
                field: name.into(),
                reason,
            },
            other => other,
        }
    }

    /// Returns true if this error was caused by caller input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns the name of the rejected field, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            Self::ComputationOverflow { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RentflowError::invalid_argument("duration_months", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid argument `duration_months`: must be at least 1"
        );
        assert!(err.is_invalid_argument());
        assert_eq!(err.field(), Some("duration_months"));
    }

    #[test]
    fn test_with_field() {
        let err = RentflowError::invalid_argument("date", "cannot parse").with_field("move_in_date");
        assert_eq!(err.field(), Some("move_in_date"));

        let overflow = RentflowError::overflow("proration").with_field("ignored");
        assert_eq!(overflow, RentflowError::overflow("proration"));
    }

    #[test]
    fn test_overflow_error() {
        let err = RentflowError::overflow("remaining months cost");
        assert!(err.to_string().contains("remaining months cost"));
        assert!(!err.is_invalid_argument());
        assert_eq!(err.field(), None);
    }
}
