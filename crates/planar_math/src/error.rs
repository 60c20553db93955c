//! Errors raised by the few operations that can refuse their input.
//!
//! Most numeric edge cases are not errors here: division by zero,
//! normalizing a zero vector and inverting a singular matrix all propagate
//! IEEE-754 `NaN`/infinity values instead. Only two things fail outright:
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`MalformedInput`](MathError::MalformedInput) | building a [`Matrix3`](crate::Matrix3) from badly shaped rows, multiplying by an unsupported operand |
//! | [`UndefinedGeometry`](MathError::UndefinedGeometry) | [`Vector2::direction`](crate::Vector2::direction) on a zero, infinite or `NaN` vector |

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The caller handed over something with the wrong shape or kind.
    #[error("Malformed input to {operation}: {reason}")]
    MalformedInput { operation: String, reason: String },

    /// The requested quantity does not exist for this value.
    #[error("Undefined geometric operation {operation}: {reason}")]
    UndefinedGeometry { operation: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MathError>;

impl MathError {
    pub fn malformed_input(operation: &str, reason: &str) -> Self {
        Self::MalformedInput {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn undefined_geometry(operation: &str, reason: &str) -> Self {
        Self::UndefinedGeometry {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_message() {
        let err = MathError::malformed_input("Matrix3::from_row_slices", "expected 3 rows, got 2");
        assert_eq!(
            err.to_string(),
            "Malformed input to Matrix3::from_row_slices: expected 3 rows, got 2"
        );
    }

    #[test]
    fn undefined_geometry_message() {
        let err = MathError::undefined_geometry("Vector2::direction", "zero vector");
        assert!(err.to_string().contains("Vector2::direction"));
        assert!(err.to_string().contains("zero vector"));
    }

    #[test]
    fn kinds_are_distinct() {
        assert_ne!(
            MathError::malformed_input("op", "reason"),
            MathError::undefined_geometry("op", "reason")
        );
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MathError>();
    }
}
