//! Error types for the spatial-rotations library
//!
//! Every fallible operation in the crate reports one of the [`MathError`] kinds.
//! All errors use the `thiserror` crate for automatic trait implementations.
//!
//! Two conversions can still produce a usable value when their input degenerates
//! (a quaternion with an insignificant rotation angle, an axis-angle pair with a
//! zero axis). Those return a [`Degenerate`] error that carries the best-effort
//! value next to the error kind, so callers decide whether the condition is fatal.

use std::fmt;
use thiserror::Error;

/// Main result type used throughout the spatial-rotations library
pub type MathResult<T> = Result<T, MathError>;

/// Main error type for the spatial-rotations library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A zero-length vector was normalized or used as a direction
    #[error("Length is zero")]
    ZeroLength,

    /// A zero quaternion was normalized or inverted
    #[error("Magnitude is zero")]
    ZeroMagnitude,

    /// A singular matrix was inverted
    #[error("Determinant is zero")]
    ZeroDeterminant,

    /// Interpolation parameter outside [0, 1]
    #[error("Invalid interpolation parameter: t must lie in [0, 1]")]
    InvalidInterpolationParameter,

    /// Order string is not a permutation of X, Y and Z
    #[error("Invalid rotation order: expected a permutation of 'X', 'Y' and 'Z'")]
    InvalidRotationOrder,

    /// Euler extraction requested from a matrix without a full axis order
    #[error("Unsupported rotation order: must include 'X', 'Y' and 'Z'")]
    UnsupportedRotationOrder,

    /// Single-axis composition attempted on a matrix that already has three axes
    #[error("Cannot compose more than 3 axes")]
    TooManyAxes,

    /// Single-axis composition repeated an axis
    #[error("Cannot repeat a rotation axis")]
    DuplicateAxis,

    /// Single-axis composition with a matrix that is not a single-axis rotation
    #[error("Invalid axis rotation: operand is not a single-axis rotation")]
    InvalidAxisRotation,

    /// Rotation angle is numerically zero, so the axis is arbitrary
    #[error("Insignificant angle for rotation")]
    InsignificantAngle,

    /// A normalize step inside a composite operation failed
    #[error("Cannot normalize the result")]
    NormalizeFailed,
}

impl MathError {
    /// Whether the condition is informational rather than a hard failure.
    ///
    /// Only [`MathError::InsignificantAngle`] is soft: the input is a valid
    /// (identity-like) rotation whose axis simply cannot be recovered.
    pub fn is_soft(&self) -> bool {
        matches!(self, MathError::InsignificantAngle)
    }
}

/// An error that still carries a usable value.
///
/// Modelled after `std::sync::PoisonError`: the conversion failed to produce an
/// exact answer, but [`into_inner`](Self::into_inner) hands back the best-effort
/// value (always the identity rotation of the target representation). The `?`
/// operator escalates it to a plain [`MathError`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degenerate<T> {
    value: T,
    error: MathError,
}

impl<T> Degenerate<T> {
    pub fn new(value: T, error: MathError) -> Self {
        Self { value, error }
    }

    /// The best-effort value produced despite the error.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The underlying error kind.
    pub fn error(&self) -> MathError {
        self.error
    }

    /// Consume the error and keep the best-effort value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Whether the underlying condition is soft (see [`MathError::is_soft`]).
    pub fn is_soft(&self) -> bool {
        self.error.is_soft()
    }
}

impl<T> fmt::Display for Degenerate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for Degenerate<T> {}

impl<T> From<Degenerate<T>> for MathError {
    fn from(err: Degenerate<T>) -> Self {
        err.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_display() {
        let error = MathError::ZeroDeterminant;
        assert_eq!(error.to_string(), "Determinant is zero");
    }

    #[test]
    fn test_only_insignificant_angle_is_soft() {
        assert!(MathError::InsignificantAngle.is_soft());
        assert!(!MathError::ZeroMagnitude.is_soft());
        assert!(!MathError::NormalizeFailed.is_soft());
    }

    #[test]
    fn test_degenerate_keeps_value_and_error() {
        let degenerate = Degenerate::new(42_i32, MathError::ZeroLength);
        assert_eq!(*degenerate.value(), 42);
        assert_eq!(degenerate.error(), MathError::ZeroLength);
        assert_eq!(degenerate.to_string(), "Length is zero");
        assert_eq!(degenerate.into_inner(), 42);
    }

    #[test]
    fn test_degenerate_escalates_with_question_mark() {
        fn escalate() -> MathResult<i32> {
            let result: Result<i32, Degenerate<i32>> =
                Err(Degenerate::new(0, MathError::InsignificantAngle));
            let value = result?;
            Ok(value)
        }

        assert_eq!(escalate(), Err(MathError::InsignificantAngle));
    }

    #[test]
    fn test_math_result_err() {
        let result: MathResult<i32> = Err(MathError::InvalidRotationOrder);
        assert!(result.is_err());
    }
}
