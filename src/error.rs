//! Error type for fallible fraction operations.

use thiserror::Error;

/// The ways a fraction operation can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FractionError {
    /// A fraction was constructed with a zero denominator.
    #[error("fraction requires a non-zero denominator")]
    InvalidDenominator,
    /// The inverse of a zero-valued fraction was requested, directly or by dividing by zero.
    #[error("fraction inverse is undefined when the numerator is zero")]
    UndefinedInverse,
}
