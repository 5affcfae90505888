//! Error types for the generators.

use thiserror::Error;

/// Result type for generator operations.
pub type RandomResult<T> = Result<T, RandomError>;

/// Errors raised when a generator's bounds cannot be sampled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    /// No integer lies between the rounded bounds.
    #[error("empty range: no integer between {min} and {max}")]
    EmptyRange { min: f64, max: f64 },

    /// A rounded bound does not fit in an `i64`.
    #[error("range {min}..={max} does not fit in an i64")]
    OutOfRange { min: f64, max: f64 },

    /// A numeric bound is NaN or infinite.
    #[error("bound is not finite")]
    NonFinite,

    /// Maximum word length is below the minimum.
    #[error("invalid word length: max {max} is below min {min}")]
    InvalidLength { min: usize, max: usize },
}
