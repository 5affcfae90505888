//! Core value model for utilkit.
//!
//! Every helper in the workspace works on [`Value`], the tagged
//! representation of dynamically shaped data:
//! - `Null`, `Bool`, `Number`, `String` scalars
//! - `Array` sequences
//! - `Object` mappings, which keep their insertion order
//!
//! On top of that this crate defines the small vocabulary the object helpers
//! share: value classification ([`ValueKind`]), truthiness, strict equality,
//! own-property lookup, plain-text rendering and traversal limits.

mod kind;
mod limits;
mod text;

pub use kind::{ValueKind, is_truthy, property, strict_eq};
pub use limits::{DEFAULT_MAX_DEPTH, TraversalLimits};
pub use serde_json::{Map, Number, Value, json};
pub use text::PlainText;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while walking or rebuilding values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("nesting exceeds the traversal limit of {limit} levels")]
    DepthLimitExceeded { limit: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
