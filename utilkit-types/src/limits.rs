//! Traversal limits for the recursive helpers.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Bounds applied by helpers that recurse into nested containers.
///
/// Owned values cannot form cycles, but arbitrarily deep nesting would still
/// exhaust the stack. Helpers fail with
/// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded) once a
/// container sits deeper than `max_depth` levels below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalLimits {
    /// Maximum number of nested containers below the root.
    pub max_depth: usize,
}

impl TraversalLimits {
    /// Creates limits with the given maximum depth.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns an error if `depth` is beyond the limit.
    pub fn check(&self, depth: usize) -> crate::Result<()> {
        if depth > self.max_depth {
            return Err(crate::Error::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
