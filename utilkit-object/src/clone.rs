//! Deep copy.

use serde_json::Map;
use tracing::warn;
use utilkit_types::{Result, TraversalLimits, Value};

/// Deep-copies `target` with the default [`TraversalLimits`].
///
/// # Errors
/// Returns [`Error::DepthLimitExceeded`](utilkit_types::Error::DepthLimitExceeded)
/// if `target` nests deeper than the default limit.
pub fn object_clone(target: &Value) -> Result<Value> {
    object_clone_with(target, &TraversalLimits::default())
}

/// Deep-copies `target`, rebuilding every mapping and sequence.
///
/// The copy shares no container with `target`. A sequence at the root
/// stays a sequence.
///
/// # Errors
/// Returns [`Error::DepthLimitExceeded`](utilkit_types::Error::DepthLimitExceeded)
/// if `target` nests deeper than `limits.max_depth`.
pub fn object_clone_with(target: &Value, limits: &TraversalLimits) -> Result<Value> {
    clone_at(target, limits, 0).inspect_err(|e| warn!(error = %e, "object clone aborted"))
}

fn clone_at(value: &Value, limits: &TraversalLimits, depth: usize) -> Result<Value> {
    match value {
        Value::Object(map) => {
            limits.check(depth)?;
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                out.insert(key.clone(), clone_at(child, limits, depth + 1)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(items) => {
            limits.check(depth)?;
            items
                .iter()
                .map(|child| clone_at(child, limits, depth + 1))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        scalar => Ok(scalar.clone()),
    }
}
