//! One-directional object difference.
//!
//! The result describes what must be applied to `original` to move it
//! toward `target`. Keys that only exist in `original` never appear.

use serde_json::Map;
use tracing::{trace, warn};
use utilkit_types::{Result, TraversalLimits, Value, is_truthy, property, strict_eq};

/// Diffs `original` against `target` with the default [`TraversalLimits`].
///
/// # Errors
/// Returns [`Error::DepthLimitExceeded`](utilkit_types::Error::DepthLimitExceeded)
/// if `target` nests deeper than the default limit.
pub fn object_diff(original: &Value, target: &Map<String, Value>) -> Result<Map<String, Value>> {
    object_diff_with(original, target, &TraversalLimits::default())
}

/// Computes the fields of `target` that differ from `original`.
///
/// For each key of `target`, in order, the first matching rule decides:
///
/// 1. the key is missing or falsy in `original`: taken verbatim. A falsy
///    original (`0`, `""`, `false`, `null`) counts as missing.
/// 2. the target value is a mapping: diffed recursively, kept only if the
///    nested result is non-empty.
/// 3. the target value is a sequence: always taken verbatim, elements are
///    not compared.
/// 4. scalars: taken when not [`strict_eq`] to the original.
///
/// `original` may be any value; scalars have no properties, so every key
/// of `target` falls under rule 1.
///
/// # Errors
/// Returns [`Error::DepthLimitExceeded`](utilkit_types::Error::DepthLimitExceeded)
/// if `target` nests deeper than `limits.max_depth`.
pub fn object_diff_with(
    original: &Value,
    target: &Map<String, Value>,
    limits: &TraversalLimits,
) -> Result<Map<String, Value>> {
    let result = diff_at(original, target, limits, 0)
        .inspect_err(|e| warn!(error = %e, "object diff aborted"))?;
    trace!(
        target_keys = target.len(),
        changed = result.len(),
        "object diff computed"
    );
    Ok(result)
}

fn diff_at(
    original: &Value,
    target: &Map<String, Value>,
    limits: &TraversalLimits,
    depth: usize,
) -> Result<Map<String, Value>> {
    limits.check(depth)?;
    let mut result = Map::new();

    for (key, value) in target {
        let Some(before) = property(original, key).filter(|v| is_truthy(v)) else {
            result.insert(key.clone(), value.clone());
            continue;
        };

        match value {
            Value::Object(nested) => {
                let changes = diff_at(before, nested, limits, depth + 1)?;
                if !changes.is_empty() {
                    result.insert(key.clone(), Value::Object(changes));
                }
            }
            Value::Array(_) => {
                result.insert(key.clone(), value.clone());
            }
            scalar => {
                if !strict_eq(before, scalar) {
                    result.insert(key.clone(), scalar.clone());
                }
            }
        }
    }

    Ok(result)
}
