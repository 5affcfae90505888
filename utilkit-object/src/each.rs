//! Depth-first leaf traversal.
//!
//! The walk descends into every mapping-valued property and yields each
//! other value with its immediate key. Sequences are yielded whole, so
//! mappings nested inside a sequence are never visited on their own.

use serde_json::map;
use std::iter::FusedIterator;
use tracing::debug;
use utilkit_types::{Error, Result, Value, ValueKind};

/// Iterator over the leaves of a mapping, see [`leaves`].
pub struct Leaves<'a> {
    stack: Vec<map::Iter<'a>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some((_, Value::Object(nested))) => self.stack.push(nested.iter()),
                Some((key, value)) => return Some((key.as_str(), value)),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Leaves<'_> {}

/// Returns a lazy depth-first iterator over the `(key, value)` leaves of `obj`.
///
/// Keys are immediate property names, not paths. The iterator keeps its own
/// stack, so nesting depth is bounded only by memory.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `obj` is not a mapping.
pub fn leaves(obj: &Value) -> Result<Leaves<'_>> {
    match obj {
        Value::Object(root) => Ok(Leaves {
            stack: vec![root.iter()],
        }),
        other => {
            let kind = ValueKind::of(other);
            debug!(%kind, "leaf traversal rejected non-mapping input");
            Err(Error::InvalidArgument(format!("expected a mapping, got {kind}")))
        }
    }
}

/// Calls `f(key, value)` for every leaf of `obj`, in [`leaves`] order.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `obj` is not a mapping; `f` is not
/// called in that case.
pub fn object_each<F>(obj: &Value, mut f: F) -> Result<()>
where
    F: FnMut(&str, &Value),
{
    for (key, value) in leaves(obj)? {
        f(key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use utilkit_types::json;

    fn collect(v: &Value) -> Vec<(String, Value)> {
        leaves(v)
            .unwrap()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn flat_mapping_in_order() {
        let v = json!({"b": 1, "a": "x", "c": null});
        assert_eq!(
            collect(&v),
            vec![
                ("b".to_string(), json!(1)),
                ("a".to_string(), json!("x")),
                ("c".to_string(), json!(null)),
            ]
        );
    }

    #[test]
    fn descends_depth_first() {
        let v = json!({"a": 1, "b": {"c": 2, "d": {"e": 3}}, "f": 4});
        let keys: Vec<String> = collect(&v).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "c", "e", "f"]);
    }

    #[test]
    fn sequences_are_leaves() {
        let v = json!({"a": [{"b": 1}]});
        assert_eq!(collect(&v), vec![("a".to_string(), json!([{"b": 1}]))]);
    }

    #[test]
    fn empty_nested_mapping_yields_nothing() {
        let v = json!({"a": {}, "b": {"c": {}}});
        assert!(collect(&v).is_empty());
    }

    #[test]
    fn rejects_non_mappings() {
        for v in [json!(5), json!(null), json!([1, 2]), json!("str")] {
            assert!(matches!(leaves(&v), Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn iterator_is_fused() {
        let v = json!({"a": 1});
        let mut it = leaves(&v).unwrap();
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
