//! In-place field reset.

use tracing::trace;
use utilkit_types::Value;

/// Sets every own field of `obj` to `null` and returns `obj`.
///
/// Nested mappings and sequences are not reset recursively or emptied:
/// the field holding them becomes `null` like any other, so
/// `{a: 1, b: {c: 2}, d: [1, 2]}` resets to `{a: null, b: null, d: null}`.
/// Callers rely on this flattening, so it is kept even though a recursive
/// reset may have been the intent.
///
/// Sequence inputs have every element set to `null`. Scalars are returned
/// unchanged.
pub fn reset_object_value(obj: &mut Value) -> &mut Value {
    let fields = match obj {
        Value::Object(map) => {
            for value in map.values_mut() {
                *value = Value::Null;
            }
            map.len()
        }
        Value::Array(items) => {
            items.fill(Value::Null);
            items.len()
        }
        _ => 0,
    };
    trace!(fields, "reset object values");
    obj
}

#[cfg(test)]
mod tests {
    use super::*;
    use utilkit_types::json;

    #[test]
    fn flattens_every_field_to_null() {
        let mut v = json!({"a": 1, "b": {"c": 2}, "d": [1, 2]});
        reset_object_value(&mut v);
        assert_eq!(v, json!({"a": null, "b": null, "d": null}));
    }

    #[test]
    fn returns_same_value() {
        let mut v = json!({"a": "x"});
        let out = reset_object_value(&mut v);
        *out = json!({"replaced": true});
        assert_eq!(v, json!({"replaced": true}));
    }

    #[test]
    fn keeps_key_order() {
        let mut v = json!({"z": 1, "a": 2});
        let keys: Vec<String> = reset_object_value(&mut v)
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn sequence_elements_nulled() {
        let mut v = json!([1, {"a": 1}, "x"]);
        reset_object_value(&mut v);
        assert_eq!(v, json!([null, null, null]));
    }

    #[test]
    fn scalars_untouched() {
        let mut v = json!(5);
        reset_object_value(&mut v);
        assert_eq!(v, json!(5));
    }
}
