//! Property-based tests for the object helpers.

use proptest::prelude::*;
use utilkit_object::{leaves, object_clone, object_diff, object_to_string, reset_object_value};
use utilkit_types::{Map, Value, json};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z0-9]{0,6}".prop_map(Value::String),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec(("[a-e]{1,3}", inner), 0..5)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

fn mapping_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec(("[a-e]{1,3}", value_strategy()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn count_leaves(map: &Map<String, Value>) -> usize {
    map.values()
        .map(|v| match v {
            Value::Object(nested) => count_leaves(nested),
            _ => 1,
        })
        .sum()
}

proptest! {
    #[test]
    fn clone_is_deeply_equal(v in value_strategy()) {
        prop_assert_eq!(object_clone(&v).unwrap(), v);
    }

    #[test]
    fn leaves_yields_one_item_per_non_mapping_leaf(m in mapping_strategy()) {
        let expected = count_leaves(&m);
        let v = Value::Object(m);
        prop_assert_eq!(leaves(&v).unwrap().count(), expected);
    }

    #[test]
    fn diff_keys_are_a_subset_of_target(original in mapping_strategy(), target in mapping_strategy()) {
        let d = object_diff(&Value::Object(original), &target).unwrap();
        for key in d.keys() {
            prop_assert!(target.contains_key(key));
        }
    }

    #[test]
    fn diff_of_empty_original_is_target(target in mapping_strategy()) {
        let d = object_diff(&json!({}), &target).unwrap();
        prop_assert_eq!(d, target);
    }

    #[test]
    fn reset_nulls_every_field(m in mapping_strategy()) {
        let len = m.len();
        let mut v = Value::Object(m);
        reset_object_value(&mut v);
        let map = v.as_object().unwrap();
        prop_assert_eq!(map.len(), len);
        prop_assert!(map.values().all(Value::is_null));
    }

    #[test]
    fn to_string_has_one_separator_per_entry(m in mapping_strategy()) {
        let len = m.len();
        let s = object_to_string(&Value::Object(m), Some("\u{1}"));
        prop_assert_eq!(s.matches('\u{1}').count(), len);
    }
}
