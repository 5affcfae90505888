//! Shape predicates.

use utilkit_types::Value;

/// Returns `true` for mappings. Sequences are not objects here.
#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Returns `true` for a mapping with no entries.
#[must_use]
pub fn is_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(serde_json::Map::is_empty)
}
