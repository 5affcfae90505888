//! Value classification and the comparison rules built on it.

use serde_json::Value;
use std::fmt;

/// The shape of a [`Value`], used to decide whether a traversal recurses.
///
/// Sequences and mappings are distinct kinds: helpers that descend into
/// mappings treat sequences as leaves unless they match on
/// [`ValueKind::Sequence`] explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Classifies a value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    /// Returns `true` for sequences and mappings.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Returns `false` for `null`, `false`, numeric zero and the empty string.
///
/// Empty sequences and empty mappings are truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Scalar identity comparison.
///
/// Numbers compare by numeric value, so `1` and `1.0` are equal. Containers
/// are compared by identity, and two distinct containers are never
/// identical, so any comparison involving a sequence or mapping is `false`.
#[must_use]
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    }
}

/// Looks up an own property.
///
/// Mappings are indexed by key; sequences by a canonical decimal index
/// (`"1"` but not `"01"`). Scalars have no properties.
#[must_use]
pub fn property<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .filter(|idx| idx.to_string() == key)
            .and_then(|idx| items.get(idx)),
        _ => None,
    }
}
