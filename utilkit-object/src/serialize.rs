//! Flat string forms of a value's own entries.

use serde_json::map;
use std::borrow::Cow;
use std::fmt::Write;
use std::iter::Enumerate;
use std::slice;
use utilkit_types::{PlainText, Result, Value, ValueKind, is_truthy};

/// Separator used by [`object_to_string`] when none is given.
pub const DEFAULT_SEPARATOR: &str = ";";

/// Iterator over a value's own `(key, value)` entries, see [`entries`].
pub enum Entries<'a> {
    Mapping(map::Iter<'a>),
    Sequence(Enumerate<slice::Iter<'a, Value>>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Cow<'a, str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Mapping(iter) => iter.next().map(|(k, v)| (Cow::Borrowed(k.as_str()), v)),
            Self::Sequence(iter) => iter.next().map(|(i, v)| (Cow::Owned(i.to_string()), v)),
            Self::Empty => None,
        }
    }
}

/// Returns the own entries of `obj` in enumeration order.
///
/// Mappings yield their keys in insertion order; sequences yield their
/// indices as keys. Scalars have no entries.
#[must_use]
pub fn entries(obj: &Value) -> Entries<'_> {
    match obj {
        Value::Object(m) => Entries::Mapping(m.iter()),
        Value::Array(items) => Entries::Sequence(items.iter().enumerate()),
        _ => Entries::Empty,
    }
}

/// Serialises `obj` as `key1=val1&key2=val2`.
///
/// Mapping and sequence values are written as compact JSON, scalars as
/// [`PlainText`]. Nothing is escaped. Entries with a falsy value are dropped
/// along with their separator, and a falsy `obj` gives an empty string.
///
/// ```
/// use utilkit_object::object_to_query_string;
/// use utilkit_types::json;
///
/// let qs = object_to_query_string(&json!({"a": 1, "b": 0, "c": "x"})).unwrap();
/// assert_eq!(qs, "a=1&c=x");
/// ```
///
/// # Errors
/// Returns [`Error::Serialization`](utilkit_types::Error::Serialization) if a
/// container value cannot be written as JSON.
pub fn object_to_query_string(obj: &Value) -> Result<String> {
    if !is_truthy(obj) {
        return Ok(String::new());
    }

    let mut segments = Vec::new();
    for (key, value) in entries(obj) {
        if !is_truthy(value) {
            continue;
        }
        let text = if ValueKind::of(value).is_container() {
            serde_json::to_string(value)?
        } else {
            PlainText(value).to_string()
        };
        segments.push(format!("{key}={text}"));
    }
    Ok(segments.join("&"))
}

/// Writes `key:value<separator>` for every entry of `obj`.
///
/// `separator` defaults to [`DEFAULT_SEPARATOR`]. Every entry is followed by
/// the separator, including the last one.
///
/// ```
/// use utilkit_object::object_to_string;
/// use utilkit_types::json;
///
/// assert_eq!(object_to_string(&json!({"a": 1, "b": 2}), None), "a:1;b:2;");
/// assert_eq!(object_to_string(&json!({"a": 1}), Some(", ")), "a:1, ");
/// ```
#[must_use]
pub fn object_to_string(obj: &Value, separator: Option<&str>) -> String {
    let separator = separator.unwrap_or(DEFAULT_SEPARATOR);
    let mut out = String::new();
    for (key, value) in entries(obj) {
        // writing into a String cannot fail
        let _ = write!(out, "{key}:{}{separator}", PlainText(value));
    }
    out
}

/// Hands every entry of `obj` to `callback` instead of formatting it.
///
/// The callback replaces the text output, so the returned string is always
/// empty.
pub fn object_to_string_with<F>(obj: &Value, mut callback: F) -> String
where
    F: FnMut(&str, &Value),
{
    for (key, value) in entries(obj) {
        callback(&*key, value);
    }
    String::new()
}
