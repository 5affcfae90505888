//! Plain-text rendering of values.
//!
//! This is the form a value takes when it is interpolated into a string,
//! as opposed to its JSON text: strings are not quoted, integral floats
//! drop their fractional part and mappings collapse to a fixed tag.

use serde_json::{Number, Value};
use std::fmt;

/// Placeholder text for a mapping interpolated into a string.
pub const MAPPING_TEXT: &str = "[object Object]";

/// Displays a value in plain-text form.
///
/// ```
/// use utilkit_types::{PlainText, json};
///
/// assert_eq!(PlainText(&json!("a")).to_string(), "a");
/// assert_eq!(PlainText(&json!(2.0)).to_string(), "2");
/// assert_eq!(PlainText(&json!([1, null, "b"])).to_string(), "1,,b");
/// assert_eq!(PlainText(&json!({"k": 1})).to_string(), "[object Object]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlainText<'a>(pub &'a Value);

impl fmt::Display for PlainText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, n),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // null elements join as empty
                    if !item.is_null() {
                        write!(f, "{}", PlainText(item))?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str(MAPPING_TEXT),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: &Number) -> fmt::Result {
    if n.is_i64() || n.is_u64() {
        return write!(f, "{n}");
    }
    match n.as_f64() {
        Some(x) if x == 0.0 => f.write_str("0"),
        Some(x) if x.abs() >= 1e21 || x.abs() < 1e-6 => write_exponent(f, x),
        // f64's Display already omits a zero fraction
        Some(x) => write!(f, "{x}"),
        None => write!(f, "{n}"),
    }
}

/// Writes `x` as shortest digits with a signed exponent, e.g. `1e+21`, `1.5e-7`.
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = format!("{x:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
        _ => f.write_str(&text),
    }
}
