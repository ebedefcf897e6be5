//! Value inspection for display.
//!
//! Arguments handed to the logger are resolved once, at the call boundary,
//! into an [`Arg`]: plain text, a structured [`serde_json::Value`], or an
//! absent value. [`inspect`] then renders each one for the terminal. Text is
//! passed through untouched; structured values get a compact single-line
//! rendering bounded to [`DEFAULT_DEPTH`] levels of nesting.
//!
//! ```
//! use foundation_io::{Arg, args, inspect};
//! use serde_json::json;
//!
//! let rendered = inspect(&args!["plain", 42, json!({"a": [1, 2]}), None::<i32>]);
//! assert_eq!(rendered, vec!["plain", "42", "{ a: [ 1, 2 ] }", "<absent>"]);
//! ```

use std::fmt::{self, Debug, Display};

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Constants
// ============================================================================

/// Nesting depth rendered before containers collapse to `[Object]`/`[Array]`.
pub const DEFAULT_DEPTH: usize = 3;

/// Array items rendered before the remainder is elided.
const MAX_ARRAY_ITEMS: usize = 100;

/// Rendering of an absent argument.
const ABSENT: &str = "<absent>";

// ============================================================================
// Arguments
// ============================================================================

/// A single logging argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Already display text; rendered verbatim.
    Text(String),
    /// A structured value; rendered structurally.
    Structured(Value),
    /// No value at all.
    Absent,
}

impl Arg {
    /// Capture anything with a [`Display`] impl as text.
    pub fn display(value: &impl Display) -> Self {
        Arg::Text(value.to_string())
    }

    /// Capture anything with a [`Debug`] impl as text.
    pub fn debug(value: &impl Debug) -> Self {
        Arg::Text(format!("{value:?}"))
    }

    /// Capture a serializable value structurally.
    ///
    /// Values serde cannot represent (maps with non-string keys, failing
    /// `Serialize` impls) degrade to the serializer's error text.
    pub fn serialize(value: &impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => Arg::from(value),
            Err(e) => Arg::Text(format!("[unserializable: {e}]")),
        }
    }

    /// The text content, if this argument is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Text(s.clone())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Arg::Text(s),
            other => Arg::Structured(other),
        }
    }
}

impl From<&Value> for Arg {
    fn from(value: &Value) -> Self {
        Arg::from(value.clone())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Absent, Into::into)
    }
}

macro_rules! structured_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Structured(Value::from(value))
                }
            }
        )*
    };
}

structured_from!(bool, i32, i64, u32, u64, usize, f64);

/// Build a `Vec<Arg>` from heterogeneous values.
///
/// ```
/// use foundation_io::{Arg, args};
///
/// let a = args!["count", 3, true];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[0], Arg::Text("count".into()));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::Arg::from($arg)),*]
    };
}

// ============================================================================
// Inspection
// ============================================================================

/// Render every argument for display, preserving order.
pub fn inspect(args: &[Arg]) -> Vec<String> {
    args.iter().map(|arg| inspect_arg(arg, DEFAULT_DEPTH)).collect()
}

/// Render a single argument with an explicit depth bound.
pub fn inspect_arg(arg: &Arg, depth: usize) -> String {
    match arg {
        Arg::Text(s) => s.clone(),
        Arg::Structured(value) => inspect_value(value, depth),
        Arg::Absent => ABSENT.to_string(),
    }
}

/// Render a structured value on a single line.
pub fn inspect_value(value: &Value, depth: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_value(&mut out, value, 0, depth);
    out
}

fn write_value(out: &mut String, value: &Value, level: usize, depth: usize) -> fmt::Result {
    use fmt::Write;

    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) if items.is_empty() => out.write_str("[]"),
        Value::Array(_) if level > depth => out.write_str("[Array]"),
        Value::Array(items) => {
            out.write_str("[ ")?;
            for (i, item) in items.iter().take(MAX_ARRAY_ITEMS).enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, item, level + 1, depth)?;
            }
            if items.len() > MAX_ARRAY_ITEMS {
                write!(out, ", ... {} more items", items.len() - MAX_ARRAY_ITEMS)?;
            }
            out.write_str(" ]")
        }
        Value::Object(map) if map.is_empty() => out.write_str("{}"),
        Value::Object(_) if level > depth => out.write_str("[Object]"),
        Value::Object(map) => {
            out.write_str("{ ")?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                if is_identifier(key) {
                    out.write_str(key)?;
                } else {
                    write_quoted(out, key)?;
                }
                out.write_str(": ")?;
                write_value(out, item, level + 1, depth)?;
            }
            out.write_str(" }")
        }
    }
}

fn write_quoted(out: &mut String, s: &str) -> fmt::Result {
    use fmt::Write;

    out.write_char('\'')?;
    for c in s.chars() {
        match c {
            '\'' => out.write_str("\\'")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\t' => out.write_str("\\t")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('\'')
}

/// Keys that can be shown without quotes.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_text_passes_through() {
        let out = inspect(&[Arg::from("hello 'world'"), Arg::from(String::from("a\nb"))]);
        assert_eq!(out, vec!["hello 'world'", "a\nb"]);
    }

    #[test]
    fn test_scalars() {
        let out = inspect(&crate::args![42, 1.5, true, json!(null)]);
        assert_eq!(out, vec!["42", "1.5", "true", "null"]);
    }

    #[test]
    fn test_absent() {
        assert_eq!(inspect(&[Arg::from(None::<&str>)]), vec!["<absent>"]);
        assert_eq!(inspect(&[Arg::from(Some("x"))]), vec!["x"]);
    }

    #[test]
    fn test_json_string_becomes_text() {
        assert_eq!(Arg::from(json!("plain")), Arg::Text("plain".into()));
    }

    #[test]
    fn test_object_rendering() {
        let value = json!({"name": "widget", "tags": ["a", "b"], "count": 2});
        assert_eq!(
            inspect_value(&value, DEFAULT_DEPTH),
            "{ name: 'widget', tags: [ 'a', 'b' ], count: 2 }"
        );
    }

    #[test]
    fn test_quoted_keys() {
        let value = json!({"content-type": "text", "1st": 1, "ok_key": true});
        assert_eq!(
            inspect_value(&value, DEFAULT_DEPTH),
            "{ 'content-type': 'text', '1st': 1, ok_key: true }"
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(inspect_value(&json!({}), DEFAULT_DEPTH), "{}");
        assert_eq!(inspect_value(&json!([]), DEFAULT_DEPTH), "[]");
    }

    #[test]
    fn test_depth_bound() {
        let value = json!({"a": {"b": {"c": {"d": {"e": 1}}}}});
        assert_eq!(
            inspect_value(&value, DEFAULT_DEPTH),
            "{ a: { b: { c: { d: [Object] } } } }"
        );

        let value = json!([[[[[1]]]]]);
        assert_eq!(inspect_value(&value, DEFAULT_DEPTH), "[ [ [ [ [Array] ] ] ] ]");
    }

    #[test]
    fn test_depth_zero_collapses_children() {
        let value = json!({"a": {"b": 1}, "c": []});
        assert_eq!(inspect_value(&value, 0), "{ a: [Object], c: [] }");
    }

    #[test]
    fn test_long_array_elided() {
        let value = Value::from((0..105).collect::<Vec<i32>>());
        let out = inspect_value(&value, DEFAULT_DEPTH);
        assert!(out.starts_with("[ 0, 1, 2"));
        assert!(out.ends_with(", 99, ... 5 more items ]"), "got: {out}");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            inspect_value(&json!(["it's", "a\nb"]), DEFAULT_DEPTH),
            r"[ 'it\'s', 'a\nb' ]"
        );
    }

    #[test]
    fn test_serialize_and_degrade() {
        let mut ok = HashMap::new();
        ok.insert("k", 1);
        assert_eq!(Arg::serialize(&ok), Arg::Structured(json!({"k": 1})));

        let mut bad = HashMap::new();
        bad.insert((1, 2), "tuple keys are not valid JSON keys");
        match Arg::serialize(&bad) {
            Arg::Text(s) => assert!(s.starts_with("[unserializable:")),
            other => panic!("expected degraded text, got {other:?}"),
        }
    }

    #[test]
    fn test_display_and_debug() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(Arg::display(&err), Arg::Text("boom".into()));
        assert_eq!(Arg::debug(&vec![1, 2]), Arg::Text("[1, 2]".into()));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(Arg::from("x").as_text(), Some("x"));
        assert_eq!(Arg::from(42).as_text(), None);
        assert_eq!(Arg::Absent.as_text(), None);
    }
}
