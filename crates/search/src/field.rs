//! Field path resolution for searchable records.
//!
//! A field path is a dot-separated list of keys (`"cluster.name"`). Numeric
//! segments index into arrays (`"modules.0.title"`). A missing segment at any
//! depth resolves to `None`, never an error.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// A record whose fields can be looked up by path.
///
/// Implement this for domain types that should be searchable without first
/// converting them to JSON.
pub trait FieldSource {
    /// Text of the field at `path`, or `None` when absent or null.
    fn field(&self, path: &str) -> Option<Cow<'_, str>>;
}

impl FieldSource for Value {
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        get_path(self, path).and_then(value_text)
    }
}

impl FieldSource for Map<String, Value> {
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let value = self.get(head)?;
        match rest {
            Some(rest) => value.field(rest),
            None => value_text(value),
        }
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        (**self).field(path)
    }
}

/// Resolve a dot-notation `path` inside `value`.
///
/// # Example
/// ```
/// use serde_json::json;
/// use shiksha_search::get_path;
///
/// let module = json!({"cluster": {"name": "Tribal Belt"}, "tags": ["math"]});
/// assert_eq!(get_path(&module, "cluster.name"), Some(&json!("Tribal Belt")));
/// assert_eq!(get_path(&module, "tags.0"), Some(&json!("math")));
/// assert_eq!(get_path(&module, "cluster.region"), None);
/// ```
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Searchable text for a JSON value.
///
/// Null and objects have no text. Arrays join their scalar elements with `,`.
fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Array(items) => {
            let parts: Vec<Cow<'_, str>> = items.iter().filter_map(value_text).collect();
            Some(Cow::Owned(parts.join(",")))
        }
    }
}
