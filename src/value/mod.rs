//! Nested value representation for navigation.
//!
//! This module provides the core data structures navigated by the rest of the
//! crate. Arbitrary nested data is modeled as a closed sum type: ordered
//! mappings, ordered sequences, scalars, and null. Mappings preserve insertion
//! order, which is observable when a mapping is expanded into its values.
//!
//! # Example
//!
//! ```
//! use datadot::value::{Key, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"users": [{"name": "Alice"}]}));
//! let users = value.lookup(&Key::from("users")).unwrap();
//! assert!(users.is_array());
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A number value (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// An arbitrary nested value.
///
/// This enum covers the shapes a navigation chain can traverse: objects,
/// arrays, strings, numbers, booleans, and null. Objects use [`IndexMap`] so
/// that expansion yields values in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    /// An ordered mapping of string keys to values
    Object(IndexMap<String, Value>),
    /// An ordered sequence of values
    Array(Vec<Value>),
    /// A string value
    String(String),
    /// A number (integer or float)
    Number(Number),
    /// A boolean value
    Bool(bool),
    /// A null value
    Null,
}

/// A lookup key for keyed or indexed access.
///
/// Mirrors the kinds of keys a navigation step can carry: string keys into
/// objects, integer indices into arrays (negative indices count from the
/// end), and booleans for callers that key maps by flag-like values.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{:?}", s),
            Key::Int(i) => write!(f, "{}", i),
            Key::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i as i64)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i as i64)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

/// Errors that can occur during a single key/index lookup.
///
/// `NotFound` unifies every "the key simply isn't there" case (missing map
/// key, out-of-range index) so callers can treat them uniformly. `Unsupported`
/// covers type mismatches: keys that can never resolve against the value's
/// shape, such as a string key into an array or any key into a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The key or index does not exist in the container.
    NotFound { key: Key },
    /// The value's type does not support lookup with this key.
    Unsupported { key: Key, type_name: &'static str },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound { key } => write!(f, "key {} not found", key),
            LookupError::Unsupported { key, type_name } => {
                write!(f, "cannot look up key {} in a value of type {}", key, type_name)
            }
        }
    }
}

impl std::error::Error for LookupError {}

impl Value {
    /// Returns true if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string content if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content if this value is an integer number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric content as a float if this value is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Returns the boolean content if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns a short name for this value's type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
        }
    }

    /// Retrieves the value stored under `key`.
    ///
    /// String keys resolve against objects; integer keys resolve against
    /// arrays, with negative indices counting from the end. A key that could
    /// resolve against the container's type but doesn't exist yields
    /// [`LookupError::NotFound`]; a key that can never resolve against this
    /// value's shape yields [`LookupError::Unsupported`].
    pub fn lookup(&self, key: &Key) -> Result<&Value, LookupError> {
        match (self, key) {
            (Value::Object(entries), Key::Str(name)) => entries
                .get(name)
                .ok_or_else(|| LookupError::NotFound { key: key.clone() }),
            // A map without a matching key is a plain miss, whatever the key type.
            (Value::Object(_), _) => Err(LookupError::NotFound { key: key.clone() }),
            (Value::Array(items), Key::Int(index)) => {
                let len = items.len() as i64;
                let normalized = if *index < 0 { len + index } else { *index };
                if normalized >= 0 && normalized < len {
                    Ok(&items[normalized as usize])
                } else {
                    Err(LookupError::NotFound { key: key.clone() })
                }
            }
            _ => Err(LookupError::Unsupported {
                key: key.clone(),
                type_name: self.type_name(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::String(s) => write!(f, "{:?}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i as i64))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Number(Number::Integer(i)),
                None => Value::Number(Number::Float(n.as_f64().unwrap_or_default())),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(Number::Integer(i)) => serde_json::Value::from(i),
            Value::Number(Number::Float(f)) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_object_key() {
        let value = Value::from(json!({"name": "test", "age": 42}));
        assert_eq!(
            value.lookup(&Key::from("name")).unwrap(),
            &Value::from("test")
        );
        assert_eq!(value.lookup(&Key::from("age")).unwrap(), &Value::from(42));
    }

    #[test]
    fn test_lookup_missing_object_key() {
        let value = Value::from(json!({"name": "test"}));
        let err = value.lookup(&Key::from("missing")).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[test]
    fn test_lookup_non_string_key_in_object_is_not_found() {
        let value = Value::from(json!({"name": "test"}));
        let err = value.lookup(&Key::from(0)).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[test]
    fn test_lookup_array_index() {
        let value = Value::from(json!(["a", "b", "c"]));
        assert_eq!(value.lookup(&Key::from(1)).unwrap(), &Value::from("b"));
    }

    #[test]
    fn test_lookup_negative_array_index() {
        let value = Value::from(json!(["a", "b", "c"]));
        assert_eq!(value.lookup(&Key::from(-1)).unwrap(), &Value::from("c"));
        assert_eq!(value.lookup(&Key::from(-3)).unwrap(), &Value::from("a"));
    }

    #[test]
    fn test_lookup_out_of_range_index_is_not_found() {
        let value = Value::from(json!(["a"]));
        assert!(matches!(
            value.lookup(&Key::from(3)).unwrap_err(),
            LookupError::NotFound { .. }
        ));
        assert!(matches!(
            value.lookup(&Key::from(-2)).unwrap_err(),
            LookupError::NotFound { .. }
        ));
    }

    #[test]
    fn test_lookup_string_key_in_array_is_unsupported() {
        let value = Value::from(json!(["a", "b"]));
        let err = value.lookup(&Key::from("name")).unwrap_err();
        assert!(matches!(err, LookupError::Unsupported { .. }));
    }

    #[test]
    fn test_lookup_on_scalar_is_unsupported() {
        let value = Value::from(42);
        let err = value.lookup(&Key::from("name")).unwrap_err();
        assert!(matches!(
            err,
            LookupError::Unsupported {
                type_name: "number",
                ..
            }
        ));
    }

    #[test]
    fn test_lookup_on_null_is_unsupported() {
        let err = Value::Null.lookup(&Key::from("name")).unwrap_err();
        assert!(matches!(
            err,
            LookupError::Unsupported {
                type_name: "null",
                ..
            }
        ));
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let value = Value::from(json!({"http": 80, "https": 443, "ftp": 21}));
        if let Value::Object(entries) = &value {
            let keys: Vec<&String> = entries.keys().collect();
            assert_eq!(keys, vec!["http", "https", "ftp"]);
        } else {
            panic!("expected an object");
        }
    }

    #[test]
    fn test_json_round_trip() {
        let original = json!({
            "name": "test",
            "items": [1, 2.5, true, null],
            "nested": {"deep": "value"}
        });
        let value = Value::from(original.clone());
        let back: serde_json::Value = value.into();
        assert_eq!(back, original);
    }

    #[test]
    fn test_serde_round_trip() {
        let value = Value::from(json!({"a": [1, 2], "b": null}));
        let text = serde_json::to_string(&value).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_display() {
        let value = Value::from(json!({"name": "Alice", "tags": [1, true, null]}));
        assert_eq!(format!("{}", value), r#"{"name": "Alice", "tags": [1, true, null]}"#);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(format!("{}", Key::from("name")), "\"name\"");
        assert_eq!(format!("{}", Key::from(2)), "2");
        assert_eq!(format!("{}", Key::from(true)), "true");
    }

    #[test]
    fn test_number_type_checks() {
        let int = Number::Integer(42);
        assert!(int.is_integer());
        assert!(!int.is_float());
        assert_eq!(int.as_f64(), 42.0);

        let float = Number::Float(42.5);
        assert!(float.is_float());
        assert_eq!(float.as_f64(), 42.5);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::from(7).as_i64(), Some(7));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert!(Value::Null.is_null());
        assert_eq!(Value::from("hi").as_i64(), None);
    }
}
