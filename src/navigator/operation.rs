//! Operation variants making up a navigation chain.
//!
//! Each operation is a pure function from a value (plus the diagnostic path
//! accumulated so far) to a new value. `Map` is the broadcast engine: it
//! applies its inner operation to every element of an array instead of the
//! array itself, recursing when the inner operation is itself a broadcast.

use crate::navigator::error::{ErrorKind, TraversalError};
use crate::value::{Key, LookupError, Value};
use log::trace;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Operation {
    /// Attribute-style lookup by name.
    Attribute { name: String, null_safe: bool },
    /// Keyed or indexed lookup.
    Item { key: Key, null_safe: bool },
    /// Expand the current value into the sequence of its elements.
    Expand,
    /// Broadcast `inner` over every element of the current value.
    Map { inner: Box<Operation>, level: usize },
}

impl Operation {
    pub(crate) fn apply(
        &self,
        value: &Value,
        path: &mut Vec<String>,
    ) -> Result<Value, TraversalError> {
        match self {
            Operation::Attribute { name, null_safe } => {
                path.push(name.clone());
                lookup_step(
                    value,
                    &Key::Str(name.clone()),
                    *null_safe,
                    &format!("attribute '{}'", name),
                    path,
                )
            }
            Operation::Item { key, null_safe } => {
                path.push(format!("[{}]", key));
                lookup_step(value, key, *null_safe, &format!("item '{}'", key), path)
            }
            Operation::Expand => {
                path.push("[...]".to_string());
                match value {
                    Value::Null => Ok(Value::Array(Vec::new())),
                    Value::Object(entries) => {
                        Ok(Value::Array(entries.values().cloned().collect()))
                    }
                    Value::Array(items) => Ok(Value::Array(items.clone())),
                    other => Err(TraversalError::new(
                        ErrorKind::NotIterable,
                        "Cannot expand non-iterable",
                        path.clone(),
                        other.clone(),
                    )),
                }
            }
            Operation::Map { inner, level } => apply_map(inner, *level, value, path),
        }
    }
}

/// Shared lookup contract for `Attribute` and `Item`.
///
/// A null value under null safety resolves to null without touching the data.
/// A plain miss (missing key, out-of-range index) resolves to null under null
/// safety and fails otherwise; a type-mismatch lookup fails unconditionally.
fn lookup_step(
    value: &Value,
    key: &Key,
    null_safe: bool,
    describe: &str,
    path: &[String],
) -> Result<Value, TraversalError> {
    if value.is_null() && null_safe {
        return Ok(Value::Null);
    }
    match value.lookup(key) {
        Ok(found) => Ok(found.clone()),
        Err(LookupError::NotFound { .. }) if null_safe => Ok(Value::Null),
        Err(err) => Err(TraversalError::new(
            ErrorKind::LookupFailure,
            format!("Failed to get {}: {}", describe, err),
            path.to_vec(),
            value.clone(),
        )),
    }
}

/// Broadcasts `inner` over `value`.
///
/// Null broadcasts to an empty array. A non-array value is treated as a
/// single-element sequence. Per-element failures degrade to null in that
/// result slot rather than failing the whole broadcast, so partial data never
/// aborts a full traversal.
fn apply_map(
    inner: &Operation,
    level: usize,
    value: &Value,
    path: &mut Vec<String>,
) -> Result<Value, TraversalError> {
    let items = match value {
        Value::Null => return Ok(Value::Array(Vec::new())),
        Value::Array(items) => items,
        other => {
            let slot = apply_element(inner, other, path.clone());
            return Ok(Value::Array(vec![slot]));
        }
    };

    let mut results = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let mut item_path = path.clone();
        item_path.push(format!("[{}]", index));
        let slot = match (inner, item) {
            // A nested broadcast over a nested sequence descends one level,
            // preserving the original nesting shape in the result.
            (Operation::Map { inner: deeper, .. }, Value::Array(inner_items)) if level > 1 => {
                let descended = Operation::Map {
                    inner: deeper.clone(),
                    level: level - 1,
                };
                let mut nested = Vec::with_capacity(inner_items.len());
                for (inner_index, inner_item) in inner_items.iter().enumerate() {
                    let mut inner_path = item_path.clone();
                    inner_path.push(format!("[{}]", inner_index));
                    nested.push(apply_element(&descended, inner_item, inner_path));
                }
                Value::Array(nested)
            }
            _ => apply_element(inner, item, item_path),
        };
        results.push(slot);
    }
    Ok(Value::Array(results))
}

fn apply_element(operation: &Operation, element: &Value, mut path: Vec<String>) -> Value {
    match operation.apply(element, &mut path) {
        Ok(result) => result,
        Err(err) => {
            trace!("broadcast element failed, substituting null: {}", err);
            Value::Null
        }
    }
}
