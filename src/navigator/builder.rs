//! Immutable navigation chain builder and execution engine.

use crate::navigator::error::{ErrorKind, TraversalError};
use crate::navigator::operation::Operation;
use crate::value::{Key, Value};
use log::debug;

/// An immutable builder holding a subject value and a pending chain of
/// navigation operations.
///
/// Builder methods consume the navigator and return a new one with the chain
/// extended; nothing is ever evaluated until [`invoke`](Navigator::invoke) or
/// [`invoke_with`](Navigator::invoke_with) is called. A navigator can be
/// cloned to branch a chain, and invoked any number of times; each run
/// replays deterministically against the captured subject value.
///
/// # Example
///
/// ```
/// use datadot::{navigate, Value};
/// use serde_json::json;
///
/// let data = json!({"users": [{"name": "Alice"}, {"name": "Bob"}]});
/// let names = navigate(data)
///     .attr("users")
///     .expand()
///     .attr("name")
///     .invoke()
///     .unwrap();
/// assert_eq!(names, Value::from(json!(["Alice", "Bob"])));
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    value: Value,
    operations: Vec<Operation>,
    null_safe: bool,
    expansion_levels: Vec<usize>,
}

impl Navigator {
    /// Creates a root navigator over `value` with an empty chain.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            operations: Vec::new(),
            null_safe: false,
            expansion_levels: Vec::new(),
        }
    }

    /// Appends an attribute-style lookup by name.
    pub fn attr(self, name: impl Into<String>) -> Self {
        let operation = Operation::Attribute {
            name: name.into(),
            null_safe: self.null_safe,
        };
        self.push(operation)
    }

    /// Appends a keyed or indexed lookup. Negative integer keys index arrays
    /// from the end.
    pub fn item(self, key: impl Into<Key>) -> Self {
        let operation = Operation::Item {
            key: key.into(),
            null_safe: self.null_safe,
        };
        self.push(operation)
    }

    /// Opens an expansion: the current value becomes the sequence of its
    /// elements, and every subsequent step is broadcast per element.
    ///
    /// Expansions nest: a second `expand` inside an open one broadcasts
    /// subsequent steps two levels deep, mirroring the nesting of the data.
    pub fn expand(mut self) -> Self {
        self.expansion_levels.push(1);
        self.operations.push(Operation::Expand);
        self
    }

    /// Enables null-safe propagation from this point on.
    ///
    /// The flag is sticky: every navigator derived from this one keeps it.
    /// Under null safety a null intermediate value short-circuits the rest of
    /// the chain to null, and missing keys or out-of-range indices resolve to
    /// null instead of failing.
    pub fn null_safe(mut self) -> Self {
        self.null_safe = true;
        self
    }

    /// Wraps `operation` in one broadcast layer per open expansion, the most
    /// recently opened expansion innermost, and appends it to the chain.
    fn push(mut self, operation: Operation) -> Self {
        let mut wrapped = operation;
        for level in self.expansion_levels.iter().rev() {
            wrapped = Operation::Map {
                inner: Box::new(wrapped),
                level: *level,
            };
        }
        self.operations.push(wrapped);
        self
    }

    /// Evaluates the chain against the captured subject value.
    ///
    /// An empty chain returns the subject value unchanged, including null.
    pub fn invoke(&self) -> Result<Value, TraversalError> {
        self.run().map(|(result, _)| result)
    }

    /// Evaluates the chain, then applies `convert` to the result.
    ///
    /// A failed conversion surfaces as a [`TraversalError`] of kind
    /// [`ErrorKind::ConversionFailure`] carrying the final traversal path and
    /// the pre-conversion value.
    pub fn invoke_with<T>(
        &self,
        convert: impl FnOnce(&Value) -> anyhow::Result<T>,
    ) -> Result<T, TraversalError> {
        let (result, path) = self.run()?;
        convert(&result).map_err(|err| {
            TraversalError::new(
                ErrorKind::ConversionFailure,
                format!("Conversion error: {}", err),
                path,
                result,
            )
        })
    }

    fn run(&self) -> Result<(Value, Vec<String>), TraversalError> {
        debug!(
            "invoking navigation chain of {} operations",
            self.operations.len()
        );
        let mut result = self.value.clone();
        let mut path = vec!["$".to_string()];
        for operation in &self.operations {
            if result.is_null() && self.null_safe {
                break;
            }
            result = operation.apply(&result, &mut path)?;
        }
        Ok((result, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_chain_returns_subject_unchanged() {
        let data = json!({"a": 1});
        assert_eq!(
            Navigator::new(data.clone()).invoke().unwrap(),
            Value::from(data)
        );
        assert_eq!(Navigator::new(json!(null)).invoke().unwrap(), Value::Null);
    }

    #[test]
    fn test_building_never_evaluates() {
        // Chaining through a missing attribute is fine; only invoke fails.
        let nav = Navigator::new(json!({"a": 1}))
            .attr("missing")
            .attr("deeper");
        assert!(nav.invoke().is_err());
    }

    #[test]
    fn test_navigator_is_reinvokable() {
        let nav = Navigator::new(json!({"a": {"b": 2}})).attr("a").attr("b");
        assert_eq!(nav.invoke().unwrap(), Value::from(2));
        assert_eq!(nav.invoke().unwrap(), Value::from(2));
    }

    #[test]
    fn test_cloned_navigators_branch_independently() {
        let base = Navigator::new(json!({"a": 1, "b": 2}));
        let left = base.clone().attr("a");
        let right = base.attr("b");
        assert_eq!(left.invoke().unwrap(), Value::from(1));
        assert_eq!(right.invoke().unwrap(), Value::from(2));
    }

    #[test]
    fn test_operations_wrap_once_per_open_expansion() {
        let nav = Navigator::new(json!([])).expand().expand().attr("x");
        // Expand appends bare; the attribute is wrapped twice, the newest
        // expansion innermost.
        assert_eq!(nav.operations.len(), 3);
        assert_eq!(nav.operations[0], Operation::Expand);
        assert_eq!(nav.operations[1], Operation::Expand);
        match &nav.operations[2] {
            Operation::Map { inner, level: 1 } => match inner.as_ref() {
                Operation::Map { inner, level: 1 } => {
                    assert!(matches!(inner.as_ref(), Operation::Attribute { .. }));
                }
                other => panic!("expected inner map, got {:?}", other),
            },
            other => panic!("expected outer map, got {:?}", other),
        }
    }

    #[test]
    fn test_null_safe_flag_is_captured_by_later_operations() {
        let nav = Navigator::new(json!({})).attr("a").null_safe().attr("b");
        assert!(matches!(
            nav.operations[0],
            Operation::Attribute {
                null_safe: false,
                ..
            }
        ));
        assert!(matches!(
            nav.operations[1],
            Operation::Attribute {
                null_safe: true,
                ..
            }
        ));
    }

    #[test]
    fn test_conversion_failure_carries_pre_conversion_value() {
        let nav = Navigator::new(json!({"n": 3})).attr("n");
        let err = nav
            .invoke_with(|_| -> anyhow::Result<i64> { anyhow::bail!("no good") })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConversionFailure);
        assert!(err.message().contains("Conversion error: no good"));
        assert_eq!(err.value(), &Value::from(3));
        assert_eq!(err.path_string(), "$.n");
    }

    #[test]
    fn test_invoke_with_applies_converter() {
        let nav = Navigator::new(json!({"n": 3})).attr("n");
        let doubled = nav
            .invoke_with(|v| Ok(v.as_i64().unwrap_or_default() * 2))
            .unwrap();
        assert_eq!(doubled, 6);
    }
}
