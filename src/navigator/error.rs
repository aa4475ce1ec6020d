//! Error types for navigation chain execution.

use crate::value::Value;
use std::fmt;

/// Classifies what went wrong during chain execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An attribute, key, or index lookup failed.
    LookupFailure,
    /// An expand step was applied to a non-collection value.
    NotIterable,
    /// The final conversion function failed.
    ConversionFailure,
    /// Any other propagated fault.
    UnexpectedFailure,
}

/// A structured error raised when a navigation chain cannot complete.
///
/// Carries the human-readable message, the traversal path accumulated up to
/// the failure point (root-first, starting at `$`), and the value present at
/// that point (not the whole subject), so callers can pinpoint exactly where
/// traversal broke.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalError {
    kind: ErrorKind,
    message: String,
    path: Vec<String>,
    value: Value,
}

impl TraversalError {
    pub(crate) fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        path: Vec<String>,
        value: Value,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            path,
            value,
        }
    }

    /// The failure classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The traversal path segments accumulated up to the failure, root-first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The path joined with dots, e.g. `$.users.[2].name`.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// The value present at the failure point.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at full path: {}, from value: {}",
            self.message,
            self.path_string(),
            self.value
        )
    }
}

impl std::error::Error for TraversalError {}
