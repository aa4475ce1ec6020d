//! datadot - lazy, chainable navigation over nested data.
//!
//! Navigation chains are built as immutable plans and evaluated only on
//! demand. Three behaviors layer on top of plain attribute/index navigation:
//!
//! - **Deferred execution**: builder calls never touch the data; an explicit
//!   [`Navigator::invoke`] evaluates the chain, optionally through a final
//!   conversion function.
//! - **Null-safe propagation**: once [`Navigator::null_safe`] is enabled on a
//!   chain, a null intermediate value short-circuits the rest of the chain to
//!   null instead of failing. The flag is sticky across derived navigators.
//! - **Broadcast expansion**: [`Navigator::expand`] switches the chain from
//!   one value to every element of a collection; nested expansions compose
//!   into nested-list results mirroring the nesting of the data.
//!
//! # Example
//!
//! ```
//! use datadot::{navigate, Value};
//! use serde_json::json;
//!
//! let data = json!({
//!     "users": [
//!         {"name": "Alice", "age": 30},
//!         {"name": "Bob", "age": 25}
//!     ]
//! });
//!
//! let name = navigate(data.clone())
//!     .attr("users")
//!     .item(0)
//!     .attr("name")
//!     .invoke()
//!     .unwrap();
//! assert_eq!(name, Value::from("Alice"));
//!
//! let ages = navigate(data)
//!     .attr("users")
//!     .expand()
//!     .attr("age")
//!     .invoke()
//!     .unwrap();
//! assert_eq!(ages, Value::from(json!([30, 25])));
//! ```

pub mod navigator;
pub mod value;

pub use navigator::{ErrorKind, Navigator, TraversalError};
pub use value::{Key, LookupError, Number, Value};

/// Creates a root [`Navigator`] over `value` with an empty chain.
pub fn navigate(value: impl Into<Value>) -> Navigator {
    Navigator::new(value)
}
