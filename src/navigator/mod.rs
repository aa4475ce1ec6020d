//! Lazy navigation chains over nested values.
//!
//! A [`Navigator`] captures a subject value and accumulates an immutable plan
//! of operations; nothing touches the data until the chain is invoked.
//!
//! # Chain steps
//!
//! - `attr(name)` - attribute-style lookup by name
//! - `item(key)` - keyed or indexed lookup (negative indices count from the end)
//! - `expand()` - broadcast every subsequent step over the current collection
//! - `null_safe()` - null intermediates short-circuit to null instead of failing
//!
//! # Examples
//!
//! ```
//! // navigate(data).attr("users").item(0).attr("name") - one user's name
//! // navigate(data).attr("users").expand().attr("name") - every user's name
//! // navigate(data).null_safe().attr("maybe").attr("deep") - null, not an error
//! ```

pub mod builder;
pub mod error;
mod operation;

pub use builder::Navigator;
pub use error::{ErrorKind, TraversalError};
