//! # memptr
//!
//! Dispatch through member references.
//!
//! A small object model with instance fields, class-scoped fields,
//! ordinary methods and one virtual method, plus first-class references
//! to those members that carry no instance and are bound to one only at
//! the point of use.
//!
//! ## Architecture
//!
//! - **Classes**: `A` (instance state, `foo`/`bar`/`baz`, shared `s`) and
//!   `B` (shared `s` only). [`AObject`] is the dispatch table through which
//!   `baz` resolves to the most-derived override.
//! - **Member references**: [`MethodRef`], [`FieldRef`] and the
//!   reference-to-reference [`MethodSlotPtr`].
//! - **Driver**: a fixed script that binds, rebinds and invokes references
//!   against one `A` instance and accumulates a result.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod context;
pub mod driver;
pub mod error;
pub mod member;

// Re-export main types
pub use class::{AObject, A, B};
pub use context::RunContext;
pub use driver::{fum, run, RunReport, Step};
pub use error::{DispatchError, ReferenceKind, Result};
pub use member::{FieldDesc, FieldRef, MethodDesc, MethodRef, MethodSlot, MethodSlotPtr};

/// memptr version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
