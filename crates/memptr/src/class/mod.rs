//! Class model: `A`, `B` and the dispatch table for `A`'s virtual method

mod a;
mod b;

pub use a::A;
pub use b::B;

use std::fmt;

/// Dispatch table for `A` and every type derived from it.
///
/// Ordinary methods (`foo`, `bar`) and fields live on the embedded [`A`]
/// and always dispatch statically. `baz` is the one virtual slot: calls
/// made through `dyn AObject` run the most-derived override, and the
/// default body is `A`'s own.
///
/// # Example
///
/// ```
/// use memptr::{AObject, A};
///
/// #[derive(Debug)]
/// struct Doubler {
///     base: A,
/// }
///
/// impl AObject for Doubler {
///     fn class_name(&self) -> &'static str {
///         "Doubler"
///     }
///     fn as_a(&self) -> &A {
///         &self.base
///     }
///     fn as_a_mut(&mut self) -> &mut A {
///         &mut self.base
///     }
///     fn baz(&mut self, z: i32) -> i32 {
///         2 * z
///     }
/// }
///
/// let mut d = Doubler { base: A::new() };
/// let obj: &mut dyn AObject = &mut d;
/// assert_eq!(obj.baz(21), 42);
/// assert_eq!(obj.as_a().j, 5); // base body never ran
/// ```
pub trait AObject: fmt::Debug {
    /// Name of the dynamic type
    fn class_name(&self) -> &'static str {
        "A"
    }

    /// The `A` subobject
    fn as_a(&self) -> &A;

    /// The `A` subobject, mutably
    fn as_a_mut(&mut self) -> &mut A;

    /// Virtual `baz`; defaults to `A`'s body.
    fn baz(&mut self, z: i32) -> i32 {
        self.as_a_mut().base_baz(z)
    }
}
