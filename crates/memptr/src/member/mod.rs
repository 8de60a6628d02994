//! Member references: unbound method and field references
//!
//! A member reference names a member of `A` without naming an instance.
//! The instance is supplied at the point of use:
//!
//! - [`MethodRef::invoke`] for `(obj.*pmf)(arg)`
//! - [`FieldRef::project`] / [`FieldRef::store`] for `obj.*pmi`
//! - [`MethodSlotPtr::invoke`] for `(obj.**pmf_p)(arg)`
//!
//! Every reference can be null. Using a null reference fails with
//! [`DispatchError::InvalidReference`](crate::DispatchError::InvalidReference).

mod display;
mod field;
mod method;
mod slot;

pub use field::{FieldDesc, FieldRef, MemberType};
pub use method::{MethodDesc, MethodRef, MethodThunk};
pub use slot::{MethodSlot, MethodSlotPtr};
