//! Method references (`int (A::*)(int)`)

use std::fmt;

use crate::class::AObject;
use crate::error::{DispatchError, ReferenceKind, Result};

/// Call thunk stored in a [`MethodDesc`].
pub type MethodThunk = fn(&mut dyn AObject, i32) -> i32;

/// Static description of one method of `A` with signature `int(int)`.
///
/// The thunk of a non-virtual method calls the `A` body directly. The
/// thunk of a virtual method goes through [`AObject`], so the override
/// of the receiver's dynamic type runs.
pub struct MethodDesc {
    /// Owning class
    pub class: &'static str,

    /// Method name
    pub name: &'static str,

    /// Whether the method occupies a virtual slot
    pub is_virtual: bool,

    /// Dispatch thunk
    pub call: MethodThunk,
}

impl fmt::Debug for MethodDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDesc")
            .field("class", &self.class)
            .field("name", &self.name)
            .field("is_virtual", &self.is_virtual)
            .finish()
    }
}

/// A pointer to a member function of `A`, unbound to any instance.
///
/// Defaults to null.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodRef {
    pub(crate) target: Option<&'static MethodDesc>,
}

impl MethodRef {
    /// Declared type of every method reference
    pub const DECLARED_TYPE: &'static str = "int (A::*)(int)";

    /// The null method reference.
    pub const fn null() -> Self {
        Self { target: None }
    }

    /// Bind to a method, e.g. `MethodRef::bind(&A::BAR)`.
    pub const fn bind(desc: &'static MethodDesc) -> Self {
        Self { target: Some(desc) }
    }

    /// Whether this reference is unbound.
    pub fn is_null(&self) -> bool {
        self.target.is_none()
    }

    /// The method this reference names, if bound.
    pub fn target(&self) -> Option<&'static MethodDesc> {
        self.target
    }

    /// Declared member-pointer type, `int (A::*)(int)`.
    pub fn declared_type(&self) -> &'static str {
        Self::DECLARED_TYPE
    }

    /// Call the bound method on `obj`, as `(obj.*self)(arg)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the reference is null.
    pub fn invoke(&self, obj: &mut dyn AObject, arg: i32) -> Result<i32> {
        let desc = self.target.ok_or_else(|| {
            DispatchError::invalid_reference(ReferenceKind::Method, Self::DECLARED_TYPE)
        })?;
        Ok((desc.call)(obj, arg))
    }
}

impl PartialEq for MethodRef {
    fn eq(&self, other: &Self) -> bool {
        match (self.target, other.target) {
            (None, None) => true,
            (Some(a), Some(b)) => a.class == b.class && a.name == b.name,
            _ => false,
        }
    }
}

impl Eq for MethodRef {}
