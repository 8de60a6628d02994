//! Field references (`int A::*`, `char A::*`)

use std::fmt;

use crate::class::{AObject, A};
use crate::error::{DispatchError, ReferenceKind, Result};

/// A type that a field reference can address.
pub trait MemberType: Copy + 'static {
    /// Spelling of the type in a declared member-pointer type
    const TYPE_NAME: &'static str;
}

impl MemberType for i32 {
    const TYPE_NAME: &'static str = "int";
}

impl MemberType for char {
    const TYPE_NAME: &'static str = "char";
}

/// Static description of one field of `A`: accessor pair plus
/// declaration position.
pub struct FieldDesc<T> {
    /// Owning class
    pub class: &'static str,

    /// Field name
    pub name: &'static str,

    /// Position in declaration order
    pub index: usize,

    /// Read the field from an instance
    pub get: fn(&A) -> T,

    /// Write the field on an instance
    pub set: fn(&mut A, T),
}

impl<T> fmt::Debug for FieldDesc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDesc")
            .field("class", &self.class)
            .field("name", &self.name)
            .field("index", &self.index)
            .finish()
    }
}

/// A pointer to a data member of `A`, unbound to any instance.
pub struct FieldRef<T: 'static> {
    pub(crate) target: Option<&'static FieldDesc<T>>,
}

// Manual impls: a derive would demand `T: Clone` etc. for a reference.
impl<T: 'static> Clone for FieldRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FieldRef<T> {}

impl<T: 'static> Default for FieldRef<T> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<T: 'static> fmt::Debug for FieldRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("target", &self.target)
            .finish()
    }
}

impl<T: 'static> PartialEq for FieldRef<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.target, other.target) {
            (None, None) => true,
            (Some(a), Some(b)) => a.class == b.class && a.index == b.index,
            _ => false,
        }
    }
}

impl<T: 'static> Eq for FieldRef<T> {}

impl<T: MemberType> FieldRef<T> {
    /// The null field reference.
    pub const fn null() -> Self {
        Self { target: None }
    }

    /// Bind to a field, e.g. `FieldRef::bind(&A::JJ)`.
    pub const fn bind(desc: &'static FieldDesc<T>) -> Self {
        Self { target: Some(desc) }
    }

    /// Whether this reference is unbound.
    pub fn is_null(&self) -> bool {
        self.target.is_none()
    }

    /// The field this reference names, if bound.
    pub fn target(&self) -> Option<&'static FieldDesc<T>> {
        self.target
    }

    /// Declared member-pointer type, e.g. `int A::*`.
    pub fn declared_type(&self) -> String {
        format!("{} A::*", T::TYPE_NAME)
    }

    fn resolve(&self) -> Result<&'static FieldDesc<T>> {
        self.target.ok_or_else(|| {
            DispatchError::invalid_reference(ReferenceKind::Field, self.declared_type())
        })
    }

    /// Read the addressed field of `obj`, as `obj.*self`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the reference is null.
    pub fn project(&self, obj: &dyn AObject) -> Result<T> {
        let desc = self.resolve()?;
        Ok((desc.get)(obj.as_a()))
    }

    /// Write the addressed field of `obj`, as `obj.*self = value`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the reference is null.
    pub fn store(&self, obj: &mut dyn AObject, value: T) -> Result<()> {
        let desc = self.resolve()?;
        (desc.set)(obj.as_a_mut(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_reads_current_value() {
        let mut a = A::new();
        a.jj = 1331;
        let pmi = FieldRef::bind(&A::JJ);
        assert_eq!(pmi.project(&a).unwrap(), 1331);

        a.jj = 7;
        assert_eq!(pmi.project(&a).unwrap(), 7);
    }

    #[test]
    fn test_store_writes_only_addressed_field() {
        let mut a = A::new();
        a.jj = 1;
        FieldRef::bind(&A::J).store(&mut a, 99).unwrap();
        assert_eq!(a.j, 99);
        assert_eq!(a.jj, 1);
    }

    #[test]
    fn test_null_field_fails() {
        let mut a = A::new();
        let pmi: FieldRef<i32> = FieldRef::null();
        let err = pmi.project(&a).unwrap_err();
        assert_eq!(
            err,
            DispatchError::invalid_reference(ReferenceKind::Field, "int A::*")
        );
        assert!(pmi.store(&mut a, 3).is_err());
        assert_eq!(a.j, 5);
    }

    #[test]
    fn test_char_field() {
        let a = A::new();
        let pmc = FieldRef::bind(&A::C);
        assert_eq!(pmc.project(&a).unwrap(), 'x');
        assert_eq!(pmc.declared_type(), "char A::*");
    }
}
