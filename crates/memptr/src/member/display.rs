//! Display implementations for member references
//!
//! Bound references print the way a debugger prints `&A::member`;
//! unbound ones print `NULL`.

use std::fmt;

use super::{FieldDesc, FieldRef, MethodDesc, MethodRef};

impl fmt::Display for MethodDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_virtual {
            write!(f, "virtual ")?;
        }
        write!(f, "{}::{}(int)", self.class, self.name)
    }
}

impl<T> fmt::Display for FieldDesc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class, self.name)
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(desc) => write!(f, "&{}", desc),
            None => write!(f, "NULL"),
        }
    }
}

impl<T: 'static> fmt::Display for FieldRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(desc) => write!(f, "&{}", desc),
            None => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::class::A;
    use crate::member::{FieldRef, MethodRef};

    #[test]
    fn test_method_display() {
        assert_eq!(MethodRef::bind(&A::BAR).to_string(), "&A::bar(int)");
        assert_eq!(MethodRef::bind(&A::BAZ).to_string(), "&virtual A::baz(int)");
        assert_eq!(MethodRef::null().to_string(), "NULL");
    }

    #[test]
    fn test_field_display() {
        assert_eq!(FieldRef::bind(&A::JJ).to_string(), "&A::jj");
        assert_eq!(FieldRef::<i32>::null().to_string(), "NULL");
    }
}
