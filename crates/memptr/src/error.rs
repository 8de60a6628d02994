//! Error types for member-reference dispatch

use std::fmt;

use thiserror::Error;

/// Which flavour of member reference an error concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Pointer to member function
    Method,
    /// Pointer to data member
    Field,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Method => write!(f, "method reference"),
            ReferenceKind::Field => write!(f, "field reference"),
        }
    }
}

/// Main error type for member-reference operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A member reference was invoked or projected while unbound
    #[error("Invalid reference: {kind} of type `{declared}` is null")]
    InvalidReference {
        /// Method or field
        kind: ReferenceKind,
        /// Declared member-pointer type, e.g. `int (A::*)(int)`
        declared: String,
    },
}

impl DispatchError {
    /// Build an `InvalidReference` for a null reference of the given type.
    pub fn invalid_reference(kind: ReferenceKind, declared: impl Into<String>) -> Self {
        DispatchError::InvalidReference {
            kind,
            declared: declared.into(),
        }
    }
}

/// Result type alias for member-reference operations
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reference_message() {
        let err = DispatchError::invalid_reference(ReferenceKind::Method, "int (A::*)(int)");
        assert_eq!(
            err.to_string(),
            "Invalid reference: method reference of type `int (A::*)(int)` is null"
        );
    }

    #[test]
    fn test_reference_kind_display() {
        assert_eq!(ReferenceKind::Field.to_string(), "field reference");
    }
}
