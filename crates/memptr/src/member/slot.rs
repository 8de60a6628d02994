//! Reference-to-reference: a storage location holding a method reference

use std::cell::Cell;
use std::rc::Rc;

use crate::class::AObject;
use crate::error::Result;

use super::MethodRef;

/// A mutable storage location holding a [`MethodRef`] (a `PMF` variable).
///
/// Rebinding the slot is visible through every [`MethodSlotPtr`] taken
/// from it. Cloning a slot yields a new slot holding the same reference.
#[derive(Debug, Default)]
pub struct MethodSlot {
    cell: Rc<Cell<MethodRef>>,
}

impl Clone for MethodSlot {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl MethodSlot {
    /// Create a slot holding `method`.
    pub fn new(method: MethodRef) -> Self {
        Self {
            cell: Rc::new(Cell::new(method)),
        }
    }

    /// Current contents.
    pub fn get(&self) -> MethodRef {
        self.cell.get()
    }

    /// Rebind the slot.
    pub fn set(&self, method: MethodRef) {
        self.cell.set(method);
    }

    /// Take the address of the slot (`&pmf`).
    pub fn pointer(&self) -> MethodSlotPtr {
        MethodSlotPtr {
            cell: Rc::clone(&self.cell),
        }
    }

    /// Call through the slot's current reference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the slot holds a null reference.
    pub fn invoke(&self, obj: &mut dyn AObject, arg: i32) -> Result<i32> {
        self.get().invoke(obj, arg)
    }
}

/// A pointer to a [`MethodSlot`] (a `PMF *`).
#[derive(Debug, Clone)]
pub struct MethodSlotPtr {
    cell: Rc<Cell<MethodRef>>,
}

impl MethodSlotPtr {
    /// First dereference: the method reference currently in the slot.
    pub fn load(&self) -> MethodRef {
        self.cell.get()
    }

    /// Double dereference and call, as `(obj.**self)(arg)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the slot holds a null reference.
    pub fn invoke(&self, obj: &mut dyn AObject, arg: i32) -> Result<i32> {
        self.load().invoke(obj, arg)
    }

    /// Whether `self` points at `slot`.
    pub fn points_to(&self, slot: &MethodSlot) -> bool {
        Rc::ptr_eq(&self.cell, &slot.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::A;

    #[test]
    fn test_pointer_sees_rebind() {
        let pmf = MethodSlot::new(MethodRef::bind(&A::BAR));
        let pmf_p = pmf.pointer();
        pmf.set(MethodRef::bind(&A::FOO));
        assert_eq!(pmf_p.load(), MethodRef::bind(&A::FOO));
        assert!(pmf_p.points_to(&pmf));
    }

    #[test]
    fn test_indirection_depth_does_not_change_result() {
        let mut direct = A::new();
        let mut once = A::new();
        let mut twice = A::new();

        let pmf = MethodSlot::new(MethodRef::bind(&A::FOO));
        let pmf_p = pmf.pointer();

        let expected = direct.foo(5);
        assert_eq!(pmf.invoke(&mut once, 5).unwrap(), expected);
        assert_eq!(pmf_p.invoke(&mut twice, 5).unwrap(), expected);
        assert_eq!(once, direct);
        assert_eq!(twice, direct);
    }

    #[test]
    fn test_null_slot_fails() {
        let mut a = A::new();
        let pmf = MethodSlot::default();
        assert!(pmf.pointer().invoke(&mut a, 1).is_err());
    }
}
