//! Class `A`: instance state, ordinary and virtual methods, shared `s`

use std::sync::atomic::{AtomicI32, Ordering};

use crate::member::{FieldDesc, FieldRef, MethodDesc, MethodRef};

use super::AObject;

/// Storage for `A::s`, shared by every instance.
static A_S: AtomicI32 = AtomicI32::new(10);

/// An instance of class `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A {
    /// Set to `'x'` on construction
    pub c: char,

    /// Counter mutated by `foo`, `bar` and `baz`
    pub j: i32,

    /// Counter independent of `j`; the constructor leaves it at zero
    /// and callers set it before use
    pub jj: i32,
}

impl Default for A {
    fn default() -> Self {
        Self::new()
    }
}

impl A {
    // ═══════════════════════════════════════════════════════════════════
    // Member descriptors (the targets of `&A::member`)
    // ═══════════════════════════════════════════════════════════════════

    /// `int A::foo(int)`
    pub const FOO: MethodDesc = MethodDesc {
        class: "A",
        name: "foo",
        is_virtual: false,
        call: call_foo,
    };

    /// `int A::bar(int)`
    pub const BAR: MethodDesc = MethodDesc {
        class: "A",
        name: "bar",
        is_virtual: false,
        call: call_bar,
    };

    /// `virtual int A::baz(int)`
    pub const BAZ: MethodDesc = MethodDesc {
        class: "A",
        name: "baz",
        is_virtual: true,
        call: call_baz,
    };

    /// `char A::c`
    pub const C: FieldDesc<char> = FieldDesc {
        class: "A",
        name: "c",
        index: 0,
        get: |a| a.c,
        set: |a, v| a.c = v,
    };

    /// `int A::j`
    pub const J: FieldDesc<i32> = FieldDesc {
        class: "A",
        name: "j",
        index: 1,
        get: |a| a.j,
        set: |a, v| a.j = v,
    };

    /// `int A::jj`
    pub const JJ: FieldDesc<i32> = FieldDesc {
        class: "A",
        name: "jj",
        index: 2,
        get: |a| a.jj,
        set: |a, v| a.jj = v,
    };

    /// Construct a fresh instance: `c = 'x'`, `j = 5`.
    pub fn new() -> Self {
        Self {
            c: 'x',
            j: 5,
            jj: 0,
        }
    }

    /// Bump `j` by 3 and return `j + x`.
    pub fn foo(&mut self, x: i32) -> i32 {
        self.j = self.j.wrapping_add(3);
        self.j.wrapping_add(x)
    }

    /// Bump `j` by 13, call `foo(15)` on self, return `r + j + 2y`.
    ///
    /// The nested `foo` mutates `j` again, and the result sees that.
    pub fn bar(&mut self, y: i32) -> i32 {
        self.j = self.j.wrapping_add(13);
        let r = self.foo(15);
        r.wrapping_add(self.j).wrapping_add(y.wrapping_mul(2))
    }

    /// `A`'s own body for the virtual `baz`: bump `j` by 15, call
    /// `foo(15)`, return `r + j + 12z`.
    ///
    /// Call [`AObject::baz`] for dispatched behaviour; this is what the
    /// default slot runs.
    pub fn base_baz(&mut self, z: i32) -> i32 {
        self.j = self.j.wrapping_add(15);
        let r = self.foo(15);
        r.wrapping_add(self.j).wrapping_add(z.wrapping_mul(12))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Class-scoped field
    // ═══════════════════════════════════════════════════════════════════

    /// Read `A::s`.
    pub fn s() -> i32 {
        A_S.load(Ordering::Relaxed)
    }

    /// Write `A::s`. Every instance observes the new value.
    pub fn set_s(value: i32) {
        A_S.store(value, Ordering::Relaxed);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Member lookup by name
    // ═══════════════════════════════════════════════════════════════════

    /// All methods with signature `int(int)`, in declaration order.
    pub fn methods() -> [&'static MethodDesc; 3] {
        [&Self::FOO, &Self::BAR, &Self::BAZ]
    }

    /// Resolve `&A::<name>` for a method of type `int (A::*)(int)`.
    pub fn method(name: &str) -> Option<MethodRef> {
        Self::methods()
            .into_iter()
            .find(|m| m.name == name)
            .map(MethodRef::bind)
    }

    /// Resolve `&A::<name>` for a field of type `int A::*`.
    pub fn int_field(name: &str) -> Option<FieldRef<i32>> {
        [&Self::J, &Self::JJ]
            .into_iter()
            .find(|f| f.name == name)
            .map(FieldRef::bind)
    }

    /// Resolve `&A::<name>` for a field of type `char A::*`.
    pub fn char_field(name: &str) -> Option<FieldRef<char>> {
        (name == Self::C.name).then(|| FieldRef::bind(&Self::C))
    }
}

impl AObject for A {
    fn as_a(&self) -> &A {
        self
    }

    fn as_a_mut(&mut self) -> &mut A {
        self
    }
}

fn call_foo(obj: &mut dyn AObject, x: i32) -> i32 {
    obj.as_a_mut().foo(x)
}

fn call_bar(obj: &mut dyn AObject, y: i32) -> i32 {
    obj.as_a_mut().bar(y)
}

fn call_baz(obj: &mut dyn AObject, z: i32) -> i32 {
    obj.baz(z)
}
