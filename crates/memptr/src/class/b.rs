//! Class `B`: no instance state, only a shared `s`

use std::sync::atomic::{AtomicI32, Ordering};

/// Storage for `B::s`. Unrelated to `A::s`.
static B_S: AtomicI32 = AtomicI32::new(20);

/// An instance of class `B`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct B;

impl B {
    /// Construct a `B`.
    pub fn new() -> Self {
        B
    }

    /// Read `B::s`.
    pub fn s() -> i32 {
        B_S.load(Ordering::Relaxed)
    }

    /// Write `B::s`.
    pub fn set_s(value: i32) {
        B_S.store(value, Ordering::Relaxed);
    }
}
