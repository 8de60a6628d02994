//! Tests for the class model: construction, methods, shared fields

use memptr::*;

// ═══════════════════════════════════════════════════════════════════════
// Construction and Instance Fields
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_fresh_instances() {
    for _ in 0..3 {
        let a = A::new();
        assert_eq!(a.c, 'x');
        assert_eq!(a.j, 5);
    }
    assert_eq!(A::default(), A::new());
}

#[test]
fn test_instances_do_not_share_state() {
    let mut a1 = A::new();
    let a2 = A::new();
    a1.foo(0);
    a1.jj = 9;
    assert_eq!(a1.j, 8);
    assert_eq!(a2.j, 5);
    assert_eq!(a2.jj, 0);
}

// ═══════════════════════════════════════════════════════════════════════
// Methods
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_foo_returns_bumped_j_plus_arg() {
    let mut a = A::new();
    a.j = 137;
    let before = a.j;
    assert_eq!(a.foo(4), before + 3 + 4);
    assert_eq!(a.foo(4), before + 6 + 4);
}

#[test]
fn test_bar_from_121() {
    let mut a = A::new();
    a.j = 121;
    assert_eq!(a.bar(2), 152 + 137 + 4);
    assert_eq!(a.j, 137);
}

#[test]
fn test_bar_leaves_jj_alone() {
    let mut a = A::new();
    a.jj = 1331;
    a.bar(3);
    assert_eq!(a.jj, 1331);
}

#[test]
fn test_baz_default_body() {
    let mut a = A::new();
    a.j = 121;
    // j: 136, foo(15): j = 139, r = 154
    assert_eq!(AObject::baz(&mut a, 2), 154 + 139 + 24);
    assert_eq!(a.class_name(), "A");
}

#[test]
fn test_arithmetic_wraps() {
    let mut a = A::new();
    a.j = i32::MAX;
    assert_eq!(a.foo(0), i32::MIN + 2);
}

// ═══════════════════════════════════════════════════════════════════════
// Class-scoped Fields
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_static_fields_independent_of_instances() {
    assert_eq!(A::s(), 10);
    assert_eq!(B::s(), 20);

    {
        let many: Vec<A> = (0..10).map(|_| A::new()).collect();
        let bs = [B::new(), B::new()];
        assert_eq!(many.len() + bs.len(), 12);
    }

    assert_eq!(A::s(), 10);
    assert_eq!(B::s(), 20);
}

#[test]
fn test_fum_is_pure() {
    assert_eq!(fum(4), 2 + 13 * 4);
    assert_eq!(fum(4), 54);
}
