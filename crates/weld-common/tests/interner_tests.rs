use super::*;

#[test]
fn test_intern_deduplicates() {
    let mut interner = Interner::new();
    let a = interner.intern("value");
    let b = interner.intern("value");
    let c = interner.intern("data");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.resolve(a), "value");
    assert_eq!(interner.resolve(c), "data");
}

#[test]
fn test_empty_string_is_none_atom() {
    let mut interner = Interner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(Atom::NONE.is_none());
    assert_eq!(interner.resolve(Atom::NONE), "");
}

#[test]
fn test_get_does_not_intern() {
    let mut interner = Interner::new();
    assert_eq!(interner.get("Logger"), None);
    let len = interner.len();
    let atom = interner.intern("Logger");
    assert_eq!(interner.len(), len + 1);
    assert_eq!(interner.get("Logger"), Some(atom));
}

#[test]
fn test_out_of_bounds_atom() {
    let interner = Interner::new();
    assert_eq!(interner.try_resolve(Atom(99)), None);
    assert_eq!(interner.resolve(Atom(99)), "");
}
