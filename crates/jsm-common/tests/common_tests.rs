//! Public surface of the shared types, as the other crates see it.

use jsm_common::limits::{MAX_ARRAY_DIMENSIONS, MAX_SIGNATURE_NESTING_DEPTH, PACKAGE_CACHE_CAPACITY};
use jsm_common::{AssertionFailure, NamingConventions, SourceRange, assertion::ensure};

#[test]
fn test_limits_are_usable_bounds() {
    assert!(MAX_SIGNATURE_NESTING_DEPTH >= 32);
    assert_eq!(MAX_ARRAY_DIMENSIONS, 255);
    assert!(PACKAGE_CACHE_CAPACITY > 0);
}

#[test]
fn test_ensure_carries_message() {
    assert_eq!(ensure(true, || unreachable!()), Ok(()));
    let failure = ensure(false, || "generated signature `[V` is invalid".to_string()).unwrap_err();
    assert_eq!(failure, AssertionFailure::new("generated signature `[V` is invalid"));
    assert_eq!(failure.to_string(), "assertion failed: generated signature `[V` is invalid");
}

#[test]
fn test_declaration_ranges_are_inclusive() {
    let field = SourceRange::new(10, 20);
    assert!(field.contains(10) && field.contains(20));
    assert!(!field.contains(21));
    assert_eq!(field.len(), 11);
    assert!(SourceRange::new(0, 100).encloses(field));
}

#[test]
fn test_naming_round_trips_through_json() {
    let naming = NamingConventions::new(&["java"], &["class", "sig"]);
    let json = serde_json::to_string(&naming).unwrap();
    assert!(json.contains("classExtensions"));
    let back: NamingConventions = serde_json::from_str(&json).unwrap();
    assert!(back.is_class_file_name("Foo.sig"));
}
