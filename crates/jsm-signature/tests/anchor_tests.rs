use super::*;

#[test]
fn test_var_args_anchor() {
    assert_eq!(render_anchor("([I[J)V", "foo", true, true).unwrap(), "foo(int[], long...)");
    assert_eq!(render_anchor("([I[J)V", "foo", false, true).unwrap(), "foo(int[], long[])");
    assert_eq!(render_anchor("([[I)V", "m", true, false).unwrap(), "m(int[]...)");
}

#[test]
fn test_var_args_requires_array_final_parameter() {
    let err = render_anchor("([II)V", "foo", true, true).unwrap_err();
    assert!(matches!(err, SignatureError::InvalidArgument { .. }));
    assert!(render_anchor("()V", "foo", true, true).is_err());
}

#[test]
fn test_compact_strips_package_of_resolved_names() {
    assert_eq!(
        render_anchor("(Ljava.lang.String;Ljava.util.Map$Entry;)V", "put", false, true).unwrap(),
        "put(String, Map.Entry)"
    );
    assert_eq!(
        render_anchor("(Ljava/lang/String;)V", "put", false, false).unwrap(),
        "put(java.lang.String)"
    );
    assert_eq!(render_anchor("(QString;)V", "put", false, true).unwrap(), "put(String)");
}

#[test]
fn test_generics_wildcards_and_captures() {
    assert_eq!(
        render_anchor("(Ljava.util.List<+Ljava.lang.Number;>;TT;)V", "add", false, true).unwrap(),
        "add(List, T)"
    );
    assert_eq!(
        render_anchor("(LOuter<TK;>.Inner<*>;)V", "take", false, false).unwrap(),
        "take(Outer.Inner)"
    );
    assert_eq!(
        render_anchor("(|Ljava.lang.Number;:Ljava.lang.Comparable;)V", "m", false, true).unwrap(),
        "m(Number & Comparable)"
    );
}

#[test]
fn test_skip_parameters_and_missing_name() {
    let options = AnchorOptions {
        skip_parameters: 1,
        ..AnchorOptions::default()
    };
    assert_eq!(
        render_anchor_with("(Lp.Outer;I)V", Some("Inner"), options).unwrap(),
        "Inner(int)"
    );
    assert_eq!(render_anchor_with("(I)V", None, AnchorOptions::default()).unwrap(), "(int)");
}

#[test]
fn test_invalid_signature_is_reported() {
    assert!(render_anchor("(I", "foo", false, true).unwrap_err().is_invalid_signature());
}

#[test]
fn test_simple_type_name() {
    assert_eq!(simple_type_name("Ljava.util.List<TT;>;").unwrap(), "List");
    assert_eq!(simple_type_name("QList;").unwrap(), "List");
    assert_eq!(simple_type_name("Ljava/util/Map$Entry;").unwrap(), "Entry");
    assert_eq!(simple_type_name("[I").unwrap(), "int[]");
    assert_eq!(simple_type_name("TT;").unwrap(), "T");
}
