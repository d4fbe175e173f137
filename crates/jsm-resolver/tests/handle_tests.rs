use super::*;

fn unit() -> ElementHandle {
    ElementHandle::project("app")
        .package_root("/app/src", false)
        .package("com.acme")
        .compilation_unit("Widget.java")
}

#[test]
fn test_handles_compare_structurally() {
    let a = unit().child_type("Widget").method("run", vec!["I".to_string()]);
    let b = unit().child_type("Widget").method("run", vec!["I".to_string()]);
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
    assert_ne!(a, unit().child_type("Widget").method("run", Vec::new()));
}

#[test]
fn test_with_occurrence_returns_fresh_handle() {
    let first = unit().child_type("Widget").child_type("");
    let second = first.with_occurrence(2);
    assert_eq!(first.occurrence_count(), 1);
    assert_eq!(second.occurrence_count(), 2);
    assert_ne!(first, second);
    assert_eq!(second.parent(), first.parent());
}

#[test]
fn test_ancestors_and_binary() {
    let method = unit().child_type("Widget").method("run", Vec::new());
    assert_eq!(method.compilation_unit_ancestor(), Some(&unit()));
    assert_eq!(method.ancestor(ElementType::Project).map(|p| p.name()), Some("app"));
    assert!(!method.is_binary());

    let binary = ElementHandle::project("app")
        .package_root("/app/lib/rt.jar", true)
        .package("java.lang")
        .class_file("String.class")
        .child_type("String");
    assert!(binary.is_binary());
    assert!(binary.compilation_unit_ancestor().is_none());
}

#[test]
fn test_memento() {
    let method = unit()
        .child_type("Widget")
        .method("run", vec!["[I".to_string(), "QString;".to_string()]);
    assert_eq!(
        method.memento(),
        "=app/\\/app\\/src<com.acme{Widget.java[Widget~run~\\[I~QString;"
    );
    let anonymous = unit().child_type("Widget").method("run", Vec::new()).child_type("").with_occurrence(2);
    assert!(anonymous.memento().ends_with("~run[!2"));
    assert!(unit().child_type("Widget").initializer(3).memento().ends_with("[Widget|3"));
    assert_eq!(anonymous.to_string(), anonymous.memento());
}

#[test]
fn test_lambda_memento() {
    let lambda = unit()
        .child_type("Widget")
        .method("run", Vec::new())
        .lambda_expression(10, 42, "QRunnable;")
        .lambda_method("run", Vec::new(), "V");
    assert!(lambda.memento().ends_with("~run)QRunnable;!10!42&run\"V"));
    assert_eq!(lambda.element_type(), ElementType::LambdaMethod);
}

#[test]
fn test_binary_type_name() {
    assert_eq!(binary_type_name("String"), "String");
    assert_eq!(binary_type_name("Map$Entry"), "Entry");
    assert_eq!(binary_type_name("Outer$1Local"), "Local");
    assert_eq!(binary_type_name("Outer$1"), "");
}
