use super::*;

#[test]
fn test_primitives_and_void() {
    for code in ["Z", "B", "C", "D", "F", "I", "J", "S"] {
        assert!(is_valid_type_signature(code, false), "{code}");
    }
    assert!(!is_valid_type_signature("V", false));
    assert!(is_valid_type_signature("V", true));
    assert!(!is_valid_type_signature("[V", true));
    assert!(!is_valid_type_signature("X", false));
}

#[test]
fn test_empty_and_bare_array_are_invalid() {
    assert!(!is_valid_type_signature("", true));
    assert!(!is_valid_type_signature("[", true));
    assert!(!is_valid_type_signature("[[", false));
}

#[test]
fn test_class_signatures() {
    assert!(is_valid_type_signature("Ljava.lang.String;", false));
    assert!(is_valid_type_signature("Ljava/lang/String;", false));
    assert!(is_valid_type_signature("QString;", false));
    assert!(is_valid_type_signature("[[Ljava.util.Map$Entry;", false));
    assert!(!is_valid_type_signature("L;", false));
    assert!(!is_valid_type_signature("Ljava.lang.String", false));
    assert!(!is_valid_type_signature("Ljava..String;", false));
    assert!(!is_valid_type_signature("Ljava.lang.String;I", false));
}

#[test]
fn test_forms_are_never_mixed() {
    assert!(!is_valid_type_signature("Ljava/lang.String;", false));
    assert!(!is_valid_type_signature("Qjava/lang/String;", false));
    assert!(!is_valid_type_signature("Ljava.util.List<QString;>;", false));
    assert!(!is_valid_method_signature("(Ljava.lang.Object;QString;)V"));
    assert!(is_valid_method_signature("(QObject;QString;)V"));
}

#[test]
fn test_generics() {
    assert!(is_valid_type_signature("Ljava.util.List<Ljava.lang.String;>;", false));
    assert!(is_valid_type_signature("Ljava.util.Map<TK;TV;>;", false));
    assert!(is_valid_type_signature("Ljava.util.List<*>;", false));
    assert!(is_valid_type_signature("Ljava.util.List<+Ljava.lang.Number;>;", false));
    assert!(is_valid_type_signature("Ljava.util.List<-TT;>;", false));
    assert!(is_valid_type_signature("LOuter<TK;>.Inner<TV;>;", false));
    assert!(!is_valid_type_signature("Ljava.util.List<>;", false));
    assert!(!is_valid_type_signature("Ljava.util.List<Ljava.lang.String;;", false));
    assert!(!is_valid_type_signature("Ljava.util.List<Ljava.lang.String;", false));
    assert!(!is_valid_type_signature("Ljava.util.List<V>;", true));
}

#[test]
fn test_type_variables_captures_intersections() {
    assert!(is_valid_type_signature("TT;", false));
    assert!(!is_valid_type_signature("TT", false));
    assert!(!is_valid_type_signature("T;", false));
    assert!(is_valid_type_signature("!*", false));
    assert!(is_valid_type_signature("!+Ljava.lang.Number;", false));
    assert!(is_valid_type_signature("|Ljava.lang.Number;:Ljava.io.Serializable;", false));
    assert!(!is_valid_type_signature("|", false));
}

#[test]
fn test_wildcard_outside_type_arguments_is_invalid() {
    assert!(!is_valid_type_signature("*", false));
    assert!(!is_valid_type_signature("+TT;", false));
}

#[test]
fn test_method_signatures() {
    assert!(is_valid_method_signature("()V"));
    assert!(is_valid_method_signature("(IZLjava.lang.String;)V"));
    assert!(is_valid_method_signature("([I[J)[Ljava.lang.Object;"));
    assert!(!is_valid_method_signature("(I"));
    assert!(!is_valid_method_signature("(I)"));
    assert!(!is_valid_method_signature("(V)V"));
    assert!(!is_valid_method_signature("(I)VV"));
    assert!(!is_valid_method_signature("I)V"));
    assert!(!is_valid_method_signature(""));
}

#[test]
fn test_nesting_limit() {
    let depth = jsm_common::limits::MAX_SIGNATURE_NESTING_DEPTH as usize + 1;
    let signature = format!("{}TT;{}", "LList<".repeat(depth), ">;".repeat(depth));
    assert!(!is_valid_type_signature(&signature, false));
}

#[test]
fn test_validate_reports_assertion_failure() {
    assert!(validate_type_signature("I", false).is_ok());
    let failure = validate_type_signature("[V", true).unwrap_err();
    assert!(failure.message.contains("[V"));
    assert!(validate_method_signature("(I)V").is_ok());
    assert!(validate_method_signature("(I").is_err());
}

#[test]
fn test_check_reports_position() {
    assert!(check_type_signature("QList<TT;>;", false).is_ok());
    let err = check_type_signature("QList<TT;", false).unwrap_err();
    assert!(matches!(err, SignatureError::InvalidSignature { position: 9, .. }));
}
