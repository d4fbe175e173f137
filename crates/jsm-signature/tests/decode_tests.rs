use super::*;
use crate::model::{ClassForm, ClassSignature, MemberType, PrimitiveKind, WildcardBound};

#[test]
fn test_decode_primitives_and_arrays() {
    assert_eq!(
        decode_type_signature("I", false).unwrap(),
        Signature::primitive(PrimitiveKind::Int)
    );
    assert_eq!(
        decode_type_signature("[[J", false).unwrap(),
        Signature::array(2, Signature::primitive(PrimitiveKind::Long))
    );
    assert_eq!(decode_type_signature("V", true).unwrap(), Signature::void());
}

#[test]
fn test_decode_normalizes_slashes() {
    let dotted = decode_type_signature("Ljava.lang.String;", false).unwrap();
    let slashed = decode_type_signature("Ljava/lang/String;", false).unwrap();
    assert_eq!(dotted, slashed);
    assert_eq!(dotted, Signature::resolved("java.lang.String"));
}

#[test]
fn test_decode_parameterized_member_type() {
    let signature = decode_type_signature("LOuter<TK;>.Inner<*>;", false).unwrap();
    assert_eq!(
        signature,
        Signature::Class(ClassSignature {
            form: ClassForm::Resolved,
            qualified_name: vec!["Outer".to_string()],
            type_arguments: vec![Signature::type_variable("K")],
            member_types: vec![MemberType {
                name: "Inner".to_string(),
                type_arguments: vec![Signature::wildcard(None)],
            }],
        })
    );
}

#[test]
fn test_decode_wildcards_capture_intersection() {
    let list = decode_type_signature("QList<+QNumber;>;", false).unwrap();
    let class = list.as_class().unwrap();
    assert_eq!(class.form, ClassForm::Unresolved);
    assert_eq!(
        class.type_arguments,
        vec![Signature::wildcard(Some((
            WildcardBound::Extends,
            Signature::unresolved("Number")
        )))]
    );

    assert_eq!(
        decode_type_signature("!-TT;", false).unwrap(),
        Signature::Capture(Box::new(Signature::wildcard(Some((
            WildcardBound::Super,
            Signature::type_variable("T")
        )))))
    );

    assert_eq!(
        decode_type_signature("|LA;:LB;", false).unwrap(),
        Signature::Intersection(vec![Signature::resolved("A"), Signature::resolved("B")])
    );
}

#[test]
fn test_decode_method() {
    let method = decode_method_signature("(IZLjava.lang.String;)V").unwrap();
    let method = method.as_method().unwrap();
    assert_eq!(
        method.parameters,
        vec![
            Signature::primitive(PrimitiveKind::Int),
            Signature::primitive(PrimitiveKind::Boolean),
            Signature::resolved("java.lang.String"),
        ]
    );
    assert!(method.return_type.is_void());
}

#[test]
fn test_decode_dispatches_on_leading_paren() {
    assert!(decode("()V").unwrap().as_method().is_some());
    assert!(decode("V").unwrap().is_void());
    assert!(decode("(").is_err());
}

#[test]
fn test_decode_error_reports_position() {
    match decode_type_signature("Ljava.lang.String", false) {
        Err(SignatureError::InvalidSignature { position, .. }) => assert_eq!(position, 17),
        other => panic!("unexpected {other:?}"),
    }
}
