use super::*;
use crate::model::{PrimitiveKind, WildcardBound};

#[test]
fn test_encode_basic_units() {
    assert_eq!(encode(&Signature::primitive(PrimitiveKind::Int)).unwrap(), "I");
    assert_eq!(
        encode(&Signature::array(2, Signature::resolved("java.lang.String"))).unwrap(),
        "[[Ljava.lang.String;"
    );
    assert_eq!(encode(&Signature::type_variable("T")).unwrap(), "TT;");
    assert_eq!(encode(&Signature::void()).unwrap(), "V");
}

#[test]
fn test_encode_rejects_array_of_void() {
    let array_of_void = Signature::Array {
        dimension: 1,
        element: Box::new(Signature::void()),
    };
    let err = encode(&array_of_void).unwrap_err();
    assert!(err.is_invalid_signature());
}

#[test]
fn test_encode_rejects_misplaced_units() {
    assert!(encode(&Signature::wildcard(None)).is_err());
    assert!(encode(&Signature::method(vec![Signature::void()], Signature::void())).is_err());
    assert!(encode(&Signature::Intersection(Vec::new())).is_err());
    assert!(encode(&Signature::resolved("java..String")).is_err());
    assert!(encode(&Signature::Array {
        dimension: 0,
        element: Box::new(Signature::primitive(PrimitiveKind::Int)),
    })
    .is_err());
}

#[test]
fn test_encode_rejects_mixed_forms() {
    let mixed = Signature::parameterized(
        ClassForm::Resolved,
        "java.util.List",
        vec![Signature::unresolved("String")],
    );
    assert!(encode(&mixed).is_err());
}

#[test]
fn test_encode_method_and_generics() {
    let method = Signature::method(
        vec![
            Signature::parameterized(
                ClassForm::Unresolved,
                "Map",
                vec![
                    Signature::unresolved("String"),
                    Signature::wildcard(Some((WildcardBound::Extends, Signature::unresolved("Number")))),
                ],
            ),
            Signature::array(1, Signature::primitive(PrimitiveKind::Char)),
        ],
        Signature::void(),
    );
    assert_eq!(encode(&method).unwrap(), "(QMap<QString;+QNumber;>;[C)V");
}

#[test]
fn test_create_array_signature() {
    assert_eq!(create_array_signature("I", 2).unwrap(), "[[I");
    assert_eq!(create_array_signature("[QString;", 1).unwrap(), "[[QString;");
    assert!(create_array_signature("V", 1).is_err());
    assert!(create_array_signature("QString", 1).is_err());
}

#[test]
fn test_create_array_signature_rejects_dimension_overflow() {
    let err = create_array_signature("[I", u32::MAX).unwrap_err();
    assert!(err.is_invalid_signature());
    assert!(create_array_signature("I", u32::MAX).unwrap_err().is_invalid_signature());
}

#[test]
fn test_convert_type_signature() {
    assert_eq!(convert_type_signature("Ljava/lang/String;"), "Ljava.lang.String;");
    assert!(matches!(convert_type_signature("I"), Cow::Borrowed("I")));
}

#[test]
fn test_to_unresolved_type_signature() {
    assert_eq!(
        to_unresolved_type_signature("Ljava/util/Map$Entry<Ljava/lang/String;TV;>;").unwrap(),
        "Qjava.util.Map.Entry<Qjava.lang.String;TV;>;"
    );
    assert_eq!(to_unresolved_type_signature("[I").unwrap(), "[I");
    assert_eq!(
        to_unresolved_type_signature("[Lp/Outer<TK;>.Inner$Deep;").unwrap(),
        "[Qp.Outer<TK;>.Inner.Deep;"
    );
    assert_eq!(to_unresolved_type_signature("Lp/Anon$1;").unwrap(), "Qp.Anon.1;");
    assert!(to_unresolved_type_signature("Lbroken").is_err());
}
