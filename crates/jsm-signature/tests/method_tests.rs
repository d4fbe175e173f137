use super::*;
use crate::model::PrimitiveKind;

const SIGNATURE: &str = "(IZLjava.lang.String;)V";

#[test]
fn test_parameter_count() {
    assert_eq!(parameter_count(SIGNATURE).unwrap(), 3);
    assert_eq!(parameter_count("()V").unwrap(), 0);
    assert_eq!(parameter_count("([[ILjava.util.List<TT;>;TT;)TT;").unwrap(), 3);
    assert!(parameter_count("(I").is_err());
}

#[test]
fn test_extract_parameter_signatures() {
    assert_eq!(
        extract_parameter_signatures(SIGNATURE).unwrap(),
        vec![
            Signature::primitive(PrimitiveKind::Int),
            Signature::primitive(PrimitiveKind::Boolean),
            Signature::resolved("java.lang.String"),
        ]
    );
    assert!(extract_return_signature(SIGNATURE).unwrap().is_void());
}

#[test]
fn test_parameter_slices_close_units_inclusively() {
    assert_eq!(
        parameter_type_slices("([ILjava/util/Map<TK;TV;>;J)[Ljava/lang/Object;").unwrap(),
        vec!["[I", "Ljava/util/Map<TK;TV;>;", "J"]
    );
    assert_eq!(
        return_type_slice("([ILjava/util/Map<TK;TV;>;J)[Ljava/lang/Object;").unwrap(),
        "[Ljava/lang/Object;"
    );
}

#[test]
fn test_extract_parameter_types_normalizes_slashes() {
    assert_eq!(
        extract_parameter_types("(Ljava/lang/String;I)V").unwrap(),
        vec!["Ljava.lang.String;".to_string(), "I".to_string()]
    );
}

#[test]
fn test_trailing_characters_fail_extraction() {
    assert!(extract_parameter_signatures("(I)VI").is_err());
    assert!(return_type_slice("(I)").is_err());
}
