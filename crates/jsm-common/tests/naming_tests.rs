use super::*;

#[test]
fn test_default_conventions() {
    let naming = NamingConventions::default();
    assert!(naming.is_source_file_name("X.java"));
    assert!(naming.is_class_file_name("X.class"));
    assert!(naming.is_class_file_name("Outer$Inner.class"));
    assert!(!naming.is_source_file_name("X.class"));
    assert!(!naming.is_class_file_name("X.java"));
    assert!(!naming.is_source_file_name("Xjava"));
    assert!(!naming.is_source_file_name("X.txt"));
    assert_eq!(naming.default_source_extension(), "java");
    assert_eq!(naming.default_class_extension(), "class");
}

#[test]
fn test_custom_extensions() {
    let naming = NamingConventions::new(&["java", "jav"], &["class"]);
    assert!(naming.is_source_file_name("A.jav"));
    assert_eq!(naming.index_of_source_extension("A.jav"), Some(1));
    assert_eq!(naming.index_of_source_extension("A.txt"), None);
}

#[test]
fn test_name_without_extension() {
    let naming = NamingConventions::default();
    assert_eq!(naming.name_without_extension("Foo.java"), "Foo");
    assert_eq!(naming.name_without_extension("Foo$1.class"), "Foo$1");
    assert_eq!(naming.name_without_extension("README"), "README");
}

#[test]
fn test_deserialize_partial_config_keeps_defaults() {
    let naming: NamingConventions =
        serde_json::from_str(r#"{ "sourceExtensions": ["java", "jsp"] }"#).expect("valid json");
    assert!(naming.is_source_file_name("index.jsp"));
    assert!(naming.is_class_file_name("A.class"));
}
