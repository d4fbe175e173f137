use super::*;

const CONFIG: &str = r#"{
    "projects": [
        {
            "name": "app",
            "path": "/app",
            "classpath": [
                { "kind": "source", "path": "src", "exclusionPatterns": ["**/generated/**"] },
                { "kind": "library", "path": "lib/guava.jar" },
                { "kind": "library", "path": "/opt/jdk/rt.jar" }
            ]
        },
        { "name": "app-tests", "path": "/app/tests" }
    ]
}"#;

#[test]
fn test_model_from_json() {
    let model = WorkspaceModel::from_json(CONFIG).unwrap();
    let app = model.project("app").unwrap().clone();
    let roots = model.package_roots(&app);
    assert_eq!(roots.len(), 3);
    assert_eq!(roots[0].path, "/app/src");
    assert_eq!(roots[0].kind, ClasspathKind::Source);
    assert!(!roots[0].archive);
    assert_eq!(roots[1].path, "/app/lib/guava.jar");
    assert!(roots[1].archive);
    assert_eq!(roots[2].path, "/opt/jdk/rt.jar");
    assert!(roots[0].patterns.is_excluded("p/generated/A.java"));
    assert_eq!(model.naming().default_source_extension(), "java");
}

#[test]
fn test_owning_project_prefers_longest_prefix() {
    let model = WorkspaceModel::from_json(CONFIG).unwrap();
    let owner = |path: &str| model.owning_project(path).map(|p| p.name().to_string());
    assert_eq!(owner("/app/src/A.java").as_deref(), Some("app"));
    assert_eq!(owner("/app/tests/T.java").as_deref(), Some("app-tests"));
    assert_eq!(owner("/application/A.java"), None);
    assert_eq!(owner("/elsewhere/A.java"), None);
}

#[test]
fn test_duplicate_project_is_rejected() {
    let config = r#"{ "projects": [ { "name": "a", "path": "/a" }, { "name": "a", "path": "/b" } ] }"#;
    assert!(matches!(
        WorkspaceModel::from_json(config),
        Err(ConfigError::DuplicateProject(name)) if name == "a"
    ));
}

#[test]
fn test_malformed_json_is_reported() {
    assert!(matches!(WorkspaceConfig::from_json("{"), Err(ConfigError::Json(_))));
}

#[test]
fn test_element_at_returns_innermost() {
    let mut model = WorkspaceModel::from_json(CONFIG).unwrap();
    let unit = model
        .project("app")
        .unwrap()
        .package_root("/app/src", false)
        .package("p")
        .compilation_unit("A.java");
    let ty = unit.child_type("A");
    let method = ty.method("run", Vec::new());
    model.declare_element(&unit, SourceRange::new(0, 100), ty.clone());
    model.declare_element(&unit, SourceRange::new(20, 40), method.clone());
    assert_eq!(model.element_at(&unit, 30), Some(method));
    assert_eq!(model.element_at(&unit, 50), Some(ty));
    assert_eq!(model.element_at(&unit, 101), None);
}

#[test]
fn test_path_helpers() {
    assert_eq!(normalize_path("C:\\work\\app\\"), "C:/work/app");
    assert_eq!(normalize_path("/"), "/");
    assert!(is_within("/app/src/A.java", "/app/src"));
    assert!(is_within("/app/src", "/app/src"));
    assert!(!is_within("/app/srcgen/A.java", "/app/src"));
    assert!(is_archive_path("/lib/Foo.JAR"));
    assert!(!is_archive_path("/lib/classes"));
}
