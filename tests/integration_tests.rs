//! Integration tests for the jsm facade
//!
//! These tests go through the root crate the way an embedder would:
//! - Loading a workspace configuration from disk
//! - Resolving paths and scopes against it
//! - Rendering signatures of the resolved methods

use std::io::Write;

use jsm::resolver::{
    HandleResolver, MethodDeclaration, MethodScope, ScopeArena, ScopeKind, ScopeRequest,
};
use jsm::signature::{TypeReference, render_anchor, type_signature};

const WORKSPACE: &str = r#"{
    "projects": [
        {
            "name": "billing",
            "path": "/repo/billing",
            "classpath": [
                { "kind": "source", "path": "src" },
                { "kind": "library", "path": "/repo/libs/money.jar" }
            ]
        }
    ]
}"#;

/// Helper to write a config file into a fresh temp dir
fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn test_load_workspace_and_resolve_paths() {
    let (_dir, path) = write_config(WORKSPACE);
    let model = jsm::load_workspace(&path).unwrap();
    let mut resolver = HandleResolver::new(&model);

    let unit = resolver
        .resolve_resource_path("/repo/billing/src/billing/Invoice.java", None)
        .unwrap();
    assert_eq!(unit.name(), "Invoice.java");
    assert_eq!(unit.parent().map(|p| p.name()), Some("billing"));

    let class_file = resolver
        .resolve_resource_path("/repo/libs/money.jar|org/money/Amount.class", None)
        .unwrap();
    assert!(class_file.memento().contains("<org.money(Amount.class"));
}

#[test]
fn test_missing_config_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = jsm::load_workspace(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn test_invalid_config_reports_cause() {
    let (_dir, path) = write_config(
        r#"{ "projects": [ { "name": "a", "path": "/a", "classpath": [ { "kind": "source", "path": "src", "exclusionPatterns": ["a[b"] } ] } ] }"#,
    );
    let err = jsm::load_workspace(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("invalid workspace config"));
    assert!(message.contains("a[b"));
}

#[test]
fn test_method_scope_and_anchor_share_signatures() {
    let (_dir, path) = write_config(WORKSPACE);
    let model = jsm::load_workspace(&path).unwrap();
    let mut resolver = HandleResolver::new(&model);
    let unit = resolver
        .resolve_resource_path("/repo/billing/src/billing/Invoice.java", None)
        .unwrap();

    let arguments = vec![
        TypeReference::named("java.math.BigDecimal"),
        TypeReference::named("String").with_dimensions(1),
    ];
    let mut scopes = ScopeArena::new();
    let root = scopes.alloc(None, ScopeKind::CompilationUnit);
    let invoice = scopes.alloc(Some(root), ScopeKind::Class { name: "Invoice".to_string() });
    let add_line = scopes.alloc(
        Some(invoice),
        ScopeKind::Method(MethodScope::Method(MethodDeclaration {
            selector: "addLine".to_string(),
            arguments: arguments.clone(),
        })),
    );
    let handles = resolver
        .resolve_scopes(
            &scopes,
            &[ScopeRequest {
                scope: add_line,
                position: 0,
                unit,
            }],
        )
        .unwrap();
    let method = handles[0].clone().unwrap();

    let expected: Vec<String> = arguments.iter().map(|a| type_signature(a).unwrap()).collect();
    assert_eq!(method.parameter_types(), expected.as_slice());

    let method_signature = format!("({})V", method.parameter_types().concat());
    assert_eq!(
        render_anchor(&method_signature, method.name(), true, false).unwrap(),
        "addLine(java.math.BigDecimal, String...)"
    );
}
