//! The model registry the resolver reads from and extends.
//!
//! Implementors expose what the surrounding system already knows: projects,
//! their classpath roots, and how to derive child handles. Every method that
//! derives a child has a default that simply builds the handle; registries
//! backed by a real element tree override them to look elements up instead.

use jsm_common::NamingConventions;

use crate::handle::ElementHandle;
use crate::patterns::PathPatterns;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClasspathKind {
    Source,
    Library,
}

/// One configured root of a project, with its handle.
#[derive(Clone, Debug)]
pub struct PackageRootEntry {
    pub handle: ElementHandle,
    /// Normalized workspace path, without a trailing `/`.
    pub path: String,
    pub kind: ClasspathKind,
    pub archive: bool,
    pub patterns: PathPatterns,
}

pub trait JavaModel {
    fn naming(&self) -> &NamingConventions;

    /// Known projects in enumeration order.
    fn projects(&self) -> Vec<ElementHandle>;

    /// The project whose folder contains `path`.
    fn owning_project(&self, path: &str) -> Option<ElementHandle>;

    /// Classpath roots of `project`, in configuration order.
    fn package_roots(&self, project: &ElementHandle) -> &[PackageRootEntry];

    fn package(&self, root: &ElementHandle, segments: &[&str]) -> ElementHandle {
        root.package(segments.join("."))
    }

    fn member_type(&self, parent: &ElementHandle, name: &str) -> ElementHandle {
        parent.child_type(name)
    }

    fn method(&self, declaring_type: &ElementHandle, name: &str, parameter_types: Vec<String>) -> ElementHandle {
        declaring_type.method(name, parameter_types)
    }

    fn field(&self, declaring_type: &ElementHandle, name: &str) -> ElementHandle {
        declaring_type.field(name)
    }

    fn initializer(&self, declaring_type: &ElementHandle, occurrence_count: u32) -> ElementHandle {
        declaring_type.initializer(occurrence_count)
    }

    fn type_parameter(&self, declaring_member: &ElementHandle, name: &str) -> ElementHandle {
        declaring_member.type_parameter(name)
    }

    /// Innermost element of `unit` whose source range contains `position`.
    fn element_at(&self, _unit: &ElementHandle, _position: u32) -> Option<ElementHandle> {
        None
    }

    /// Methods declared by `declaring_type`, or `None` if the registry does
    /// not track them.
    fn methods(&self, _declaring_type: &ElementHandle) -> Option<Vec<ElementHandle>> {
        None
    }
}
