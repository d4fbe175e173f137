//! Workspace configuration and the in-memory model built from it.
//!
//! ```json
//! {
//!   "projects": [{
//!     "name": "app",
//!     "path": "/app",
//!     "classpath": [
//!       { "kind": "source", "path": "src", "exclusionPatterns": ["**/generated/**"] },
//!       { "kind": "library", "path": "lib/guava.jar" }
//!     ]
//!   }],
//!   "naming": { "sourceExtensions": ["java"] }
//! }
//! ```

use indexmap::IndexMap;
use jsm_common::{NamingConventions, SourceRange};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::handle::ElementHandle;
use crate::model::{ClasspathKind, JavaModel, PackageRootEntry};
use crate::patterns::PathPatterns;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub naming: NamingConventions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub name: String,
    /// Workspace path of the project folder, e.g. `/app`.
    pub path: String,
    #[serde(default)]
    pub classpath: Vec<ClasspathEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClasspathEntry {
    pub kind: ClasspathKind,
    /// Relative to the project folder unless it starts with `/`.
    pub path: String,
    #[serde(default)]
    pub inclusion_patterns: Vec<String>,
    #[serde(default)]
    pub exclusion_patterns: Vec<String>,
}

impl WorkspaceConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug)]
struct ProjectState {
    handle: ElementHandle,
    path: String,
    roots: Vec<PackageRootEntry>,
}

/// A [`JavaModel`] over configured projects, plus optional knowledge of
/// declared methods and element ranges.
#[derive(Debug)]
pub struct WorkspaceModel {
    naming: NamingConventions,
    projects: IndexMap<String, ProjectState>,
    methods: FxHashMap<ElementHandle, Vec<ElementHandle>>,
    elements: FxHashMap<ElementHandle, Vec<(SourceRange, ElementHandle)>>,
}

impl WorkspaceModel {
    pub fn new(config: &WorkspaceConfig) -> Result<Self, ConfigError> {
        let mut projects = IndexMap::with_capacity(config.projects.len());
        for project in &config.projects {
            if projects.contains_key(&project.name) {
                return Err(ConfigError::DuplicateProject(project.name.clone()));
            }
            let handle = ElementHandle::project(project.name.as_str());
            let path = normalize_path(&project.path);
            let mut roots = Vec::with_capacity(project.classpath.len());
            for entry in &project.classpath {
                let root_path = if entry.path.starts_with('/') || entry.path.starts_with('\\') {
                    normalize_path(&entry.path)
                } else {
                    normalize_path(&format!("{path}/{}", entry.path))
                };
                let archive = is_archive_path(&root_path);
                roots.push(PackageRootEntry {
                    handle: handle.package_root(root_path.as_str(), archive),
                    path: root_path,
                    kind: entry.kind,
                    archive,
                    patterns: PathPatterns::new(
                        entry.inclusion_patterns.as_slice(),
                        entry.exclusion_patterns.as_slice(),
                    )?,
                });
            }
            debug!(project = %project.name, roots = roots.len(), "registered project");
            projects.insert(project.name.clone(), ProjectState { handle, path, roots });
        }
        Ok(Self {
            naming: config.naming.clone(),
            projects,
            methods: FxHashMap::default(),
            elements: FxHashMap::default(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Self::new(&WorkspaceConfig::from_json(text)?)
    }

    pub fn project(&self, name: &str) -> Option<&ElementHandle> {
        self.projects.get(name).map(|state| &state.handle)
    }

    /// Records the methods `declaring_type` declares, in source order.
    pub fn declare_methods(&mut self, declaring_type: &ElementHandle, methods: Vec<ElementHandle>) {
        self.methods.insert(declaring_type.clone(), methods);
    }

    /// Records that `element` spans `range` within `unit`.
    pub fn declare_element(&mut self, unit: &ElementHandle, range: SourceRange, element: ElementHandle) {
        self.elements
            .entry(unit.clone())
            .or_default()
            .push((range, element));
    }

    fn state(&self, project: &ElementHandle) -> Option<&ProjectState> {
        self.projects.get(project.name())
    }
}

impl JavaModel for WorkspaceModel {
    fn naming(&self) -> &NamingConventions {
        &self.naming
    }

    fn projects(&self) -> Vec<ElementHandle> {
        self.projects.values().map(|state| state.handle.clone()).collect()
    }

    fn owning_project(&self, path: &str) -> Option<ElementHandle> {
        self.projects
            .values()
            .filter(|state| is_within(path, &state.path))
            .max_by_key(|state| state.path.len())
            .map(|state| state.handle.clone())
    }

    fn package_roots(&self, project: &ElementHandle) -> &[PackageRootEntry] {
        self.state(project)
            .map(|state| state.roots.as_slice())
            .unwrap_or_default()
    }

    fn element_at(&self, unit: &ElementHandle, position: u32) -> Option<ElementHandle> {
        self.elements
            .get(unit)?
            .iter()
            .filter(|(range, _)| range.contains(position))
            .min_by_key(|(range, _)| range.len())
            .map(|(_, element)| element.clone())
    }

    fn methods(&self, declaring_type: &ElementHandle) -> Option<Vec<ElementHandle>> {
        self.methods.get(declaring_type).cloned()
    }
}

/// `\` becomes `/`; trailing separators are dropped.
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether `path` is `folder` itself or lies below it.
pub fn is_within(path: &str, folder: &str) -> bool {
    match path.strip_prefix(folder) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || folder.ends_with('/'),
        None => false,
    }
}

pub fn is_archive_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".jar") || lower.ends_with(".zip")
}

#[cfg(test)]
#[path = "../tests/workspace_tests.rs"]
mod tests;
