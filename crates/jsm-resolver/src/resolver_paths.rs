//! Resource path → compilation unit or class file handle.
//!
//! Two path forms are accepted:
//!
//! ```text
//! /app/src/com/acme/Widget.java              file below a source root
//! /app/lib/guava.jar|com/google/Lists.class  entry inside an archive
//! ```

use tracing::{debug, trace};

use crate::error::{ResolveError, Unresolvable};
use crate::handle::ElementHandle;
use crate::model::{JavaModel, PackageRootEntry};
use crate::patterns::PathPatterns;
use crate::resolver::{CachedRoot, HandleResolver, PackageKey};
use crate::workspace::normalize_path;

/// Separates an archive path from the entry path inside it.
pub const ARCHIVE_ENTRY_SEPARATOR: char = '|';

impl<'m, M: JavaModel + ?Sized> HandleResolver<'m, M> {
    /// Resolves a resource path to its compilation unit or class file.
    ///
    /// `scope_hint` lists the projects to search (in order) for an archive
    /// that is not on its owning project's classpath; without it all projects
    /// are searched.
    pub fn resolve_resource_path(
        &mut self,
        path: &str,
        scope_hint: Option<&[ElementHandle]>,
    ) -> Result<ElementHandle, ResolveError> {
        if !self.options.cache_containers {
            self.container.clear();
        }
        match path.split_once(ARCHIVE_ENTRY_SEPARATOR) {
            Some((archive, entry)) => self.resolve_archive_entry(archive, entry, scope_hint),
            None => self.resolve_file(&normalize_path(path)),
        }
    }

    fn resolve_archive_entry(
        &mut self,
        archive: &str,
        entry: &str,
        scope_hint: Option<&[ElementHandle]>,
    ) -> Result<ElementHandle, ResolveError> {
        let archive_path = normalize_path(archive);
        let cached = self
            .container
            .root
            .as_ref()
            .filter(|root| root.archive && root.path == archive_path)
            .map(|root| root.handle.clone());
        let root = match cached {
            Some(handle) => {
                trace!(archive = %archive_path, "container cache hit");
                handle
            }
            None => {
                let found = self
                    .find_archive_root(&archive_path, scope_hint)
                    .ok_or_else(|| Unresolvable::OutsideClasspath {
                        path: archive_path.clone(),
                    })?;
                debug!(archive = %archive_path, root = %found.handle, "container lookup");
                self.container.install(cached_root(found, None, Vec::new()))
            }
        };
        self.openable_in(&root, entry.trim_start_matches('/'))
    }

    /// The archive's entry on its owning project's classpath, else the first
    /// candidate project (hint order, or enumeration order) that lists it.
    fn find_archive_root(
        &self,
        archive_path: &str,
        scope_hint: Option<&[ElementHandle]>,
    ) -> Option<PackageRootEntry> {
        let model = self.model;
        let find_in = |project: &ElementHandle| {
            model
                .package_roots(project)
                .iter()
                .find(|root| root.archive && root.path == archive_path)
                .cloned()
        };
        match scope_hint {
            Some(projects) => projects.iter().find_map(find_in),
            None => model
                .owning_project(archive_path)
                .and_then(|owner| find_in(&owner))
                .or_else(|| model.projects().iter().find_map(find_in)),
        }
    }

    fn resolve_file(&mut self, path: &str) -> Result<ElementHandle, ResolveError> {
        let cached = self
            .container
            .root
            .as_ref()
            .filter(|root| !root.archive)
            .and_then(|root| {
                let relative = relative_to(path, &root.path)?;
                if !root.patterns.accepts(relative) || shadowed(path, &root.shadowing) {
                    return None;
                }
                (self.model.owning_project(path) == root.project).then(|| (root.handle.clone(), relative.len()))
            });
        let (root, relative_len) = match cached {
            Some(hit) => {
                trace!(path, "container cache hit");
                hit
            }
            None => {
                let project = self.model.owning_project(path);
                let (found, shadowing) = project
                    .as_ref()
                    .and_then(|project| self.find_folder_root(project, path))
                    .ok_or_else(|| Unresolvable::OutsideClasspath {
                        path: path.to_string(),
                    })?;
                debug!(path, root = %found.handle, "container lookup");
                let relative_len = relative_to(path, &found.path).map_or(0, str::len);
                (self.container.install(cached_root(found, project, shadowing)), relative_len)
            }
        };
        self.openable_in(&root, &path[path.len() - relative_len..])
    }

    /// First folder root of `project` that contains `path` and whose
    /// patterns accept it, with the folder roots listed before it.
    fn find_folder_root(
        &self,
        project: &ElementHandle,
        path: &str,
    ) -> Option<(PackageRootEntry, Vec<(String, PathPatterns)>)> {
        let mut earlier = Vec::new();
        for root in self.model.package_roots(project).iter().filter(|root| !root.archive) {
            if relative_to(path, &root.path).is_some_and(|relative| root.patterns.accepts(relative)) {
                return Some((root.clone(), earlier));
            }
            earlier.push((root.path.clone(), root.patterns.clone()));
        }
        None
    }

    /// `relative` is `pkg/segments/File.ext` below `root`.
    fn openable_in(&mut self, root: &ElementHandle, relative: &str) -> Result<ElementHandle, ResolveError> {
        let (package_path, file_name) = match relative.rsplit_once('/') {
            Some((package_path, file_name)) => (package_path, file_name),
            None => ("", relative),
        };
        let naming = self.model.naming();
        let is_source = naming.is_source_file_name(file_name);
        if !is_source && !naming.is_class_file_name(file_name) {
            return Err(Unresolvable::UnsupportedFileName {
                name: file_name.to_string(),
            }
            .into());
        }

        let segments: PackageKey = package_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        let package = self.package_handle(root, segments);
        Ok(if is_source {
            package.compilation_unit(file_name)
        } else {
            package.class_file(file_name)
        })
    }

    fn package_handle(&mut self, root: &ElementHandle, segments: PackageKey) -> ElementHandle {
        if let Some(package) = self.container.packages.get(&segments) {
            return package.clone();
        }
        let names: Vec<&str> = segments.iter().map(String::as_str).collect();
        let package = self.model.package(root, &names);
        if self.options.cache_containers {
            self.container.packages.insert(segments, package.clone());
        }
        package
    }
}

fn cached_root(
    entry: PackageRootEntry,
    project: Option<ElementHandle>,
    shadowing: Vec<(String, PathPatterns)>,
) -> CachedRoot {
    CachedRoot {
        path: entry.path,
        handle: entry.handle,
        archive: entry.archive,
        patterns: entry.patterns,
        project,
        shadowing,
    }
}

/// Whether an earlier folder root would claim `path`.
fn shadowed(path: &str, shadowing: &[(String, PathPatterns)]) -> bool {
    shadowing.iter().any(|(root, patterns)| {
        relative_to(path, root).is_some_and(|relative| patterns.accepts(relative))
    })
}

/// `path` relative to `root`, if it lies strictly below it.
fn relative_to<'p>(path: &'p str, root: &str) -> Option<&'p str> {
    let rest = path.strip_prefix(root)?;
    let rest = if root.ends_with('/') { rest } else { rest.strip_prefix('/')? };
    (!rest.is_empty()).then_some(rest)
}
