//! The per-pass handle resolver.
//!
//! One `HandleResolver` serves one logical operation (a search result batch,
//! a navigation request) and is dropped afterwards. It owns three pieces of
//! mutable state, none of them shared:
//!
//! - `known_scopes`: scope → handle, so a scope is resolved structurally once
//! - `existing`: local types already handed out, for occurrence counting
//! - `container`: the last package root touched by path resolution and the
//!   packages looked up inside it
//!
//! The scope, path and binding entry points live in `resolver_scopes.rs`,
//! `resolver_paths.rs` and `resolver_bindings.rs`.

use jsm_common::AssertionFailure;
use jsm_common::limits::{PACKAGE_CACHE_CAPACITY, SCOPE_CACHE_CAPACITY};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::error;

use crate::error::{ResolveError, ResolveResultExt};
use crate::handle::ElementHandle;
use crate::model::JavaModel;
use crate::patterns::PathPatterns;
use crate::scope::{ScopeId, ScopeTree};

/// What batch entry points do with an internal assertion failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssertionPolicy {
    /// Stop and return the failure.
    Propagate,
    /// Log it and report the item as unresolved.
    LogAndSkip,
}

impl Default for AssertionPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            AssertionPolicy::Propagate
        } else {
            AssertionPolicy::LogAndSkip
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Keep the last package root and its packages between path lookups.
    pub cache_containers: bool,
    pub assertion_policy: AssertionPolicy,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            cache_containers: true,
            assertion_policy: AssertionPolicy::default(),
        }
    }
}

/// One item of a [`HandleResolver::resolve_scopes`] batch.
#[derive(Clone, Debug)]
pub struct ScopeRequest {
    pub scope: ScopeId,
    /// Source offset of the element being looked up; picks the field or
    /// initializer inside initializer scopes.
    pub position: u32,
    pub unit: ElementHandle,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ScopeKey {
    pub unit: ElementHandle,
    pub scope: ScopeId,
    /// Only set for initializer scopes, whose result depends on the offset.
    pub position: Option<u32>,
}

pub(crate) struct CachedRoot {
    pub path: String,
    pub handle: ElementHandle,
    pub archive: bool,
    pub patterns: PathPatterns,
    /// Owning project of the folder paths that installed this root.
    pub project: Option<ElementHandle>,
    /// Folder roots listed before this one in the owning project; a path
    /// any of them accepts belongs to that root instead.
    pub shadowing: Vec<(String, PathPatterns)>,
}

pub(crate) type PackageKey = SmallVec<[String; 4]>;

#[derive(Default)]
pub(crate) struct ContainerCache {
    pub root: Option<CachedRoot>,
    pub packages: FxHashMap<PackageKey, ElementHandle>,
}

impl ContainerCache {
    pub(crate) fn install(&mut self, root: CachedRoot) -> ElementHandle {
        let handle = root.handle.clone();
        self.root = Some(root);
        self.packages = FxHashMap::with_capacity_and_hasher(PACKAGE_CACHE_CAPACITY, Default::default());
        handle
    }

    pub(crate) fn clear(&mut self) {
        self.root = None;
        self.packages.clear();
    }
}

pub struct HandleResolver<'m, M: JavaModel + ?Sized> {
    pub(crate) model: &'m M,
    pub(crate) options: ResolverOptions,
    pub(crate) known_scopes: FxHashMap<ScopeKey, ElementHandle>,
    pub(crate) existing: FxHashSet<ElementHandle>,
    pub(crate) container: ContainerCache,
}

impl<'m, M: JavaModel + ?Sized> HandleResolver<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self::with_options(model, ResolverOptions::default())
    }

    pub fn with_options(model: &'m M, options: ResolverOptions) -> Self {
        Self {
            model,
            options,
            known_scopes: FxHashMap::with_capacity_and_hasher(SCOPE_CACHE_CAPACITY, Default::default()),
            existing: FxHashSet::default(),
            container: ContainerCache::default(),
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn model(&self) -> &'m M {
        self.model
    }

    /// Forgets everything learned so far, as if freshly created.
    pub fn reset(&mut self) {
        self.known_scopes.clear();
        self.existing.clear();
        self.container.clear();
    }

    /// Resolves every request in order. Unresolvable items come back as
    /// `None`; assertion failures follow the configured policy.
    pub fn resolve_scopes<S: ScopeTree + ?Sized>(
        &mut self,
        scopes: &S,
        requests: &[ScopeRequest],
    ) -> Result<Vec<Option<ElementHandle>>, AssertionFailure> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            let result = self.resolve_scope(scopes, request.scope, request.position, &request.unit);
            results.push(self.settle(result)?);
        }
        Ok(results)
    }

    /// Resolves resource paths in order, sharing the container cache.
    pub fn resolve_resource_paths(
        &mut self,
        paths: &[&str],
        scope_hint: Option<&[ElementHandle]>,
    ) -> Result<Vec<Option<ElementHandle>>, AssertionFailure> {
        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            let result = self.resolve_resource_path(path, scope_hint);
            results.push(self.settle(result)?);
        }
        Ok(results)
    }

    fn settle(
        &self,
        result: Result<ElementHandle, ResolveError>,
    ) -> Result<Option<ElementHandle>, AssertionFailure> {
        match result.found() {
            Err(failure) if self.options.assertion_policy == AssertionPolicy::LogAndSkip => {
                error!(%failure, "skipping item after internal assertion failure");
                Ok(None)
            }
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
