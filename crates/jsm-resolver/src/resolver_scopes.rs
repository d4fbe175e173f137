//! Scope chain → handle.

use jsm_common::AssertionFailure;
use jsm_common::assertion::ensure;
use jsm_common::limits::{MAX_OCCURRENCE_PROBES, MAX_SCOPE_DEPTH};
use jsm_signature::{TypeReference, is_valid_type_signature, type_signature, validate_type_signature};
use tracing::trace;

use crate::error::{ResolveError, Unresolvable};
use crate::handle::{ElementHandle, ElementType};
use crate::model::JavaModel;
use crate::resolver::{HandleResolver, ScopeKey};
use crate::scope::{
    FieldDeclarationKind, LambdaExpression, MethodScope, ScopeId, ScopeKind, ScopeTree,
    TypeDeclaration,
};

impl<'m, M: JavaModel + ?Sized> HandleResolver<'m, M> {
    /// Resolves `scope` (and, first, its enclosing scopes) to the handle of
    /// the element it belongs to. `unit` is the handle of the compilation
    /// unit the scope tree was built from.
    ///
    /// Within one pass, resolving the same scope again returns the cached
    /// handle without touching the model.
    pub fn resolve_scope<S: ScopeTree + ?Sized>(
        &mut self,
        scopes: &S,
        scope: ScopeId,
        position: u32,
        unit: &ElementHandle,
    ) -> Result<ElementHandle, ResolveError> {
        self.resolve_scope_at(scopes, scope, position, unit, 0)
    }

    fn resolve_scope_at<S: ScopeTree + ?Sized>(
        &mut self,
        scopes: &S,
        scope: ScopeId,
        position: u32,
        unit: &ElementHandle,
        depth: u32,
    ) -> Result<ElementHandle, ResolveError> {
        ensure(depth < MAX_SCOPE_DEPTH, || {
            format!("scope chain from {scope:?} exceeds {MAX_SCOPE_DEPTH} levels")
        })?;
        let data = scopes.scope(scope).ok_or(Unresolvable::UnknownScope(scope))?;

        let key = match &data.kind {
            ScopeKind::CompilationUnit => return Ok(unit.clone()),
            ScopeKind::Block => {
                let parent = data.parent.ok_or(Unresolvable::MissingParent(scope))?;
                return self.resolve_scope_at(scopes, parent, position, unit, depth + 1);
            }
            ScopeKind::Method(MethodScope::Initializer(_)) => ScopeKey {
                unit: unit.clone(),
                scope,
                position: Some(position),
            },
            ScopeKind::Class { .. } | ScopeKind::Method(_) => ScopeKey {
                unit: unit.clone(),
                scope,
                position: None,
            },
        };
        if let Some(known) = self.known_scopes.get(&key) {
            trace!(?scope, "scope cache hit");
            return Ok(known.clone());
        }

        let parent_id = data.parent.ok_or(Unresolvable::MissingParent(scope))?;
        let parent = self.resolve_scope_at(scopes, parent_id, position, unit, depth + 1)?;

        let handle = match &data.kind {
            ScopeKind::Class { name } => self.class_in(&parent, name)?,
            ScopeKind::Method(MethodScope::Lambda(lambda)) => match lambda_method(&parent, lambda) {
                Some(handle) => handle,
                // Not resolved well enough to name it: the lambda body
                // belongs to the enclosing element.
                None => return Ok(parent),
            },
            ScopeKind::Method(MethodScope::Initializer(declaration)) => {
                self.member_at(&parent, declaration, position)?
            }
            ScopeKind::Method(MethodScope::Method(method)) => {
                let declaring_type = expect_type(parent)?;
                let parameter_types = method
                    .arguments
                    .iter()
                    .map(generated_signature)
                    .collect::<Result<Vec<_>, _>>()?;
                self.model.method(&declaring_type, &method.selector, parameter_types)
            }
            ScopeKind::CompilationUnit | ScopeKind::Block => {
                return Err(AssertionFailure::new("transparent scope reached the cache path").into());
            }
        };

        trace!(?scope, handle = %handle, "scope resolved");
        self.known_scopes.insert(key, handle.clone());
        Ok(handle)
    }

    fn class_in(&mut self, parent: &ElementHandle, name: &str) -> Result<ElementHandle, ResolveError> {
        match parent.element_type() {
            ElementType::CompilationUnit | ElementType::ClassFile | ElementType::Type => {
                Ok(self.model.member_type(parent, name))
            }
            ElementType::Field | ElementType::Initializer | ElementType::Method | ElementType::LambdaMethod => {
                if parent.is_binary() {
                    return Err(Unresolvable::BinaryMemberHost.into());
                }
                let candidate = self.model.member_type(parent, name);
                self.disambiguate(candidate)
            }
            other => Err(Unresolvable::UnexpectedParent(other).into()),
        }
    }

    /// Bumps the occurrence count until the handle has not been handed out
    /// yet in this pass, then records it.
    fn disambiguate(&mut self, candidate: ElementHandle) -> Result<ElementHandle, ResolveError> {
        let mut handle = candidate;
        for _ in 0..MAX_OCCURRENCE_PROBES {
            if !self.existing.contains(&handle) {
                self.existing.insert(handle.clone());
                return Ok(handle);
            }
            handle = handle.with_occurrence(handle.occurrence_count() + 1);
        }
        Err(AssertionFailure::new(format!(
            "no free occurrence count for {handle} after {MAX_OCCURRENCE_PROBES} probes"
        ))
        .into())
    }

    /// The field or initializer of `parent` whose declaration contains
    /// `position`. Initializers are counted in declaration order.
    fn member_at(
        &self,
        parent: &ElementHandle,
        declaration: &TypeDeclaration,
        position: u32,
    ) -> Result<ElementHandle, ResolveError> {
        let mut occurrence = 1;
        for field in &declaration.fields {
            if field.range.contains(position) {
                return Ok(match field.kind {
                    FieldDeclarationKind::Field | FieldDeclarationKind::EnumConstant => {
                        self.model.field(parent, &field.name)
                    }
                    FieldDeclarationKind::Initializer => self.model.initializer(parent, occurrence),
                });
            }
            if field.kind == FieldDeclarationKind::Initializer {
                occurrence += 1;
            }
        }
        Err(Unresolvable::NoEnclosingMember { position }.into())
    }
}

/// The lambda method handle, if the front end resolved the lambda's
/// functional interface and descriptor without errors.
fn lambda_method(parent: &ElementHandle, lambda: &LambdaExpression) -> Option<ElementHandle> {
    let interface = lambda.resolved_type.as_ref().filter(|ty| ty.valid)?;
    let descriptor = lambda.descriptor.as_ref().filter(|d| !d.problem)?;
    let well_formed = is_valid_type_signature(&interface.signature, false)
        && is_valid_type_signature(&descriptor.return_type, true)
        && descriptor
            .parameter_types
            .iter()
            .all(|parameter| is_valid_type_signature(parameter, false));
    if !well_formed {
        return None;
    }
    Some(
        parent
            .lambda_expression(lambda.range.start, lambda.range.end, interface.signature.as_str())
            .lambda_method(
                descriptor.selector.as_str(),
                descriptor.parameter_types.clone(),
                descriptor.return_type.as_str(),
            ),
    )
}

fn expect_type(handle: ElementHandle) -> Result<ElementHandle, ResolveError> {
    match handle.element_type() {
        ElementType::Type => Ok(handle),
        other => Err(Unresolvable::UnexpectedParent(other).into()),
    }
}

/// Unresolved signature of a declared parameter type, checked before use.
pub(crate) fn generated_signature(reference: &TypeReference) -> Result<String, ResolveError> {
    let signature = type_signature(reference)?;
    validate_type_signature(&signature, false)?;
    Ok(signature)
}
