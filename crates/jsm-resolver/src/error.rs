//! Resolver and configuration errors.

use jsm_common::AssertionFailure;
use jsm_signature::SignatureError;
use thiserror::Error;

use crate::binding::BindingId;
use crate::handle::ElementType;
use crate::scope::ScopeId;

/// Why a scope, binding or path denotes nothing the model tracks. These are
/// expected outcomes, reported to the caller and never logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unresolvable {
    #[error("nested types of binary members are not resolved from scopes")]
    BinaryMemberHost,
    #[error("element of type {0:?} cannot host a local type")]
    UnexpectedParent(ElementType),
    #[error("scope {0:?} is not part of the scope tree")]
    UnknownScope(ScopeId),
    #[error("scope {0:?} has no enclosing scope")]
    MissingParent(ScopeId),
    #[error("no field or initializer of the enclosing type contains offset {position}")]
    NoEnclosingMember { position: u32 },
    #[error("`{path}` is outside every configured source root and library")]
    OutsideClasspath { path: String },
    #[error("`{name}` is neither a source file nor a class file")]
    UnsupportedFileName { name: String },
    #[error("binding {0:?} is not part of the binding table")]
    UnknownBinding(BindingId),
    #[error("binding {0:?} has no corresponding element")]
    NoElement(BindingId),
    #[error("member binding has no declaring type")]
    NoDeclaringType,
    #[error("no method `{name}` matches in the declaring type")]
    NoSuchMethod { name: String },
    #[error(transparent)]
    InvalidSignature(#[from] SignatureError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Unresolvable(#[from] Unresolvable),
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
}

impl ResolveError {
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, ResolveError::Unresolvable(_))
    }
}

impl From<SignatureError> for ResolveError {
    fn from(err: SignatureError) -> Self {
        ResolveError::Unresolvable(Unresolvable::InvalidSignature(err))
    }
}

/// Turns "denotes nothing" into `None`, keeping assertion failures as errors.
pub trait ResolveResultExt<T> {
    fn found(self) -> Result<Option<T>, AssertionFailure>;
}

impl<T> ResolveResultExt<T> for Result<T, ResolveError> {
    fn found(self) -> Result<Option<T>, AssertionFailure> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(ResolveError::Unresolvable(_)) => Ok(None),
            Err(ResolveError::Assertion(failure)) => Err(failure),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid workspace configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid path pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("duplicate project name `{0}`")]
    DuplicateProject(String),
}
