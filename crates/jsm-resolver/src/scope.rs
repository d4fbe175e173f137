//! Lexical scopes handed over by the compiler front end.
//!
//! The front end owns the real scope graph; this core only reads it through
//! [`ScopeTree`]. [`ScopeArena`] is the plain in-memory implementation used
//! by embedders that copy scopes out of their compiler, and by tests.

use jsm_common::SourceRange;
use jsm_signature::TypeReference;

/// Index of a scope within its [`ScopeTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub u32);

#[derive(Clone, Debug)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub kind: ScopeKind,
}

#[derive(Clone, Debug)]
pub enum ScopeKind {
    CompilationUnit,
    /// Body of a named, local or anonymous class (`name` is empty for
    /// anonymous classes).
    Class { name: String },
    Method(MethodScope),
    Block,
}

/// What a method scope's reference context is.
#[derive(Clone, Debug)]
pub enum MethodScope {
    Method(MethodDeclaration),
    /// Field initializers and initializer blocks of the enclosing type.
    Initializer(TypeDeclaration),
    Lambda(LambdaExpression),
}

#[derive(Clone, Debug)]
pub struct MethodDeclaration {
    pub selector: String,
    pub arguments: Vec<TypeReference>,
}

/// The members of a type that own initializer code, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct TypeDeclaration {
    pub fields: Vec<FieldDeclaration>,
}

#[derive(Clone, Debug)]
pub struct FieldDeclaration {
    /// Empty for initializer blocks.
    pub name: String,
    pub kind: FieldDeclarationKind,
    pub range: SourceRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldDeclarationKind {
    Field,
    EnumConstant,
    Initializer,
}

#[derive(Clone, Debug)]
pub struct LambdaExpression {
    pub range: SourceRange,
    /// The functional interface the lambda was inferred to implement.
    pub resolved_type: Option<FunctionalInterface>,
    pub descriptor: Option<LambdaDescriptor>,
}

#[derive(Clone, Debug)]
pub struct FunctionalInterface {
    pub signature: String,
    pub valid: bool,
}

/// The single abstract method the lambda implements.
#[derive(Clone, Debug)]
pub struct LambdaDescriptor {
    pub selector: String,
    pub parameter_types: Vec<String>,
    pub return_type: String,
    /// Set when the front end could only produce an error binding.
    pub problem: bool,
}

/// Read-only view of the front end's scope graph.
pub trait ScopeTree {
    fn scope(&self, id: ScopeId) -> Option<&Scope>;
}

/// Scopes stored contiguously; ids are indices.
#[derive(Clone, Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
}

impl ScopeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, parent: Option<ScopeId>, kind: ScopeKind) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope { parent, kind });
        id
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl ScopeTree for ScopeArena {
    fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0 as usize)
    }
}
