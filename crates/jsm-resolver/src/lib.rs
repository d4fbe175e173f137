//! Handle resolver for the jsm Java source model.
//!
//! Maps compiler-level information to stable element handles:
//! - Lexical scopes (`resolve_scope`), for local and anonymous types,
//!   lambdas, initializers and fields
//! - Resource paths (`resolve_resource_path`), for compilation units and
//!   class files in source folders or archives
//! - Compiler bindings (`resolve_binding`), for types, methods and fields
//!
//! One [`HandleResolver`] is created per logical operation; it caches what it
//! learns for the length of that operation and is then dropped.

// Element handles and mementos
pub mod handle;
pub use handle::{ElementHandle, ElementKind, ElementType, binary_type_name};

// Front-end views
pub mod binding;
pub use binding::{
    Binding, BindingArena, BindingId, BindingTable, ClassBinding, FieldBinding, LocalType, MethodBinding,
    MethodDeclarationNode, TypeBinding,
};
pub mod scope;
pub use scope::{
    FieldDeclaration, FieldDeclarationKind, FunctionalInterface, LambdaDescriptor, LambdaExpression,
    MethodDeclaration, MethodScope, Scope, ScopeArena, ScopeId, ScopeKind, ScopeTree, TypeDeclaration,
};

pub mod error;
pub use error::{ConfigError, ResolveError, ResolveResultExt, Unresolvable};

// Classpath entry filters
pub mod patterns;
pub use patterns::PathPatterns;

// Model registry
pub mod model;
pub use model::{ClasspathKind, JavaModel, PackageRootEntry};

// Configured in-memory registry
pub mod workspace;
pub use workspace::{ClasspathEntry, ProjectConfig, WorkspaceConfig, WorkspaceModel};

// Resolver state and entry points
pub mod resolver;
pub use resolver::{AssertionPolicy, HandleResolver, ResolverOptions, ScopeRequest};
mod resolver_bindings;
mod resolver_paths;
pub use resolver_paths::ARCHIVE_ENTRY_SEPARATOR;
mod resolver_scopes;
