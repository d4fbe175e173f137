//! Element handles: persistent, immutable identifiers of model elements.
//!
//! A handle is a chain of `(kind, name, occurrence count)` links up to a
//! project. Two handles are equal iff their chains are equal, so a handle
//! built twice from the same inputs compares equal to the first one; the
//! resolver additionally hands out the *same* `Arc` for a cached key.

use std::fmt;
use std::sync::Arc;

// =============================================================================
// Element kinds
// =============================================================================

/// Discriminant of [`ElementKind`], for ancestor queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    Project,
    PackageRoot,
    Package,
    CompilationUnit,
    ClassFile,
    Type,
    Field,
    Method,
    Initializer,
    LambdaExpression,
    LambdaMethod,
    TypeParameter,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Project,
    /// Source folder, class folder or archive. The handle name is the root's
    /// workspace path.
    PackageRoot { archive: bool },
    /// The handle name is the dotted package name, empty for the default
    /// package.
    Package,
    CompilationUnit,
    ClassFile,
    Type,
    Field,
    Method { parameter_types: Vec<String> },
    /// The handle name is empty; siblings differ by occurrence count.
    Initializer,
    LambdaExpression {
        source_start: u32,
        source_end: u32,
        interface_signature: String,
    },
    LambdaMethod {
        parameter_types: Vec<String>,
        return_type: String,
    },
    TypeParameter,
}

impl ElementKind {
    pub const fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Project => ElementType::Project,
            ElementKind::PackageRoot { .. } => ElementType::PackageRoot,
            ElementKind::Package => ElementType::Package,
            ElementKind::CompilationUnit => ElementType::CompilationUnit,
            ElementKind::ClassFile => ElementType::ClassFile,
            ElementKind::Type => ElementType::Type,
            ElementKind::Field => ElementType::Field,
            ElementKind::Method { .. } => ElementType::Method,
            ElementKind::Initializer => ElementType::Initializer,
            ElementKind::LambdaExpression { .. } => ElementType::LambdaExpression,
            ElementKind::LambdaMethod { .. } => ElementType::LambdaMethod,
            ElementKind::TypeParameter => ElementType::TypeParameter,
        }
    }

    /// Memento delimiter introducing this kind.
    const fn delimiter(&self) -> char {
        match self {
            ElementKind::Project => '=',
            ElementKind::PackageRoot { .. } => '/',
            ElementKind::Package => '<',
            ElementKind::CompilationUnit => '{',
            ElementKind::ClassFile => '(',
            ElementKind::Type => '[',
            ElementKind::Field => '^',
            ElementKind::Method { .. } => '~',
            ElementKind::Initializer => '|',
            ElementKind::LambdaExpression { .. } => ')',
            ElementKind::LambdaMethod { .. } => '&',
            ElementKind::TypeParameter => ']',
        }
    }
}

// =============================================================================
// ElementHandle
// =============================================================================

#[derive(Debug, PartialEq, Eq, Hash)]
struct ElementData {
    parent: Option<ElementHandle>,
    kind: ElementKind,
    name: String,
    occurrence_count: u32,
}

/// Cheap to clone; never mutated after construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle(Arc<ElementData>);

impl ElementHandle {
    fn new(parent: Option<&ElementHandle>, kind: ElementKind, name: impl Into<String>) -> Self {
        Self(Arc::new(ElementData {
            parent: parent.cloned(),
            kind,
            name: name.into(),
            occurrence_count: 1,
        }))
    }

    fn child(&self, kind: ElementKind, name: impl Into<String>) -> Self {
        Self::new(Some(self), kind, name)
    }

    pub fn project(name: impl Into<String>) -> Self {
        Self::new(None, ElementKind::Project, name)
    }

    pub fn package_root(&self, path: impl Into<String>, archive: bool) -> Self {
        self.child(ElementKind::PackageRoot { archive }, path)
    }

    pub fn package(&self, dotted_name: impl Into<String>) -> Self {
        self.child(ElementKind::Package, dotted_name)
    }

    pub fn compilation_unit(&self, file_name: impl Into<String>) -> Self {
        self.child(ElementKind::CompilationUnit, file_name)
    }

    pub fn class_file(&self, file_name: impl Into<String>) -> Self {
        self.child(ElementKind::ClassFile, file_name)
    }

    /// A type declared directly in this unit, class file, type or member.
    pub fn child_type(&self, name: impl Into<String>) -> Self {
        self.child(ElementKind::Type, name)
    }

    pub fn field(&self, name: impl Into<String>) -> Self {
        self.child(ElementKind::Field, name)
    }

    pub fn method(&self, name: impl Into<String>, parameter_types: Vec<String>) -> Self {
        self.child(ElementKind::Method { parameter_types }, name)
    }

    pub fn initializer(&self, occurrence_count: u32) -> Self {
        self.child(ElementKind::Initializer, "").with_occurrence(occurrence_count)
    }

    pub fn lambda_expression(
        &self,
        source_start: u32,
        source_end: u32,
        interface_signature: impl Into<String>,
    ) -> Self {
        self.child(
            ElementKind::LambdaExpression {
                source_start,
                source_end,
                interface_signature: interface_signature.into(),
            },
            "",
        )
    }

    pub fn lambda_method(
        &self,
        selector: impl Into<String>,
        parameter_types: Vec<String>,
        return_type: impl Into<String>,
    ) -> Self {
        self.child(
            ElementKind::LambdaMethod {
                parameter_types,
                return_type: return_type.into(),
            },
            selector,
        )
    }

    pub fn type_parameter(&self, name: impl Into<String>) -> Self {
        self.child(ElementKind::TypeParameter, name)
    }

    /// A fresh handle identical to this one except for its occurrence count.
    #[must_use]
    pub fn with_occurrence(&self, occurrence_count: u32) -> Self {
        Self(Arc::new(ElementData {
            parent: self.0.parent.clone(),
            kind: self.0.kind.clone(),
            name: self.0.name.clone(),
            occurrence_count,
        }))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn parent(&self) -> Option<&ElementHandle> {
        self.0.parent.as_ref()
    }

    pub fn kind(&self) -> &ElementKind {
        &self.0.kind
    }

    pub fn element_type(&self) -> ElementType {
        self.0.kind.element_type()
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn occurrence_count(&self) -> u32 {
        self.0.occurrence_count
    }

    /// Parameter signatures of a method or lambda method; empty otherwise.
    pub fn parameter_types(&self) -> &[String] {
        match &self.0.kind {
            ElementKind::Method { parameter_types }
            | ElementKind::LambdaMethod {
                parameter_types, ..
            } => parameter_types,
            _ => &[],
        }
    }

    /// Whether both values share one allocation.
    pub fn ptr_eq(&self, other: &ElementHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Nearest ancestor of the given type, this handle included.
    pub fn ancestor(&self, element_type: ElementType) -> Option<&ElementHandle> {
        let mut current = Some(self);
        while let Some(handle) = current {
            if handle.element_type() == element_type {
                return Some(handle);
            }
            current = handle.parent();
        }
        None
    }

    pub fn compilation_unit_ancestor(&self) -> Option<&ElementHandle> {
        self.ancestor(ElementType::CompilationUnit)
    }

    /// Whether the element lives in a class file rather than in source.
    pub fn is_binary(&self) -> bool {
        self.ancestor(ElementType::ClassFile).is_some()
    }

    // -------------------------------------------------------------------------
    // Memento
    // -------------------------------------------------------------------------

    /// Persistent textual identifier, e.g. `=app/src<p{A.java[A~m~I`.
    pub fn memento(&self) -> String {
        let mut out = String::new();
        self.write_memento(&mut out);
        out
    }

    fn write_memento(&self, out: &mut String) {
        if let Some(parent) = self.parent() {
            parent.write_memento(out);
        }
        let data = &*self.0;
        out.push(data.kind.delimiter());
        match &data.kind {
            ElementKind::Initializer => {
                out.push_str(&data.occurrence_count.to_string());
                return;
            }
            ElementKind::LambdaExpression {
                source_start,
                source_end,
                interface_signature,
            } => {
                escape_into(interface_signature, out);
                out.push(JEM_COUNT);
                out.push_str(&source_start.to_string());
                out.push(JEM_COUNT);
                out.push_str(&source_end.to_string());
                return;
            }
            _ => escape_into(&data.name, out),
        }
        match &data.kind {
            ElementKind::Method { parameter_types } => {
                for parameter in parameter_types {
                    out.push('~');
                    escape_into(parameter, out);
                }
            }
            ElementKind::LambdaMethod {
                parameter_types,
                return_type,
            } => {
                for parameter in parameter_types {
                    out.push('~');
                    escape_into(parameter, out);
                }
                out.push(JEM_STRING);
                escape_into(return_type, out);
            }
            _ => {}
        }
        if data.occurrence_count > 1 {
            out.push(JEM_COUNT);
            out.push_str(&data.occurrence_count.to_string());
        }
    }
}

const JEM_COUNT: char = '!';
const JEM_STRING: char = '"';
const JEM_ESCAPE: char = '\\';

fn escape_into(name: &str, out: &mut String) {
    for c in name.chars() {
        if matches!(
            c,
            '=' | '/' | '<' | '{' | '(' | '[' | '^' | '~' | '|' | ')' | '&' | ']' | '!' | '"' | '\\'
        ) {
            out.push(JEM_ESCAPE);
        }
        out.push(c);
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.memento())
    }
}

impl fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementHandle({})", self.memento())
    }
}

/// Name of the type a class file declares: the part after the last `$`, with
/// the local-type counter stripped (`Outer$1Local` → `Local`, `Outer$1` → ``).
pub fn binary_type_name(class_name: &str) -> &str {
    match class_name.rfind('$') {
        None => class_name,
        Some(dollar) => class_name[dollar + 1..].trim_start_matches(|c: char| c.is_ascii_digit()),
    }
}

#[cfg(test)]
#[path = "../tests/handle_tests.rs"]
mod tests;
