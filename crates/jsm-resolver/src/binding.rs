//! Compiler bindings: the front end's resolved view of types and members.

use jsm_signature::TypeReference;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub u32);

#[derive(Clone, Debug)]
pub enum Binding {
    Type(TypeBinding),
    Method(MethodBinding),
    Field(FieldBinding),
}

#[derive(Clone, Debug)]
pub enum TypeBinding {
    Base,
    Wildcard,
    Intersection,
    Capture,
    Array { leaf: BindingId },
    /// Parameterized and raw types point at their generic declaration.
    Parameterized { erasure: BindingId },
    TypeVariable { name: String, declaring_element: BindingId },
    Class(ClassBinding),
}

#[derive(Clone, Debug)]
pub struct ClassBinding {
    pub source_name: String,
    /// Where the type was read from: a source path, a class-file path, or
    /// `archive|entry`. `None` for types without a backing file.
    pub file_name: Option<String>,
    /// `Some` for local and anonymous types.
    pub local: Option<LocalType>,
    pub enclosing: Option<BindingId>,
    pub is_static: bool,
    /// Generic signature with `/` separators, as the class file spells it.
    pub generic_signature: String,
}

#[derive(Clone, Debug)]
pub struct LocalType {
    pub source_start: u32,
    /// Binary name (`p/Outer$1`), when the type came from a class file.
    pub constant_pool_name: Option<String>,
}

#[derive(Clone, Debug)]
pub struct MethodBinding {
    pub selector: String,
    pub declaring_class: BindingId,
    pub is_constructor: bool,
    /// Generic signatures of the declared parameters.
    pub parameter_signatures: Vec<String>,
    /// The source declaration, when it is part of the current AST.
    pub declaration: Option<MethodDeclarationNode>,
}

#[derive(Clone, Debug)]
pub enum MethodDeclarationNode {
    /// Annotation type members never take parameters.
    AnnotationMember { selector: String },
    Method {
        selector: String,
        arguments: Vec<TypeReference>,
    },
}

#[derive(Clone, Debug)]
pub struct FieldBinding {
    pub name: String,
    /// `None` for `length` of arrays.
    pub declaring_class: Option<BindingId>,
}

/// Read-only view of the front end's bindings.
pub trait BindingTable {
    fn binding(&self, id: BindingId) -> Option<&Binding>;
}

#[derive(Clone, Debug, Default)]
pub struct BindingArena {
    bindings: Vec<Binding>,
}

impl BindingArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, binding: Binding) -> BindingId {
        let id = BindingId(self.bindings.len() as u32);
        self.bindings.push(binding);
        id
    }
}

impl BindingTable for BindingArena {
    fn binding(&self, id: BindingId) -> Option<&Binding> {
        self.bindings.get(id.0 as usize)
    }
}
