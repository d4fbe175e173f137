//! Structural representation of type and method signatures.

use crate::chars;

/// Primitive type codes, including `void`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Short,
        PrimitiveKind::Void,
    ];

    /// The one-character signature code.
    pub const fn code(self) -> u8 {
        match self {
            PrimitiveKind::Boolean => chars::C_BOOLEAN,
            PrimitiveKind::Byte => chars::C_BYTE,
            PrimitiveKind::Char => chars::C_CHAR,
            PrimitiveKind::Double => chars::C_DOUBLE,
            PrimitiveKind::Float => chars::C_FLOAT,
            PrimitiveKind::Int => chars::C_INT,
            PrimitiveKind::Long => chars::C_LONG,
            PrimitiveKind::Short => chars::C_SHORT,
            PrimitiveKind::Void => chars::C_VOID,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            chars::C_BOOLEAN => PrimitiveKind::Boolean,
            chars::C_BYTE => PrimitiveKind::Byte,
            chars::C_CHAR => PrimitiveKind::Char,
            chars::C_DOUBLE => PrimitiveKind::Double,
            chars::C_FLOAT => PrimitiveKind::Float,
            chars::C_INT => PrimitiveKind::Int,
            chars::C_LONG => PrimitiveKind::Long,
            chars::C_SHORT => PrimitiveKind::Short,
            chars::C_VOID => PrimitiveKind::Void,
            _ => return None,
        })
    }

    /// The Java keyword naming this type.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }
}

/// Resolved (`L`, bound by a compiler) or unresolved (`Q`, as written in
/// source) class reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassForm {
    Resolved,
    Unresolved,
}

impl ClassForm {
    pub const fn marker(self) -> u8 {
        match self {
            ClassForm::Resolved => chars::C_RESOLVED,
            ClassForm::Unresolved => chars::C_UNRESOLVED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Extends,
    Super,
}

impl WildcardBound {
    pub const fn marker(self) -> u8 {
        match self {
            WildcardBound::Extends => chars::C_EXTENDS,
            WildcardBound::Super => chars::C_SUPER,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            WildcardBound::Extends => "extends",
            WildcardBound::Super => "super",
        }
    }
}

/// A class type: `Lpkg.Outer<args>.Member<args>;`.
///
/// `member_types` only appear after a parameterized level; an unparameterized
/// member type is simply the last segment of `qualified_name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassSignature {
    pub form: ClassForm,
    pub qualified_name: Vec<String>,
    pub type_arguments: Vec<Signature>,
    pub member_types: Vec<MemberType>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberType {
    pub name: String,
    pub type_arguments: Vec<Signature>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub parameters: Vec<Signature>,
    pub return_type: Box<Signature>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Signature {
    Primitive(PrimitiveKind),
    /// `dimension` >= 1; `element` is never itself an array.
    Array {
        dimension: u32,
        element: Box<Signature>,
    },
    Class(ClassSignature),
    TypeVariable(String),
    /// `*`, `+Bound` or `-Bound`. Only legal as a type argument.
    Wildcard(Option<(WildcardBound, Box<Signature>)>),
    Capture(Box<Signature>),
    Intersection(Vec<Signature>),
    Method(MethodSignature),
}

impl Signature {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Signature::Primitive(kind)
    }

    pub fn void() -> Self {
        Signature::Primitive(PrimitiveKind::Void)
    }

    /// A class signature from a dotted name, without type arguments.
    pub fn class(form: ClassForm, dotted_name: &str) -> Self {
        Signature::Class(ClassSignature {
            form,
            qualified_name: dotted_name.split('.').map(str::to_string).collect(),
            type_arguments: Vec::new(),
            member_types: Vec::new(),
        })
    }

    pub fn resolved(dotted_name: &str) -> Self {
        Self::class(ClassForm::Resolved, dotted_name)
    }

    pub fn unresolved(dotted_name: &str) -> Self {
        Self::class(ClassForm::Unresolved, dotted_name)
    }

    pub fn parameterized(form: ClassForm, dotted_name: &str, type_arguments: Vec<Signature>) -> Self {
        let mut signature = Self::class(form, dotted_name);
        if let Signature::Class(class) = &mut signature {
            class.type_arguments = type_arguments;
        }
        signature
    }

    /// Wraps `element` in `dimension` array levels, flattening nested arrays.
    pub fn array(dimension: u32, element: Signature) -> Self {
        if dimension == 0 {
            return element;
        }
        match element {
            Signature::Array {
                dimension: inner,
                element,
            } => Signature::Array {
                dimension: dimension + inner,
                element,
            },
            element => Signature::Array {
                dimension,
                element: Box::new(element),
            },
        }
    }

    pub fn type_variable(name: &str) -> Self {
        Signature::TypeVariable(name.to_string())
    }

    pub fn wildcard(bound: Option<(WildcardBound, Signature)>) -> Self {
        Signature::Wildcard(bound.map(|(kind, bound)| (kind, Box::new(bound))))
    }

    pub fn method(parameters: Vec<Signature>, return_type: Signature) -> Self {
        Signature::Method(MethodSignature {
            parameters,
            return_type: Box::new(return_type),
        })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Signature::Array { .. })
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Signature::Primitive(PrimitiveKind::Void))
    }

    /// Array dimension, 0 for non-array signatures.
    pub fn dimension(&self) -> u32 {
        match self {
            Signature::Array { dimension, .. } => *dimension,
            _ => 0,
        }
    }

    /// The element type of an array, or the signature itself.
    pub fn element_type(&self) -> &Signature {
        match self {
            Signature::Array { element, .. } => element,
            other => other,
        }
    }

    pub fn as_class(&self) -> Option<&ClassSignature> {
        match self {
            Signature::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodSignature> {
        match self {
            Signature::Method(method) => Some(method),
            _ => None,
        }
    }
}

impl ClassSignature {
    /// Name of the innermost type (last member type or last name segment).
    pub fn simple_name(&self) -> &str {
        self.member_types.last().map_or_else(
            || self.qualified_name.last().map_or("", String::as_str),
            |member| member.name.as_str(),
        )
    }
}
