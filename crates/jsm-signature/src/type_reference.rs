//! Source-level type references, as written in a declaration.
//!
//! The compiler front end hands over the declared type of each method
//! argument in this shape. [`type_signature`] turns it into the unresolved
//! (`Q`) form used for method handle identity.

use crate::encode::encode;
use crate::error::SignatureError;
use crate::model::{ClassForm, ClassSignature, MemberType, PrimitiveKind, Signature, WildcardBound};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeReference {
    pub kind: TypeReferenceKind,
    /// Trailing `[]` pairs (or `...` on a variable-arity parameter).
    pub dimensions: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeReferenceKind {
    Primitive(PrimitiveKind),
    /// `a.b.Outer<X>.Inner<Y>`, one entry per dotted segment.
    Named(Vec<NameSegment>),
    Wildcard(Option<(WildcardBound, Box<TypeReference>)>),
    /// Multi-catch `A | B`.
    Union(Vec<TypeReference>),
    /// Cast or bound `A & B`.
    Intersection(Vec<TypeReference>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameSegment {
    pub name: String,
    pub type_arguments: Vec<TypeReference>,
}

impl TypeReference {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self {
            kind: TypeReferenceKind::Primitive(kind),
            dimensions: 0,
        }
    }

    /// A reference from a dotted name without type arguments. Primitive
    /// keywords (`int`, `void`, ...) produce primitive references.
    pub fn named(dotted_name: &str) -> Self {
        if let Some(kind) = PrimitiveKind::from_keyword(dotted_name) {
            return Self::primitive(kind);
        }
        Self {
            kind: TypeReferenceKind::Named(
                dotted_name
                    .split('.')
                    .map(|name| NameSegment {
                        name: name.to_string(),
                        type_arguments: Vec::new(),
                    })
                    .collect(),
            ),
            dimensions: 0,
        }
    }

    /// A named reference whose last segment carries `type_arguments`.
    pub fn parameterized(dotted_name: &str, type_arguments: Vec<TypeReference>) -> Self {
        let mut reference = Self::named(dotted_name);
        if let TypeReferenceKind::Named(segments) = &mut reference.kind {
            if let Some(last) = segments.last_mut() {
                last.type_arguments = type_arguments;
            }
        }
        reference
    }

    pub fn wildcard(bound: Option<(WildcardBound, TypeReference)>) -> Self {
        Self {
            kind: TypeReferenceKind::Wildcard(bound.map(|(kind, bound)| (kind, Box::new(bound)))),
            dimensions: 0,
        }
    }

    pub fn union(alternatives: Vec<TypeReference>) -> Self {
        Self {
            kind: TypeReferenceKind::Union(alternatives),
            dimensions: 0,
        }
    }

    pub fn intersection(members: Vec<TypeReference>) -> Self {
        Self {
            kind: TypeReferenceKind::Intersection(members),
            dimensions: 0,
        }
    }

    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// The written type name with segments joined by `.`, type arguments
    /// dropped.
    pub fn type_name(&self) -> String {
        match &self.kind {
            TypeReferenceKind::Primitive(kind) => kind.keyword().to_string(),
            TypeReferenceKind::Named(segments) => segments
                .iter()
                .map(|segment| segment.name.as_str())
                .collect::<Vec<_>>()
                .join("."),
            TypeReferenceKind::Wildcard(_) => "?".to_string(),
            TypeReferenceKind::Union(members) | TypeReferenceKind::Intersection(members) => {
                members
                    .first()
                    .map(TypeReference::type_name)
                    .unwrap_or_default()
            }
        }
    }

    fn to_signature(&self) -> Signature {
        let element = match &self.kind {
            TypeReferenceKind::Primitive(kind) => Signature::Primitive(*kind),
            TypeReferenceKind::Named(segments) => Signature::Class(class_signature(segments)),
            TypeReferenceKind::Wildcard(bound) => Signature::Wildcard(
                bound
                    .as_ref()
                    .map(|(kind, bound)| (*kind, Box::new(bound.to_signature()))),
            ),
            TypeReferenceKind::Union(members) | TypeReferenceKind::Intersection(members) => {
                Signature::Intersection(members.iter().map(TypeReference::to_signature).collect())
            }
        };
        Signature::array(self.dimensions, element)
    }
}

/// Segments up to the first parameterized one form the qualified name; the
/// rest become member types.
fn class_signature(segments: &[NameSegment]) -> ClassSignature {
    let split = segments
        .iter()
        .position(|segment| !segment.type_arguments.is_empty())
        .map_or(segments.len(), |index| index + 1);
    let (outer, members) = segments.split_at(split);
    ClassSignature {
        form: ClassForm::Unresolved,
        qualified_name: outer.iter().map(|segment| segment.name.clone()).collect(),
        type_arguments: outer
            .last()
            .map(|segment| segment.type_arguments.iter().map(TypeReference::to_signature).collect())
            .unwrap_or_default(),
        member_types: members
            .iter()
            .map(|segment| MemberType {
                name: segment.name.clone(),
                type_arguments: segment
                    .type_arguments
                    .iter()
                    .map(TypeReference::to_signature)
                    .collect(),
            })
            .collect(),
    }
}

/// Unresolved signature of a declared type. Union types encode as
/// intersection signatures.
pub fn type_signature(reference: &TypeReference) -> Result<String, SignatureError> {
    encode(&reference.to_signature())
}

#[cfg(test)]
#[path = "../tests/type_reference_tests.rs"]
mod tests;
