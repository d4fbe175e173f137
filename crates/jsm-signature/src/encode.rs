//! [`Signature`] → text, plus small text-level constructors.
//!
//! Encoding is plain concatenation. It checks only what the grammar would
//! reject on the way back in (void under an array, wildcards outside type
//! arguments, mixed class forms, empty or delimiter-bearing identifiers), so
//! that every string it returns decodes to an equal value.

use std::borrow::Cow;

use jsm_common::limits::MAX_ARRAY_DIMENSIONS;

use crate::chars::*;
use crate::decode::decode_type_signature;
use crate::error::SignatureError;
use crate::model::{ClassForm, ClassSignature, MemberType, Signature};
use crate::parser::{self, Validate};

/// Where a signature unit sits; decides which variants are legal there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    TopLevel,
    Parameter,
    Return,
    TypeArgument,
    ArrayElement,
    Bound,
}

struct Encoder {
    out: String,
    form: Option<ClassForm>,
}

impl Encoder {
    fn fail(&self, reason: &'static str) -> SignatureError {
        SignatureError::invalid(&self.out, self.out.len(), reason)
    }

    fn unit(&mut self, signature: &Signature, position: Position) -> Result<(), SignatureError> {
        match signature {
            Signature::Primitive(kind) => {
                if signature.is_void() && !matches!(position, Position::TopLevel | Position::Return)
                {
                    return Err(self.fail(if position == Position::ArrayElement {
                        "array of void"
                    } else {
                        "void is not allowed here"
                    }));
                }
                self.out.push(kind.code() as char);
            }
            Signature::Array { dimension, element } => {
                if *dimension == 0 || *dimension > MAX_ARRAY_DIMENSIONS {
                    return Err(self.fail("array dimension out of range"));
                }
                if element.is_array() {
                    return Err(self.fail("nested array element"));
                }
                for _ in 0..*dimension {
                    self.out.push(C_ARRAY as char);
                }
                self.unit(element, Position::ArrayElement)?;
            }
            Signature::Class(class) => self.class(class)?,
            Signature::TypeVariable(name) => {
                self.out.push(C_TYPE_VARIABLE as char);
                self.identifier(name)?;
                self.out.push(C_SEMICOLON as char);
            }
            Signature::Wildcard(bound) => {
                if position != Position::TypeArgument {
                    return Err(self.fail("wildcard outside type arguments"));
                }
                match bound {
                    None => self.out.push(C_STAR as char),
                    Some((kind, bound)) => {
                        self.out.push(kind.marker() as char);
                        self.unit(bound, Position::Bound)?;
                    }
                }
            }
            Signature::Capture(wildcard) => {
                self.out.push(C_CAPTURE as char);
                self.unit(wildcard, Position::TypeArgument)?;
            }
            Signature::Intersection(members) => {
                if members.is_empty() {
                    return Err(self.fail("empty intersection"));
                }
                self.out.push(C_INTERSECTION as char);
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        self.out.push(C_COLON as char);
                    }
                    self.unit(member, Position::Bound)?;
                }
            }
            Signature::Method(method) => {
                if position != Position::TopLevel {
                    return Err(self.fail("method signature nested in a type"));
                }
                self.out.push(C_PARAM_START as char);
                for parameter in &method.parameters {
                    self.unit(parameter, Position::Parameter)?;
                }
                self.out.push(C_PARAM_END as char);
                self.unit(&method.return_type, Position::Return)?;
            }
        }
        Ok(())
    }

    fn class(&mut self, class: &ClassSignature) -> Result<(), SignatureError> {
        match self.form {
            None => self.form = Some(class.form),
            Some(form) if form != class.form => {
                return Err(self.fail("resolved and unresolved class forms mixed"));
            }
            Some(_) => {}
        }
        if class.qualified_name.is_empty() {
            return Err(self.fail("empty class name"));
        }
        if !class.member_types.is_empty() && class.type_arguments.is_empty() {
            return Err(self.fail("member type of an unparameterized class"));
        }

        self.out.push(class.form.marker() as char);
        for (i, segment) in class.qualified_name.iter().enumerate() {
            if i > 0 {
                self.out.push(C_DOT as char);
            }
            self.identifier(segment)?;
        }
        self.type_arguments(&class.type_arguments)?;
        for MemberType {
            name,
            type_arguments,
        } in &class.member_types
        {
            self.out.push(C_DOT as char);
            self.identifier(name)?;
            self.type_arguments(type_arguments)?;
        }
        self.out.push(C_SEMICOLON as char);
        Ok(())
    }

    fn type_arguments(&mut self, arguments: &[Signature]) -> Result<(), SignatureError> {
        if arguments.is_empty() {
            return Ok(());
        }
        self.out.push(C_GENERIC_START as char);
        for argument in arguments {
            self.unit(argument, Position::TypeArgument)?;
        }
        self.out.push(C_GENERIC_END as char);
        Ok(())
    }

    fn identifier(&mut self, name: &str) -> Result<(), SignatureError> {
        if name.is_empty() {
            return Err(self.fail("empty identifier"));
        }
        if name.bytes().any(is_delimiter) {
            return Err(self.fail("delimiter inside identifier"));
        }
        self.out.push_str(name);
        Ok(())
    }
}

/// Canonical text of `signature`. Class names are always `.`-separated.
pub fn encode(signature: &Signature) -> Result<String, SignatureError> {
    let mut encoder = Encoder {
        out: String::new(),
        form: None,
    };
    encoder.unit(signature, Position::TopLevel)?;
    Ok(encoder.out)
}

/// Prefixes a valid non-void type signature with `dimensions` array markers.
pub fn create_array_signature(type_signature: &str, dimensions: u32) -> Result<String, SignatureError> {
    parser::parse_type::<Validate>(type_signature, false)?;
    let existing = type_signature.bytes().take_while(|&c| c == C_ARRAY).count() as u32;
    if existing
        .checked_add(dimensions)
        .filter(|total| *total <= MAX_ARRAY_DIMENSIONS)
        .is_none()
    {
        return Err(SignatureError::invalid(type_signature, 0, "too many array dimensions"));
    }
    let mut out = String::with_capacity(type_signature.len() + dimensions as usize);
    for _ in 0..dimensions {
        out.push(C_ARRAY as char);
    }
    out.push_str(type_signature);
    Ok(out)
}

/// Converts a class-file signature (`/` package separators) to the `.` form.
pub fn convert_type_signature(signature: &str) -> Cow<'_, str> {
    if memchr::memchr(C_SLASH, signature.as_bytes()).is_some() {
        Cow::Owned(signature.replace('/', "."))
    } else {
        Cow::Borrowed(signature)
    }
}

/// Source form of a compiler-produced type signature: every class unit
/// becomes unresolved and binary nested names (`Outer$Inner`) become dotted.
pub fn to_unresolved_type_signature(signature: &str) -> Result<String, SignatureError> {
    let mut decoded = decode_type_signature(signature, true)?;
    unresolve(&mut decoded);
    encode(&decoded)
}

fn unresolve(signature: &mut Signature) {
    match signature {
        Signature::Primitive(_) | Signature::TypeVariable(_) | Signature::Wildcard(None) => {}
        Signature::Array { element, .. } => unresolve(element),
        Signature::Wildcard(Some((_, bound))) => unresolve(bound),
        Signature::Capture(inner) => unresolve(inner),
        Signature::Intersection(members) => members.iter_mut().for_each(unresolve),
        Signature::Method(method) => {
            method.parameters.iter_mut().for_each(unresolve);
            unresolve(&mut method.return_type);
        }
        Signature::Class(class) => {
            class.form = ClassForm::Unresolved;
            class.qualified_name = split_binary_names(class.qualified_name.drain(..));
            class.type_arguments.iter_mut().for_each(unresolve);
            let members = std::mem::take(&mut class.member_types);
            for member in members {
                let mut names = split_binary_names(std::iter::once(member.name));
                let last = names.pop().unwrap_or_default();
                class.member_types.extend(names.into_iter().map(|name| MemberType {
                    name,
                    type_arguments: Vec::new(),
                }));
                let mut type_arguments = member.type_arguments;
                type_arguments.iter_mut().for_each(unresolve);
                class.member_types.push(MemberType {
                    name: last,
                    type_arguments,
                });
            }
        }
    }
}

/// `Outer$Inner` → `Outer`, `Inner`. Empty pieces (`Foo$`, `$1`) stay
/// attached so the result never contains an empty identifier.
fn split_binary_names(segments: impl Iterator<Item = String>) -> Vec<String> {
    let mut out = Vec::new();
    for segment in segments {
        if segment.split('$').any(str::is_empty) {
            out.push(segment);
        } else {
            out.extend(segment.split('$').map(str::to_string));
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/encode_tests.rs"]
mod tests;
