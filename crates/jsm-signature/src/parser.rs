//! Single left-to-right signature parser shared by validation and decoding.
//!
//! The parser is generic over a [`Sink`] that decides what each recognized
//! unit turns into. [`Validate`] produces `()` (so no allocation happens for
//! plain validity checks and parameter counting), [`Build`] produces
//! [`Signature`] values. Because both run the exact same grammar, a string is
//! a valid signature if and only if it decodes.

use std::marker::PhantomData;
use std::ops::Range;

use jsm_common::limits::{MAX_ARRAY_DIMENSIONS, MAX_SIGNATURE_NESTING_DEPTH};

use crate::chars::*;
use crate::error::{Fault, SignatureError};
use crate::model::{ClassForm, ClassSignature, MemberType, PrimitiveKind, Signature, WildcardBound};

/// Result of parsing one unit: the produced value and the index just past it.
pub(crate) type Step<T> = Result<(T, usize), Fault>;

pub(crate) trait Sink<'a> {
    type Out;

    fn primitive(kind: PrimitiveKind) -> Self::Out;
    fn array(dimension: u32, element: Self::Out) -> Self::Out;
    fn class(
        form: ClassForm,
        name: &'a str,
        type_arguments: Vec<Self::Out>,
        member_types: Vec<(&'a str, Vec<Self::Out>)>,
    ) -> Self::Out;
    fn type_variable(name: &'a str) -> Self::Out;
    fn wildcard(bound: Option<(WildcardBound, Self::Out)>) -> Self::Out;
    fn capture(wildcard: Self::Out) -> Self::Out;
    fn intersection(members: Vec<Self::Out>) -> Self::Out;
    fn method(parameters: Vec<Self::Out>, return_type: Self::Out) -> Self::Out;
}

/// Recognizes without building anything.
pub(crate) struct Validate;

impl<'a> Sink<'a> for Validate {
    type Out = ();

    fn primitive(_: PrimitiveKind) {}
    fn array(_: u32, _: ()) {}
    fn class(_: ClassForm, _: &'a str, _: Vec<()>, _: Vec<(&'a str, Vec<()>)>) {}
    fn type_variable(_: &'a str) {}
    fn wildcard(_: Option<(WildcardBound, ())>) {}
    fn capture(_: ()) {}
    fn intersection(_: Vec<()>) {}
    fn method(_: Vec<()>, _: ()) {}
}

/// Builds structural [`Signature`] values.
pub(crate) struct Build;

impl<'a> Sink<'a> for Build {
    type Out = Signature;

    fn primitive(kind: PrimitiveKind) -> Signature {
        Signature::Primitive(kind)
    }

    fn array(dimension: u32, element: Signature) -> Signature {
        Signature::Array {
            dimension,
            element: Box::new(element),
        }
    }

    fn class(
        form: ClassForm,
        name: &'a str,
        type_arguments: Vec<Signature>,
        member_types: Vec<(&'a str, Vec<Signature>)>,
    ) -> Signature {
        Signature::Class(ClassSignature {
            form,
            qualified_name: name.split(['.', '/']).map(str::to_string).collect(),
            type_arguments,
            member_types: member_types
                .into_iter()
                .map(|(name, type_arguments)| MemberType {
                    name: name.to_string(),
                    type_arguments,
                })
                .collect(),
        })
    }

    fn type_variable(name: &'a str) -> Signature {
        Signature::TypeVariable(name.to_string())
    }

    fn wildcard(bound: Option<(WildcardBound, Signature)>) -> Signature {
        Signature::Wildcard(bound.map(|(kind, bound)| (kind, Box::new(bound))))
    }

    fn capture(wildcard: Signature) -> Signature {
        Signature::Capture(Box::new(wildcard))
    }

    fn intersection(members: Vec<Signature>) -> Signature {
        Signature::Intersection(members)
    }

    fn method(parameters: Vec<Signature>, return_type: Signature) -> Signature {
        Signature::method(parameters, return_type)
    }
}

pub(crate) struct Parser<'a, S> {
    text: &'a str,
    bytes: &'a [u8],
    /// Marker of the first class unit seen; all others must agree.
    form: Option<ClassForm>,
    /// First package separator seen; all others must agree.
    separator: Option<u8>,
    depth: u32,
    _sink: PhantomData<S>,
}

impl<'a, S: Sink<'a>> Parser<'a, S> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            form: None,
            separator: None,
            depth: 0,
            _sink: PhantomData,
        }
    }

    #[inline]
    fn peek(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// One type signature unit starting at `start`.
    pub(crate) fn type_signature(&mut self, start: usize, allow_void: bool) -> Step<S::Out> {
        let mut index = start;
        let mut dimension = 0u32;
        while self.peek(index) == Some(C_ARRAY) {
            dimension += 1;
            if dimension > MAX_ARRAY_DIMENSIONS {
                return Err(Fault::at(index, "too many array dimensions"));
            }
            index += 1;
        }
        let Some(c) = self.peek(index) else {
            return Err(Fault::at(index, "unexpected end of signature"));
        };
        let (element, end) = match c {
            C_VOID => {
                if !allow_void {
                    return Err(Fault::at(index, "void is not allowed here"));
                }
                if dimension != 0 {
                    return Err(Fault::at(index, "array of void"));
                }
                (S::primitive(PrimitiveKind::Void), index + 1)
            }
            C_RESOLVED | C_UNRESOLVED => self.class_type(index)?,
            C_TYPE_VARIABLE => self.type_variable(index)?,
            C_CAPTURE => self.nested(index, |parser| parser.capture(index))?,
            C_INTERSECTION => self.nested(index, |parser| parser.intersection(index))?,
            _ => match PrimitiveKind::from_code(c) {
                Some(kind) => (S::primitive(kind), index + 1),
                None => return Err(Fault::at(index, "unexpected character")),
            },
        };
        if dimension == 0 {
            Ok((element, end))
        } else {
            Ok((S::array(dimension, element), end))
        }
    }

    fn nested<T>(&mut self, at: usize, f: impl FnOnce(&mut Self) -> Step<T>) -> Step<T> {
        if self.depth >= MAX_SIGNATURE_NESTING_DEPTH {
            return Err(Fault::at(at, "signature nested too deeply"));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// At least one non-delimiter character; returns the index past it.
    fn identifier(&self, start: usize) -> Result<usize, Fault> {
        let mut index = start;
        while let Some(c) = self.peek(index) {
            if is_delimiter(c) {
                break;
            }
            index += 1;
        }
        if index == start {
            Err(Fault::at(start, "expected an identifier"))
        } else {
            Ok(index)
        }
    }

    fn class_type(&mut self, start: usize) -> Step<S::Out> {
        let form = if self.bytes[start] == C_RESOLVED {
            ClassForm::Resolved
        } else {
            ClassForm::Unresolved
        };
        match self.form {
            None => self.form = Some(form),
            Some(seen) if seen != form => {
                return Err(Fault::at(start, "resolved and unresolved class forms mixed"));
            }
            Some(_) => {}
        }

        let name_start = start + 1;
        let mut index = self.identifier(name_start)?;
        while let Some(separator @ (C_DOT | C_SLASH)) = self.peek(index) {
            if separator == C_SLASH && form == ClassForm::Unresolved {
                return Err(Fault::at(index, "'/' in an unresolved class name"));
            }
            match self.separator {
                None => self.separator = Some(separator),
                Some(seen) if seen != separator => {
                    return Err(Fault::at(index, "'.' and '/' separators mixed"));
                }
                Some(_) => {}
            }
            index = self.identifier(index + 1)?;
        }
        let name = &self.text[name_start..index];

        let mut type_arguments = Vec::new();
        let mut member_types = Vec::new();
        if self.peek(index) == Some(C_GENERIC_START) {
            let (arguments, next) = self.nested(index, |parser| parser.type_arguments(index))?;
            type_arguments = arguments;
            index = next;
            while self.peek(index) == Some(C_DOT) {
                let member_start = index + 1;
                index = self.identifier(member_start)?;
                let member_name = &self.text[member_start..index];
                let mut member_arguments = Vec::new();
                if self.peek(index) == Some(C_GENERIC_START) {
                    let (arguments, next) =
                        self.nested(index, |parser| parser.type_arguments(index))?;
                    member_arguments = arguments;
                    index = next;
                }
                member_types.push((member_name, member_arguments));
            }
        }

        if self.peek(index) != Some(C_SEMICOLON) {
            return Err(Fault::at(index, "unterminated class signature"));
        }
        Ok((S::class(form, name, type_arguments, member_types), index + 1))
    }

    fn type_variable(&mut self, start: usize) -> Step<S::Out> {
        let name_start = start + 1;
        let end = self.identifier(name_start)?;
        if self.peek(end) != Some(C_SEMICOLON) {
            return Err(Fault::at(end, "unterminated type variable"));
        }
        Ok((S::type_variable(&self.text[name_start..end]), end + 1))
    }

    /// `<` TypeArgument+ `>`; `start` is at the `<`.
    fn type_arguments(&mut self, start: usize) -> Step<Vec<S::Out>> {
        let mut index = start + 1;
        let mut arguments = Vec::new();
        loop {
            match self.peek(index) {
                None => return Err(Fault::at(index, "unterminated type arguments")),
                Some(C_GENERIC_END) if arguments.is_empty() => {
                    return Err(Fault::at(index, "empty type arguments"));
                }
                Some(C_GENERIC_END) => return Ok((arguments, index + 1)),
                Some(_) => {
                    let (argument, next) = self.type_argument(index)?;
                    arguments.push(argument);
                    index = next;
                }
            }
        }
    }

    pub(crate) fn type_argument(&mut self, start: usize) -> Step<S::Out> {
        match self.peek(start) {
            Some(C_STAR) => Ok((S::wildcard(None), start + 1)),
            Some(C_EXTENDS) => {
                let (bound, end) = self.type_signature(start + 1, false)?;
                Ok((S::wildcard(Some((WildcardBound::Extends, bound))), end))
            }
            Some(C_SUPER) => {
                let (bound, end) = self.type_signature(start + 1, false)?;
                Ok((S::wildcard(Some((WildcardBound::Super, bound))), end))
            }
            _ => self.type_signature(start, false),
        }
    }

    fn capture(&mut self, start: usize) -> Step<S::Out> {
        let (wildcard, end) = self.type_argument(start + 1)?;
        Ok((S::capture(wildcard), end))
    }

    fn intersection(&mut self, start: usize) -> Step<S::Out> {
        let (first, mut index) = self.type_signature(start + 1, false)?;
        let mut members = vec![first];
        while self.peek(index) == Some(C_COLON) {
            let (member, next) = self.type_signature(index + 1, false)?;
            members.push(member);
            index = next;
        }
        Ok((S::intersection(members), index))
    }

    /// `(` parameters `)` return. Calls `on_parameter` with each parameter's
    /// byte range as it is consumed, and returns the return type's range and
    /// value. Does not require the return type to end the text.
    pub(crate) fn method_signature(
        &mut self,
        mut on_parameter: impl FnMut(Range<usize>, S::Out),
    ) -> Step<(Range<usize>, S::Out)> {
        if self.peek(0) != Some(C_PARAM_START) {
            return Err(Fault::at(0, "method signature must start with '('"));
        }
        let mut index = 1;
        loop {
            match self.peek(index) {
                None => return Err(Fault::at(index, "unterminated parameter list")),
                Some(C_PARAM_END) => break,
                Some(_) => {
                    let (parameter, end) = self.type_signature(index, false)?;
                    on_parameter(index..end, parameter);
                    index = end;
                }
            }
        }
        let return_start = index + 1;
        let (return_type, end) = self.type_signature(return_start, true)?;
        Ok(((return_start..end, return_type), end))
    }
}

/// Parses `text` as exactly one type signature.
pub(crate) fn parse_type<'a, S: Sink<'a>>(
    text: &'a str,
    allow_void: bool,
) -> Result<S::Out, SignatureError> {
    let mut parser = Parser::<S>::new(text);
    let (value, end) = parser
        .type_signature(0, allow_void)
        .map_err(|fault| fault.into_error(text))?;
    if end != text.len() {
        return Err(SignatureError::invalid(text, end, "trailing characters"));
    }
    Ok(value)
}

/// Parses `text` as exactly one method signature, reporting parameters to
/// `on_parameter` in order.
pub(crate) fn parse_method<'a, S: Sink<'a>>(
    text: &'a str,
    on_parameter: impl FnMut(Range<usize>, S::Out),
) -> Result<(Range<usize>, S::Out), SignatureError> {
    let mut parser = Parser::<S>::new(text);
    let (return_part, end) = parser
        .method_signature(on_parameter)
        .map_err(|fault| fault.into_error(text))?;
    if end != text.len() {
        return Err(SignatureError::invalid(text, end, "trailing characters"));
    }
    Ok(return_part)
}
