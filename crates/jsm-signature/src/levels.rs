//! Level splitting of parameterized member type signatures.
//!
//! `Lp.Outer<TK;>.Inner<TV;>;` describes two levels: `Lp.Outer<TK;>;` and the
//! full signature itself. Search code matches each level's type arguments
//! separately, so it needs them one by one.

use crate::chars::*;
use crate::error::SignatureError;
use crate::parser::{self, Parser, Validate};

/// Splits a class type signature into its nesting levels.
///
/// Index 0 is the whole signature after normalization (captures removed,
/// `/` and `$` turned into `.`). The following entries are the enclosing
/// levels from outermost inward, each terminated with `;`. A level ends at a
/// `.` outside type arguments that either follows a type-argument list or was
/// a `$` in the input.
pub fn split_type_levels(type_signature: &str) -> Result<Vec<String>, SignatureError> {
    parser::parse_type::<Validate>(type_signature, false)?;

    let mut normalized = String::with_capacity(type_signature.len());
    let mut boundaries = Vec::new();
    let mut depth = 0u32;
    let mut previous = 0u8;
    for c in type_signature.bytes() {
        match c {
            C_CAPTURE => continue,
            C_GENERIC_START => depth += 1,
            C_GENERIC_END => depth = depth.saturating_sub(1),
            C_DOT if depth == 0 && previous == C_GENERIC_END => boundaries.push(normalized.len()),
            C_DOLLAR if depth == 0 && normalized.len() > 1 && !is_delimiter(previous) => {
                boundaries.push(normalized.len());
            }
            _ => {}
        }
        normalized.push(match c {
            C_SLASH | C_DOLLAR => '.',
            other => other as char,
        });
        previous = c;
    }

    let mut levels = Vec::with_capacity(boundaries.len() + 1);
    for &end in &boundaries {
        let mut level = String::with_capacity(end + 1);
        level.push_str(&normalized[..end]);
        level.push(C_SEMICOLON as char);
        levels.push(level);
    }
    levels.insert(0, normalized);
    Ok(levels)
}

/// Raw type arguments of the innermost parameterized level of a class type
/// signature (array dimensions are looked through). Empty when the type is
/// not parameterized.
pub fn type_arguments(type_signature: &str) -> Result<Vec<&str>, SignatureError> {
    parser::parse_type::<Validate>(type_signature, false)?;
    let bytes = type_signature.as_bytes();
    let start = bytes.iter().take_while(|&&c| c == C_ARRAY).count();
    if !matches!(bytes.get(start), Some(&(C_RESOLVED | C_UNRESOLVED))) {
        return Ok(Vec::new());
    }

    let mut depth = 0u32;
    let mut innermost = None;
    for (index, &c) in bytes.iter().enumerate().skip(start) {
        match c {
            C_GENERIC_START => {
                if depth == 0 {
                    innermost = Some(index);
                }
                depth += 1;
            }
            C_GENERIC_END => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    let Some(open) = innermost else {
        return Ok(Vec::new());
    };

    let mut scanner = Parser::<Validate>::new(type_signature);
    let mut arguments = Vec::new();
    let mut index = open + 1;
    while bytes.get(index).is_some_and(|&c| c != C_GENERIC_END) {
        let ((), end) = scanner
            .type_argument(index)
            .map_err(|fault| fault.into_error(type_signature))?;
        arguments.push(&type_signature[index..end]);
        index = end;
    }
    Ok(arguments)
}

/// [`type_arguments`] of every level returned by [`split_type_levels`].
pub fn all_type_arguments<S: AsRef<str>>(levels: &[S]) -> Result<Vec<Vec<&str>>, SignatureError> {
    levels
        .iter()
        .map(|level| type_arguments(level.as_ref()))
        .collect()
}

#[cfg(test)]
#[path = "../tests/levels_tests.rs"]
mod tests;
