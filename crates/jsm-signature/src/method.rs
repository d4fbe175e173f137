//! Structural decomposition of method signatures.

use crate::encode::convert_type_signature;
use crate::error::SignatureError;
use crate::model::Signature;
use crate::parser::{self, Build, Validate};

/// Number of parameters, counted without materializing them.
pub fn parameter_count(method_signature: &str) -> Result<usize, SignatureError> {
    let mut count = 0;
    parser::parse_method::<Validate>(method_signature, |_, ()| count += 1)?;
    Ok(count)
}

/// Raw parameter signatures, borrowed from `method_signature`, in order.
pub fn parameter_type_slices(method_signature: &str) -> Result<Vec<&str>, SignatureError> {
    let mut slices = Vec::new();
    parser::parse_method::<Validate>(method_signature, |range, ()| {
        slices.push(&method_signature[range]);
    })?;
    Ok(slices)
}

/// Parameter signatures with `/` package separators converted to `.`.
pub fn extract_parameter_types(method_signature: &str) -> Result<Vec<String>, SignatureError> {
    Ok(parameter_type_slices(method_signature)?
        .into_iter()
        .map(|slice| convert_type_signature(slice).into_owned())
        .collect())
}

/// Decoded parameter signatures, in order.
pub fn extract_parameter_signatures(method_signature: &str) -> Result<Vec<Signature>, SignatureError> {
    let mut parameters = Vec::new();
    parser::parse_method::<Build>(method_signature, |_, parameter| parameters.push(parameter))?;
    Ok(parameters)
}

/// The raw return-type signature (everything after the final `)`).
pub fn return_type_slice(method_signature: &str) -> Result<&str, SignatureError> {
    let (range, ()) = parser::parse_method::<Validate>(method_signature, |_, ()| {})?;
    Ok(&method_signature[range])
}

pub fn extract_return_signature(method_signature: &str) -> Result<Signature, SignatureError> {
    let (_, return_type) = parser::parse_method::<Build>(method_signature, |_, _| {})?;
    Ok(return_type)
}

#[cfg(test)]
#[path = "../tests/method_tests.rs"]
mod tests;
