//! Text → [`Signature`].

use crate::chars::C_PARAM_START;
use crate::error::SignatureError;
use crate::model::Signature;
use crate::parser::{self, Build};

pub fn decode_type_signature(signature: &str, allow_void: bool) -> Result<Signature, SignatureError> {
    parser::parse_type::<Build>(signature, allow_void)
}

pub fn decode_method_signature(signature: &str) -> Result<Signature, SignatureError> {
    let mut parameters = Vec::new();
    let (_, return_type) =
        parser::parse_method::<Build>(signature, |_, parameter| parameters.push(parameter))?;
    Ok(Signature::method(parameters, return_type))
}

/// Decodes either form, choosing by the leading character. Type signatures
/// are decoded with `void` allowed.
pub fn decode(signature: &str) -> Result<Signature, SignatureError> {
    if signature.as_bytes().first() == Some(&C_PARAM_START) {
        decode_method_signature(signature)
    } else {
        decode_type_signature(signature, true)
    }
}

#[cfg(test)]
#[path = "../tests/decode_tests.rs"]
mod tests;
