//! Validity checks over signature text.

use jsm_common::AssertionFailure;

use crate::error::SignatureError;
use crate::parser::{self, Validate};

/// Whether `signature` is exactly one type signature. `allow_void` permits a
/// top-level `V` (return types); `[V` is rejected either way.
pub fn is_valid_type_signature(signature: &str, allow_void: bool) -> bool {
    parser::parse_type::<Validate>(signature, allow_void).is_ok()
}

/// Whether `signature` is exactly one method signature `(params)return`.
pub fn is_valid_method_signature(signature: &str) -> bool {
    parser::parse_method::<Validate>(signature, |_, ()| {}).is_ok()
}

/// Like [`is_valid_type_signature`], but reports where and why it failed.
pub fn check_type_signature(signature: &str, allow_void: bool) -> Result<(), SignatureError> {
    parser::parse_type::<Validate>(signature, allow_void)
}

/// Assert-style check for signatures produced by the core itself.
pub fn validate_type_signature(signature: &str, allow_void: bool) -> Result<(), AssertionFailure> {
    parser::parse_type::<Validate>(signature, allow_void)
        .map_err(|err| AssertionFailure::new(format!("generated type signature rejected: {err}")))
}

/// Assert-style check for method signatures produced by the core itself.
pub fn validate_method_signature(signature: &str) -> Result<(), AssertionFailure> {
    parser::parse_method::<Validate>(signature, |_, ()| {})
        .map(|_| ())
        .map_err(|err| AssertionFailure::new(format!("generated method signature rejected: {err}")))
}

#[cfg(test)]
#[path = "../tests/validate_tests.rs"]
mod tests;
