//! Errors reported by the signature codec.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Malformed signature text, or a structural value with no valid
    /// textual form (e.g. an array of `void`).
    #[error("invalid signature `{signature}` at offset {position}: {reason}")]
    InvalidSignature {
        signature: String,
        position: usize,
        reason: &'static str,
    },
    /// Caller misuse, such as variable-arity rendering of a non-array final
    /// parameter.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl SignatureError {
    pub(crate) fn invalid(signature: &str, position: usize, reason: &'static str) -> Self {
        SignatureError::InvalidSignature {
            signature: signature.to_string(),
            position,
            reason,
        }
    }

    pub(crate) fn argument(message: impl Into<String>) -> Self {
        SignatureError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn is_invalid_signature(&self) -> bool {
        matches!(self, SignatureError::InvalidSignature { .. })
    }
}

/// Where and why a scan stopped. Converted into a `SignatureError` at the
/// public boundary, once the full input text is at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fault {
    pub position: usize,
    pub reason: &'static str,
}

impl Fault {
    pub(crate) const fn at(position: usize, reason: &'static str) -> Self {
        Self { position, reason }
    }

    pub(crate) fn into_error(self, signature: &str) -> SignatureError {
        SignatureError::invalid(signature, self.position, self.reason)
    }
}
