//! Internal invariant violations.
//!
//! `AssertionFailure` is deliberately a separate type from the recoverable
//! errors of the signature and resolver crates: it signals a bug in the core
//! or its direct caller (for example a signature the core generated itself
//! failing to re-validate) and must never be folded into "invalid input".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("assertion failed: {message}")]
pub struct AssertionFailure {
    pub message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns a failed condition into an `AssertionFailure` carrying `message`.
pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), AssertionFailure> {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(message()))
    }
}
