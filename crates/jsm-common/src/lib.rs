//! Common types and utilities for the jsm Java source model.
//!
//! This crate provides foundational types used across all jsm crates:
//! - Centralized limits and cache capacities
//! - Source ranges (`SourceRange`) for declaration offsets
//! - The file naming-convention oracle (`NamingConventions`)
//! - The internal-invariant error (`AssertionFailure`)

// Centralized limits and thresholds
pub mod limits;

// Source offsets handed over by the compiler front end
pub mod range;
pub use range::SourceRange;

// "Is this a source file / class file?" oracle
pub mod naming;
pub use naming::NamingConventions;

// Internal invariant violations
pub mod assertion;
pub use assertion::AssertionFailure;
