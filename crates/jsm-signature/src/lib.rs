//! Signature codec for the jsm Java source model.
//!
//! Type and method signatures are the compact textual names used to store,
//! compare and cross-reference types:
//!
//! ```text
//! I                              int
//! [[Ljava.lang.String;           String[][] (resolved)
//! QList<+QNumber;>;              List<? extends Number> (as written in source)
//! (IZLjava.lang.String;)V        void m(int, boolean, String)
//! ```
//!
//! Everything here is a pure function of its input; there is no shared state.
//!
//! - Validation and decoding (`is_valid_*`, `decode_*`), backed by one parser
//! - Encoding of structural values and source type references
//! - Method decomposition (parameter count, parameter and return extraction)
//! - Anchor rendering (`foo(int[], long...)`)
//! - Level splitting of parameterized member types

mod chars;
mod parser;

// Structural signature values
pub mod model;
pub use model::{ClassForm, ClassSignature, MemberType, MethodSignature, PrimitiveKind, Signature, WildcardBound};

pub mod error;
pub use error::SignatureError;

// Validity checks (shared parser, validating sink)
pub mod validate;
pub use validate::{
    check_type_signature, is_valid_method_signature, is_valid_type_signature, validate_method_signature,
    validate_type_signature,
};

// Text → Signature
pub mod decode;
pub use decode::{decode, decode_method_signature, decode_type_signature};

// Signature → text
pub mod encode;
pub use encode::{convert_type_signature, create_array_signature, encode, to_unresolved_type_signature};

// Declared types from the compiler front end
pub mod type_reference;
pub use type_reference::{NameSegment, TypeReference, TypeReferenceKind, type_signature};

// Parameter / return decomposition
pub mod method;
pub use method::{
    extract_parameter_signatures, extract_parameter_types, extract_return_signature,
    parameter_count, parameter_type_slices, return_type_slice,
};

// Display strings
pub mod anchor;
pub use anchor::{AnchorOptions, render_anchor, render_anchor_with, simple_type_name};

// Nested generic member types
pub mod levels;
pub use levels::{all_type_arguments, split_type_levels, type_arguments};
