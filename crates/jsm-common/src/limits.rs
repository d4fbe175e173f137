//! Centralized limits and thresholds for the Java source model.
//!
//! Signature text and resource paths arrive from outside the core (indexes,
//! search results, persisted handles), so every recursive walk over them is
//! bounded here rather than at each call site.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth accepted by the signature parser.
///
/// Each array dimension does not count; each type-argument list, capture and
/// intersection member does. Real signatures rarely exceed a depth of 5; at
/// 128 levels the parser reports the signature as invalid instead of
/// recursing further.
///
/// ```text
/// Ljava.util.Map<Ljava.lang.String;Ljava.util.List<Ljava.util.Set<TT;>;>;>;
/// //            ^ depth 1                          ^ 2              ^ 3
/// ```
pub const MAX_SIGNATURE_NESTING_DEPTH: u32 = 128;

/// Maximum length of the enclosing-scope chain walked when resolving a scope.
///
/// Compiler scope trees nest a few dozen levels at most. A longer chain means
/// the tree's parent links loop, and resolution fails with an assertion
/// instead of overflowing the stack.
pub const MAX_SCOPE_DEPTH: u32 = 512;

/// Maximum number of array dimensions in one signature unit.
///
/// The JVM caps array types at 255 dimensions; anything beyond that cannot
/// come from a real class file or compiler.
pub const MAX_ARRAY_DIMENSIONS: u32 = 255;

/// Maximum number of occurrence-count probes when disambiguating same-named
/// local types inside one member.
///
/// The loop terminates naturally once a free count is found; this bound only
/// guards against a pathological "already produced" set.
pub const MAX_OCCURRENCE_PROBES: u32 = 1 << 16;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Initial capacity of the per-pass scope → handle cache.
pub const SCOPE_CACHE_CAPACITY: usize = 64;

/// Initial capacity of the per-container package handle cache.
pub const PACKAGE_CACHE_CAPACITY: usize = 5;
