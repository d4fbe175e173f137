//! Source ranges as reported by the compiler front end.

use serde::{Deserialize, Serialize};

/// Inclusive range of character offsets of a declaration in its source file.
///
/// Declaration ranges coming from the front end are inclusive on both ends
/// (`declarationSourceStart..=declarationSourceEnd`), unlike `std` ranges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: u32,
    pub end: u32,
}

impl SourceRange {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `position` lies within the range, both ends included.
    #[inline]
    pub const fn contains(self, position: u32) -> bool {
        self.start <= position && position <= self.end
    }

    /// Whether `other` lies entirely within this range.
    #[inline]
    pub const fn encloses(self, other: SourceRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }
}
