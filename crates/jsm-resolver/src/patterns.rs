//! Inclusion and exclusion patterns of classpath entries.
//!
//! Patterns are matched against paths relative to the entry's root, with
//! `/` separators. `*` stays within one path segment, `**` spans segments,
//! and a trailing `/` stands for everything below a folder (`gen/` is
//! `gen/**`).

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::ConfigError;

#[derive(Clone, Debug, Default)]
pub struct PathPatterns {
    /// `None` accepts everything.
    inclusion: Option<GlobSet>,
    exclusion: Option<GlobSet>,
}

impl PathPatterns {
    pub fn new<S: AsRef<str>>(inclusion: &[S], exclusion: &[S]) -> Result<Self, ConfigError> {
        Ok(Self {
            inclusion: build_set(inclusion)?,
            exclusion: build_set(exclusion)?,
        })
    }

    /// No patterns: every path is accepted.
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.exclusion
            .as_ref()
            .is_some_and(|set| set.is_match(relative_path))
    }

    pub fn is_included(&self, relative_path: &str) -> bool {
        self.inclusion
            .as_ref()
            .is_none_or(|set| set.is_match(relative_path))
    }

    pub fn accepts(&self, relative_path: &str) -> bool {
        self.is_included(relative_path) && !self.is_excluded(relative_path)
    }
}

fn build_set<S: AsRef<str>>(patterns: &[S]) -> Result<Option<GlobSet>, ConfigError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern: &str = pattern.as_ref();
        let expanded = if pattern.ends_with('/') {
            format!("{pattern}**")
        } else {
            pattern.to_string()
        };
        let glob = GlobBuilder::new(&expanded)
            .literal_separator(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: patterns
                .iter()
                .map(AsRef::<str>::as_ref)
                .collect::<Vec<_>>()
                .join(", "),
            source,
        })
}

#[cfg(test)]
#[path = "../tests/patterns_tests.rs"]
mod tests;
