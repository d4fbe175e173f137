//! File naming conventions for source and class files.
//!
//! The resolver never guesses a file's nature from its content: a name is a
//! compilation unit if it ends with one of the configured source extensions,
//! and a binary class container if it ends with one of the class extensions.

use serde::{Deserialize, Serialize};

const DEFAULT_SOURCE_EXTENSION: &str = "java";
const DEFAULT_CLASS_EXTENSION: &str = "class";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamingConventions {
    /// Extensions (without the dot) of compilable source files. The first
    /// entry is the default extension.
    pub source_extensions: Vec<String>,
    /// Extensions (without the dot) of binary class files.
    pub class_extensions: Vec<String>,
}

impl Default for NamingConventions {
    fn default() -> Self {
        Self {
            source_extensions: vec![DEFAULT_SOURCE_EXTENSION.to_string()],
            class_extensions: vec![DEFAULT_CLASS_EXTENSION.to_string()],
        }
    }
}

impl NamingConventions {
    pub fn new(source_extensions: &[&str], class_extensions: &[&str]) -> Self {
        Self {
            source_extensions: source_extensions.iter().map(|s| s.to_string()).collect(),
            class_extensions: class_extensions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The extension used when none is known, e.g. for generated unit names.
    pub fn default_source_extension(&self) -> &str {
        self.source_extensions
            .first()
            .map_or(DEFAULT_SOURCE_EXTENSION, String::as_str)
    }

    pub fn default_class_extension(&self) -> &str {
        self.class_extensions
            .first()
            .map_or(DEFAULT_CLASS_EXTENSION, String::as_str)
    }

    pub fn is_source_file_name(&self, file_name: &str) -> bool {
        index_of_extension(file_name, &self.source_extensions).is_some()
    }

    pub fn is_class_file_name(&self, file_name: &str) -> bool {
        index_of_extension(file_name, &self.class_extensions).is_some()
    }

    /// Index of the `.` that starts a source extension, if the name has one.
    pub fn index_of_source_extension(&self, file_name: &str) -> Option<usize> {
        index_of_extension(file_name, &self.source_extensions)
    }

    /// The file name with its source or class extension removed.
    pub fn name_without_extension<'a>(&self, file_name: &'a str) -> &'a str {
        index_of_extension(file_name, &self.source_extensions)
            .or_else(|| index_of_extension(file_name, &self.class_extensions))
            .map_or(file_name, |dot| &file_name[..dot])
    }
}

/// Position of the `.` before a matching extension. A bare extension
/// (`".java"`) has an empty stem and still counts as a match.
fn index_of_extension(file_name: &str, extensions: &[String]) -> Option<usize> {
    extensions.iter().find_map(|extension| {
        let stem = file_name.strip_suffix(extension.as_str())?;
        stem.strip_suffix('.').map(str::len)
    })
}

#[cfg(test)]
#[path = "../tests/naming_tests.rs"]
mod tests;
