//! Data model for example files — extension tables and the generator error.

use std::collections::BTreeMap;
use thiserror::Error;

/// Example files keyed by base name (extension included).
pub type ExampleCollection = BTreeMap<String, String>;

/// Recognized kinds of example file, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleKind {
    /// `.java` — annotated source example
    Source,
    /// `.stg` — custom StringTemplate group
    Template,
    /// `.txt` — custom file header
    Header,
}

impl ExampleKind {
    /// Look up the kind for a lowercased extension such as `".java"`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".java" => Some(Self::Source),
            ".stg" => Some(Self::Template),
            ".txt" => Some(Self::Header),
            _ => None,
        }
    }

    /// Resolve the kind of a file name, failing on unknown extensions.
    pub fn of(name: &str) -> Result<Self, GenerateError> {
        let ext = extension(name);
        Self::from_extension(&ext).ok_or_else(|| GenerateError::UnknownExtension {
            name: name.to_string(),
            extension: ext,
        })
    }

    /// Language tag for fenced code blocks.
    pub const fn syntax(self) -> &'static str {
        match self {
            Self::Source => "java",
            Self::Template | Self::Header => "",
        }
    }

    /// Section heading used in the page body (and therefore in anchor slugs).
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Source => "Source example",
            Self::Template => "Custom template example",
            Self::Header => "Custom header example",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("unknown example file extension {extension:?} for {name}")]
    UnknownExtension { name: String, extension: String },

    #[error("no generated output found for source example {name}")]
    MissingOutput { name: String },
}

/// Lowercased extension including the leading dot, or `""` when there is none.
///
/// A leading dot alone (`.gitignore`) does not count as an extension.
pub fn extension(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

/// File name without its extension: `"Foo.java"` → `"Foo"`.
pub fn stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
