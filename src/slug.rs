//! Anchor slugs for example headings.
//!
//! The page links to each example through the id the Markdown renderer
//! assigns to its `## Heading: <code>Name</code>` heading, so the slug must
//! follow the renderer's algorithm: the `<code>` tags become the literal
//! text `code`, everything is lowercased, spaces turn into hyphens and any
//! other punctuation is dropped.

use crate::model::{ExampleKind, GenerateError};

/// Anchor id of the body heading for `name`.
pub fn source_link_id(name: &str) -> Result<String, GenerateError> {
    let kind = ExampleKind::of(name)?;
    Ok(heading_slug(&format!("{} code{}code", kind.heading(), name)))
}

/// Markdown link to the body section of `name`.
pub fn source_link(name: &str) -> Result<String, GenerateError> {
    Ok(format!("[<code>{}</code>](#{})", name, source_link_id(name)?))
}

fn heading_slug(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}
