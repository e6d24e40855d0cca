//! Metadata extracted from example sources: ordering index and description.

use crate::model::extension;
use regex::Regex;
use std::sync::LazyLock;

/// Index used for examples without an `Example N` comment; sorts them last.
pub const UNINDEXED: u32 = 9999;

// `@VALJO...(... comment="Example 12" ...)` on a VALJOGen annotation
static RE_EXAMPLE_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@VALJO[^(]*\([^)]*comment="Example (\d*)"[^)]*\)"#).unwrap()
});

// First Javadoc block; group 1 is the text up to and including the first period.
static RE_JAVADOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*\*(?:\*|\r|\n\s)*([^.]+\.?)(?:.|\r|\n)*\*/").unwrap()
});

/// Ordering index from the `comment="Example N"` annotation argument.
///
/// An empty digit run counts as 0 and one too large for `u32` saturates to
/// `u32::MAX`. Returns [`UNINDEXED`] when no annotation carries an example
/// comment.
pub fn example_index(content: &str) -> u32 {
    match RE_EXAMPLE_INDEX.captures(content) {
        Some(caps) if caps[1].is_empty() => 0,
        Some(caps) => caps[1].parse().unwrap_or(u32::MAX),
        None => UNINDEXED,
    }
}

/// First sentence of the leading Javadoc comment, with `*` decorations
/// blanked out.
pub fn description(content: &str) -> Option<String> {
    RE_JAVADOC
        .captures(content)
        .map(|caps| caps[1].replace('*', " ").trim().to_string())
}

/// Sort key for source examples: extension first, then the example index,
/// then the name case-insensitively. The raw name breaks the last ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    extension: String,
    index: u32,
    lower_name: String,
    name: String,
}

impl SortKey {
    pub fn new(name: &str, content: &str) -> Self {
        SortKey {
            extension: extension(name),
            index: example_index(content),
            lower_name: name.to_lowercase(),
            name: name.to_string(),
        }
    }
}

/// Key for ordering "see also" references: extension, then name.
pub fn reference_key(name: &str) -> (String, String) {
    (extension(name), name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_from_annotation() {
        let src = r#"@VALJOGenerate(name="Foo", comment="Example 3")
public interface FooIF {}"#;
        assert_eq!(example_index(src), 3);
    }

    #[test]
    fn index_with_configure_annotation() {
        let src = r#"@VALJOConfigure(comment="Example 12", ensureNotNullEnabled=false)"#;
        assert_eq!(example_index(src), 12);
    }

    #[test]
    fn index_missing() {
        assert_eq!(example_index("public interface Foo {}"), UNINDEXED);
        assert_eq!(example_index(r#"@VALJOGenerate(comment="Something else")"#), UNINDEXED);
    }

    #[test]
    fn index_empty_digits() {
        assert_eq!(example_index(r#"@VALJOGenerate(comment="Example ")"#), 0);
    }

    #[test]
    fn index_overflow_sorts_last() {
        let src = r#"@VALJOGenerate(comment="Example 99999999999")"#;
        assert_eq!(example_index(src), u32::MAX);

        let huge = SortKey::new("a.java", src);
        let unindexed = SortKey::new("b.java", "");
        assert!(unindexed < huge);
    }

    #[test]
    fn index_requires_comment_inside_parens() {
        let src = "@VALJOGenerate()\n// comment=\"Example 1\")";
        assert_eq!(example_index(src), UNINDEXED);
    }

    #[test]
    fn description_first_sentence() {
        let src = "/**\n * Example of a simple value object. It has getters.\n */\npublic interface A {}";
        assert_eq!(description(src).as_deref(), Some("Example of a simple value object."));
    }

    #[test]
    fn description_without_period() {
        let src = "/** Plain title */\ninterface A {}";
        assert_eq!(description(src).as_deref(), Some("Plain title"));
    }

    #[test]
    fn description_blanks_stars() {
        let src = "/**\n * Spans\n * two lines.\n */";
        assert_eq!(description(src).as_deref(), Some("Spans\n   two lines."));
    }

    #[test]
    fn description_ignores_plain_block_comment() {
        assert_eq!(description("/* not javadoc. */\nclass A {}"), None);
        assert_eq!(description("class A {}"), None);
    }

    #[test]
    fn sort_extension_before_index() {
        let java = SortKey::new("b.java", r#"@VALJOGenerate(comment="Example 1")"#);
        let txt = SortKey::new("a.txt", "");
        assert!(java < txt);
    }

    #[test]
    fn sort_index_before_name() {
        let second = SortKey::new("A.java", r#"@VALJOGenerate(comment="Example 2")"#);
        let first = SortKey::new("Z.java", r#"@VALJOGenerate(comment="Example 1")"#);
        let unindexed = SortKey::new("B.java", "");
        assert!(first < second);
        assert!(second < unindexed);
    }

    #[test]
    fn sort_name_case_insensitive() {
        assert!(SortKey::new("apple.stg", "") < SortKey::new("Banana.stg", ""));
    }
}
