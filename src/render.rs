//! Markdown page renderer for the examples catalogue.
//!
//! Produces the index of all source examples followed by one section per
//! example: the code, its "see also" cross references and, for Java
//! examples, the output VALJOGen generated from it.

use crate::meta::{self, SortKey};
use crate::model::{stem, ExampleCollection, ExampleKind, GenerateError};
use crate::slug::source_link;
use regex::Regex;
use tracing::{debug, warn};

const TITLE: &str = "Examples for VALue Java Objects Generator (VALJOGen)";

/// Package that Java examples live in; generated output names its origin
/// with a class in this package.
const EXAMPLES_PACKAGE: &str = "com.fortyoneconcepts.valjogen.examples";

/// Options for [`generate_markdown`].
#[derive(Debug, Default, Clone)]
pub struct GeneratorOptions {
    /// Fail instead of skipping the output section when a Java example has no
    /// generated output.
    pub require_output: bool,
}

/// Render the examples page from source examples and generated output.
///
/// Every source example must have a recognized extension; nothing is
/// returned otherwise.
pub fn generate_markdown(
    sources: &ExampleCollection,
    outputs: &ExampleCollection,
    options: &GeneratorOptions,
) -> Result<String, GenerateError> {
    let mut ordered: Vec<(&String, &String)> = sources.iter().collect();
    ordered.sort_by_cached_key(|(name, content)| SortKey::new(name, content));

    let mut page = String::new();
    page.push_str(&format!("# {}\n<br />\n", TITLE));

    // Index
    page.push_str("**EXAMPLES INDEX:**\n\n");
    for (name, content) in &ordered {
        page.push_str(&format!("- {}", source_link(name)?));
        if let Some(desc) = meta::description(content) {
            page.push_str(&format!(" - {}", desc));
        }
        page.push_str("\n\n");
    }

    page.push_str("\n---\n\n");

    // Examples
    for (name, content) in &ordered {
        page.push_str(&render_example(name, content, sources, outputs, options)?);
    }

    Ok(page)
}

/// Render the body section of one source example.
fn render_example(
    name: &str,
    content: &str,
    sources: &ExampleCollection,
    outputs: &ExampleCollection,
    options: &GeneratorOptions,
) -> Result<String, GenerateError> {
    let kind = ExampleKind::of(name)?;
    let mut out = String::new();

    out.push_str(&format!("## {}: <code>{}</code>\n\n", kind.heading(), name));
    push_code_block(&mut out, kind.syntax(), content);
    out.push('\n');

    let links = see_also(name, content, sources)?;
    if !links.is_empty() {
        out.push_str(&format!("**See also:** {}\n", links.join(", ")));
    }
    out.push('\n');

    if kind == ExampleKind::Source {
        match find_output(stem(name), outputs) {
            Some((output_name, output_content)) => {
                debug!(example = name, output = output_name, "matched generated output");
                let output_kind = ExampleKind::of(output_name)?;

                let mut deps = vec![source_link(name)?];
                deps.extend(links);
                let deps = if deps.len() > 1 {
                    format!("({})", deps.join(", "))
                } else {
                    deps.join(", ")
                };

                out.push_str("\n\n");
                out.push_str(&format!(
                    "### Generated output: {} => <code>{}</code> :\n\n",
                    deps, output_name
                ));
                push_code_block(&mut out, output_kind.syntax(), output_content);
                out.push_str("\n\n");
            }
            None if options.require_output => {
                return Err(GenerateError::MissingOutput {
                    name: name.to_string(),
                });
            }
            None => warn!(example = name, "no generated output found"),
        }
    }

    out.push_str("---\n\n");
    Ok(out)
}

fn push_code_block(out: &mut String, syntax: &str, content: &str) {
    out.push_str(&format!("```{}\n{}\n```\n", syntax, content));
}

/// Links to every other source example that quotes `name` or is quoted by
/// `content`, ordered by extension then name.
fn see_also(
    name: &str,
    content: &str,
    sources: &ExampleCollection,
) -> Result<Vec<String>, GenerateError> {
    let quoted_self = format!("\"{}\"", name);
    let mut refs: Vec<&String> = sources
        .iter()
        .filter(|(ref_name, ref_content)| {
            ref_name.as_str() != name
                && (content.contains(&format!("\"{}\"", ref_name))
                    || ref_content.contains(&quoted_self))
        })
        .map(|(ref_name, _)| ref_name)
        .collect();
    refs.sort_by_cached_key(|ref_name| meta::reference_key(ref_name));

    refs.into_iter().map(|ref_name| source_link(ref_name)).collect()
}

/// First output file (in name order) whose `@Generated` annotation names
/// `class_name` in the examples package, optionally with type arguments.
fn find_output<'a>(class_name: &str, outputs: &'a ExampleCollection) -> Option<(&'a str, &'a str)> {
    let pattern = format!(
        r#"@Generated\(.*"[^"]*{}(<.+>)?"\.*\)"#,
        regex::escape(&format!("{}.{}", EXAMPLES_PACKAGE, class_name))
    );
    let re = Regex::new(&pattern).expect("escaped class name forms a valid pattern");

    outputs
        .iter()
        .find(|(_, output_content)| re.is_match(output_content))
        .map(|(output_name, output_content)| (output_name.as_str(), output_content.as_str()))
}
