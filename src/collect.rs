//! Example file discovery.
//!
//! Walks an example directory recursively and returns every file keyed by
//! its base name, with the license header comment removed (the site carries
//! its own copyright notice).

use crate::model::ExampleCollection;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

// First `/* ... Copyright ... */` block. No `C` may precede the word and no
// `*` may follow it before the closing `*/`.
static RE_COPYRIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[^C]*Copyright[^*]*\*/").unwrap());

/// Remove the first copyright comment block from `content`.
pub fn strip_copyright(content: &str) -> String {
    RE_COPYRIGHT.replace(content, "").into_owned()
}

/// Collect every file under `dir` (any depth, names containing a dot).
/// Hidden files are skipped.
///
/// Files are visited in the glob walk's sorted order; when two files share a
/// base name the later one wins.
pub fn collect_examples(dir: &Path) -> Result<ExampleCollection> {
    let mut result = ExampleCollection::new();

    if !dir.is_dir() {
        warn!(dir = %dir.display(), "example directory does not exist");
        return Ok(result);
    }

    let pattern = format!("{}/**/*.*", glob::Pattern::escape(&dir.to_string_lossy()));
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let paths = glob::glob_with(&pattern, options)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?;

    for entry in paths {
        let path = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        debug!(path = %path.display(), "collected example file");
        if result.insert(name, strip_copyright(&content)).is_some() {
            debug!(path = %path.display(), "duplicate example name overwrites earlier file");
        }
    }

    info!(dir = %dir.display(), count = result.len(), "collected example files");
    Ok(result)
}
