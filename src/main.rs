//! exampledoc — generate the VALJOGen examples page.
//!
//! Collects the example sources and the output VALJOGen generated from them,
//! then renders a single Markdown page:
//!
//! `exampledoc -s examples/src/main -g examples/target/generated-sources -o site/examples.md`

mod collect;
mod meta;
mod model;
mod render;
mod slug;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, Level};

#[derive(Parser)]
#[command(
    name = "exampledoc",
    about = "Generate a Markdown page cataloguing VALJOGen examples and their generated output"
)]
struct Cli {
    /// Directory containing example sources (.java, .stg, .txt)
    #[arg(short = 's', long)]
    sources: PathBuf,

    /// Directory containing the generated output for the examples
    #[arg(short = 'g', long)]
    generated: PathBuf,

    /// Output file. If omitted, the page is written to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// File whose content is placed before the page (e.g. site front matter)
    #[arg(short = 'p', long)]
    prefix: Option<PathBuf>,

    /// Fail when a Java example has no generated output
    #[arg(long)]
    require_output: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(&cli);
    if let Err(ref e) = result {
        error!(error = %e, "generation failed");
    }
    result
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let sources = collect::collect_examples(&cli.sources)?;
    let outputs = collect::collect_examples(&cli.generated)?;

    let options = render::GeneratorOptions {
        require_output: cli.require_output,
    };
    let markdown = render::generate_markdown(&sources, &outputs, &options)
        .context("failed to generate examples page")?;

    let mut page = match cli.prefix {
        Some(ref path) => read_prefix(path)?,
        None => String::new(),
    };
    page.push_str(&markdown);

    match cli.output {
        Some(ref path) => write_page(path, &page)?,
        None => io::stdout()
            .write_all(page.as_bytes())
            .context("failed to write to stdout")?,
    }

    info!(examples = sources.len(), outputs = outputs.len(), "examples page generated");
    Ok(())
}

/// Read the prefix template; a missing trailing newline is added so the
/// page title starts on its own line.
fn read_prefix(path: &Path) -> Result<String> {
    let mut prefix = fs::read_to_string(path)
        .with_context(|| format!("failed to read prefix file: {}", path.display()))?;
    if !prefix.is_empty() && !prefix.ends_with('\n') {
        prefix.push('\n');
    }
    Ok(prefix)
}

fn write_page(path: &Path, page: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, page).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn prefix_gets_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_prefix.md");
        fs::write(&path, "---\nlayout: page\n---").unwrap();
        assert_eq!(read_prefix(&path).unwrap(), "---\nlayout: page\n---\n");
    }

    #[test]
    fn empty_prefix_stays_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_prefix.md");
        fs::write(&path, "").unwrap();
        assert_eq!(read_prefix(&path).unwrap(), "");
    }

    #[test]
    fn write_page_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site/docs/examples.md");
        write_page(&path, "page").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "page");
    }
}
