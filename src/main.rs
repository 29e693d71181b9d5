//! lastmod - stamp static-site posts with their git last-modified date.
//!
//! Stand-in for the host build framework: discovers Markdown posts, runs
//! each through the post-init hooks and prints what would be stamped.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lastmod::{Error, HookEvent, HookRegistry, Post, LAST_MODIFIED_KEY};

#[derive(Parser)]
#[command(name = "lastmod")]
#[command(about = "Stamp static-site posts with their git last-modified date")]
#[command(version)]
struct Cli {
    /// Post files or directories to scan (directories are walked for
    /// Markdown files)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,
}

fn main() -> Result<(), Error> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("lastmod=info".parse().unwrap()))
        .init();

    let cli = Cli::parse();

    let mut posts = Vec::new();
    for path in &cli.paths {
        collect_posts(path, &mut posts)?;
    }

    let mut registry = HookRegistry::new();
    lastmod::install(&mut registry);

    for mut post in posts {
        registry.dispatch(HookEvent::PostInit, &mut post);
        match post.metadata_str(LAST_MODIFIED_KEY) {
            Some(date) => println!("{}  {}", post.path().display(), date),
            None => println!("{}  -", post.path().display()),
        }
    }

    Ok(())
}

/// Gather posts from a file or directory (recursing into subdirectories).
fn collect_posts(path: &Path, posts: &mut Vec<Post>) -> Result<(), Error> {
    if path.is_file() {
        posts.push(Post::new(path));
        return Ok(());
    }

    if !path.is_dir() {
        return Err(Error::InvalidPath(path.display().to_string()));
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    for entry in entries {
        if entry.is_dir() {
            // Skip the repository's own bookkeeping
            if entry.file_name().is_some_and(|n| n == ".git") {
                continue;
            }
            collect_posts(&entry, posts)?;
        } else if is_markdown(&entry) {
            posts.push(Post::new(entry));
        }
    }

    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md") | Some("markdown")
    )
}
