//! # Vexmgr - VEX Snippet Manager
//!
//! Terminal entry point for the VEX snippet library. Lists the snippets in
//! the configured library, or renders one with the lexical highlighter.
//!
//! ```bash
//! # List the snippet library
//! cargo run
//!
//! # Preview a highlighted snippet
//! cargo run -- path/to/snippet.vfl
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vexmgr_core::{Preferences, library};
use vexmgr_syntax::{Highlighter, TokenCategory, TokenTable};

/// Vexmgr - VEX snippet manager
#[derive(Parser, Debug)]
#[command(name = "vexmgr")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snippet file to preview
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Preferences file (defaults to the user config location)
    #[arg(short, long, value_name = "FILE")]
    preferences: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let prefs_path = match args.preferences {
        Some(path) => path,
        None => Preferences::default_path()?,
    };
    let prefs = Preferences::load(&prefs_path);
    tracing::info!(path = ?prefs_path, "preferences loaded");

    match args.file {
        Some(file) => preview(&file, &prefs),
        None => list_library(&prefs),
    }
}

/// Prints a snippet with 24-bit ANSI colors from the active scheme.
fn preview(file: &PathBuf, prefs: &Preferences) -> anyhow::Result<()> {
    let code = library::read_snippet(file)?;
    let highlighter = Highlighter::new(&TokenTable::vex(), prefs.color_scheme)?;

    for line in code.lines() {
        let cells = highlighter.paint_line(line);
        let mut out = String::new();
        // Emit one escape per run of equal category. Run boundaries fall on
        // span edges, which are char boundaries.
        let mut run_start = 0;
        while run_start < cells.len() {
            let category = cells[run_start];
            let mut run_end = run_start + 1;
            while run_end < cells.len() && cells[run_end] == category {
                run_end += 1;
            }
            out.push_str(&ansi_fg(&highlighter, category));
            out.push_str(&line[run_start..run_end]);
            run_start = run_end;
        }
        println!("{out}\x1b[0m");
    }

    Ok(())
}

fn ansi_fg(highlighter: &Highlighter, category: TokenCategory) -> String {
    let color = highlighter.scheme().color(category);
    format!("\x1b[38;2;{};{};{}m", color.0, color.1, color.2)
}

fn list_library(prefs: &Preferences) -> anyhow::Result<()> {
    if prefs.library_path.is_empty() {
        println!("No library path configured.");
        return Ok(());
    }

    let folder = PathBuf::from(&prefs.library_path);
    let snippets = library::list_snippets(&folder);
    if snippets.is_empty() {
        println!("No snippets in {}.", folder.display());
    }
    for (path, stem) in snippets {
        println!("{stem}\t{}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_to_library_listing() {
        let args = Args::parse_from(["vexmgr"]);
        assert!(args.file.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn args_with_file() {
        let args = Args::parse_from(["vexmgr", "scatter.vfl"]);
        assert_eq!(args.file, Some(PathBuf::from("scatter.vfl")));
    }
}
