//! Command-line argument definition and processing.

use clap::Parser;
use std::path::PathBuf;

/// Folio - a fast, friendly TUI for browsing a personal project portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A fast, friendly TUI for browsing a personal project portfolio", long_about = None)]
pub struct Args {
    /// Load the portfolio from this JSON document instead of the built-in one
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Start with this palette, overriding the stored preference (dark, light)
    #[arg(long)]
    pub theme: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// List the projects to stdout and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Filter projects from the command line, print matches, and exit
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Effective log level: `--verbose` wins over `--log-level`.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// Handle early-exit flags (`--list`, `--search`). Returns `true` when the
/// invocation was fully served on the command line and the TUI should not
/// start.
pub fn process_args(args: &Args) -> bool {
    if args.list {
        let catalog = crate::catalog::load(args.data.as_deref());
        for line in list_lines(&catalog) {
            println!("{line}");
        }
        return true;
    }
    if let Some(q) = &args.search {
        let catalog = crate::catalog::load(args.data.as_deref());
        let lines = search_lines(&catalog, q);
        if lines.is_empty() {
            println!("No projects match '{q}'");
        } else {
            for line in lines {
                println!("{line}");
            }
        }
        return true;
    }
    false
}

/// One line per project for `--list` output.
pub fn list_lines(catalog: &crate::catalog::Catalog) -> Vec<String> {
    catalog
        .projects
        .iter()
        .map(|p| format!("{:<14} {} - {}", p.category.label(), p.name, p.tag))
        .collect()
}

/// Matching project names for `--search`, through the same engine the TUI
/// uses.
pub fn search_lines(catalog: &crate::catalog::Catalog, query: &str) -> Vec<String> {
    let state = crate::filter::FilterState {
        query: query.to_string(),
        ..Default::default()
    };
    crate::filter::filter(&catalog.projects, &state)
        .into_iter()
        .map(|p| p.name.clone())
        .collect()
}
