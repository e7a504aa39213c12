//! Command-line interface definitions.
//!
//! Defines the CLI structure for the shelfline application using `clap`.
//! The CLI supports subcommands for seeding the catalog, listing rows,
//! and printing aggregate statistics.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// SQLite-backed product catalog demo CLI
#[derive(Parser, Debug)]
#[command(name = "shelfline")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the shelfline CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full catalog report (seeds an empty database first)
    Show(DatabaseArgs),

    /// Create the tables and insert the sample rows
    Seed(DatabaseArgs),

    /// List categories
    Categories(DatabaseArgs),

    /// List products joined with their categories
    Products(ProductsArgs),

    /// Print overall catalog statistics
    Summary(DatabaseArgs),
}

/// Shared argument struct for commands that only need the database path.
#[derive(Parser, Debug)]
pub struct DatabaseArgs {
    /// Path to the SQLite database file (defaults to the configured or
    /// standard location).
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Arguments for the `products` subcommand.
#[derive(Parser, Debug)]
pub struct ProductsArgs {
    /// Path to the SQLite database file (defaults to the configured or
    /// standard location).
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Only show products in this category.
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Resolve the database path: CLI flag wins, then the config file, then the
/// standard location under the shelfline home directory.
#[must_use]
pub fn resolve_database(cli: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    cli.or(configured).unwrap_or_else(paths::default_database)
}
