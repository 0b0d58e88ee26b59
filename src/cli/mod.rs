//! CLI entry point for Skillboard.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use commands::{run, Outcome};

/// Skill catalog and dashboard navigation tool
#[derive(Parser, Debug)]
#[command(
    name = "skillboard",
    version,
    about = "Skillboard: skill categories, assistant views and dashboard routes"
)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a URL pathname to a tab
    Route(RouteArgs),
    /// Print the URL for a tab
    Path(PathArgs),
    /// Guess the base path from a URL pathname
    InferBase(InferBaseArgs),
    /// List job categories
    Categories,
    /// List skill mappings, optionally filtered by category
    Skills(SkillsArgs),
    /// Print an assistant view as JSON
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Pathname, e.g. /ui/legal
    pub pathname: String,

    /// Base path (defaults to the configured one)
    #[arg(long)]
    pub base: Option<String>,
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Tab id, e.g. market-analysis
    pub tab: String,

    /// Base path (defaults to the configured one)
    #[arg(long)]
    pub base: Option<String>,
}

#[derive(Args, Debug)]
pub struct InferBaseArgs {
    pub pathname: String,
}

#[derive(Args, Debug)]
pub struct SkillsArgs {
    /// Category id; repeat for several
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Combine several categories as a union instead of an intersection
    #[arg(long)]
    pub union: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Assistant tab id, e.g. finance
    pub tab: String,

    /// Skill status report JSON (`{"skills": [...]}`)
    #[arg(long)]
    pub status: Option<PathBuf>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
