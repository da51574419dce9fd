//! CLI module - Command line interface definitions and handlers

pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::Category;

/// Silograph - Offline silhouette catalog browser
///
/// Loads a catalog of silhouette records, classifies and filters them,
/// tracks a selection, pages it through a 3-up carousel, and exports the
/// selection to the external morph/sketch tool. The dataset is read-only.
#[derive(Parser, Debug)]
#[command(name = "silograph")]
#[command(author = "Ryan Cashmoney <tunclon@proton.me>")]
#[command(version)]
#[command(about = "Offline silhouette catalog browser", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Config file path (default: ~/.config/silograph/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for machine parsing
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show catalog statistics (silhouette counts per category)
    Stats(StatsArgs),

    /// List the visible set for a category + bucket filter
    Filter(FilterArgs),

    /// Page a set of selected records through the 3-up carousel
    View(ViewArgs),

    /// Export selected filenames to the morph/sketch tool
    Export(ExportArgs),

    /// Interactive gallery TUI
    Tui(TuiArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Dataset JSON path (default: from config)
    pub dataset: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser)]
pub struct FilterArgs {
    /// Dataset JSON path (default: from config)
    pub dataset: Option<PathBuf>,

    /// Category filter (men, women, children; omit for all)
    #[arg(long, short = 'c', value_enum)]
    pub category: Option<CategoryFilter>,

    /// Bucket filter; "identified" is accepted as a synonym for "named"
    /// and anything unrecognized falls back to "all"
    #[arg(long, short, default_value = "all")]
    pub bucket: String,

    /// Maximum records to list
    #[arg(long, short, default_value = "50")]
    pub limit: usize,
}

#[derive(Debug, Clone, Parser)]
pub struct ViewArgs {
    /// Dataset JSON path (default: from config)
    #[arg(long, short)]
    pub dataset: Option<PathBuf>,

    /// Filenames of the records to view, in selection order
    #[arg(required = true)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Dataset JSON path (default: from config)
    #[arg(long, short)]
    pub dataset: Option<PathBuf>,

    /// Filenames to export, in selection order
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Cache directory override
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser, Default)]
pub struct TuiArgs {
    /// Dataset JSON path (default: from config)
    pub dataset: Option<PathBuf>,
}

/// Category values accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryFilter {
    /// Child-related records (highest classification priority)
    Children,
    /// Women-related records
    Women,
    /// Men-related records
    Men,
}

impl From<CategoryFilter> for Category {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::Children => Category::Children,
            CategoryFilter::Women => Category::Women,
            CategoryFilter::Men => Category::Men,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human readable (default)
    Human,
    /// JSON output
    Json,
}
