//! Silograph - Offline silhouette catalog browser
//!
//! Loads a read-only catalog of silhouette records, classifies and filters
//! them, tracks a selection, pages it through a 3-up carousel, and exports
//! the selection to an external morph/sketch tool.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use silograph::cli::{run, Cli, Commands, OutputFormat};
use silograph::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    // Initialize logging; --verbose overrides the configured level
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).compact())
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("silograph={}", level).parse()?),
        )
        .init();

    let output = cli.output.unwrap_or(OutputFormat::Human);

    match cli.command {
        Commands::Stats(args) => run::run_stats(&args, &config, output).await?,
        Commands::Filter(args) => run::run_filter(&args, &config, output).await?,
        Commands::View(args) => run::run_view(&args, &config, output).await?,
        Commands::Export(args) => run::run_export(&args, &config, output).await?,
        Commands::Tui(args) => silograph::tui::run_tui(args, config).await?,
    }

    Ok(())
}
