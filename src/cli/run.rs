//! Command handlers for the non-interactive CLI surface

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use super::{ExportArgs, FilterArgs, OutputFormat, StatsArgs, ViewArgs};
use crate::bridge::{SelectionCache, SketchBridge};
use crate::carousel::Carousel;
use crate::config::Config;
use crate::core::GalleryEngine;

/// Resolve the dataset path: CLI argument wins over config
fn dataset_path(arg: &Option<PathBuf>, config: &Config) -> PathBuf {
    arg.clone().unwrap_or_else(|| config.data.dataset.clone())
}

/// `silograph stats` - catalog totals and per-category silhouette counts
pub async fn run_stats(args: &StatsArgs, config: &Config, output: OutputFormat) -> Result<()> {
    let engine = GalleryEngine::load(&dataset_path(&args.dataset, config)).await?;
    let stats = engine.catalog().stats();

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Human => {
            println!("{}", "Catalog".bold());
            println!("  Records:     {}", stats.total_records);
            println!("  Silhouettes: {}", stats.silhouettes);
            println!();
            println!("{}", "Silhouettes by category".bold());
            for category in ["children", "women", "men"] {
                let count = stats.by_category.get(category).copied().unwrap_or(0);
                println!("  {:<12} {}", category, count);
            }
            println!("  {:<12} {}", "none", stats.uncategorized);
        }
    }

    Ok(())
}

/// `silograph filter` - list the visible set for a filter state
pub async fn run_filter(args: &FilterArgs, config: &Config, output: OutputFormat) -> Result<()> {
    let mut engine = GalleryEngine::load(&dataset_path(&args.dataset, config)).await?;

    engine.set_category(args.category.map(Into::into));
    // Raw control value: normalization ("identified" -> named,
    // unrecognized -> all) happens at this boundary
    engine.set_bucket_raw(&args.bucket);

    let visible = engine.visible();

    match output {
        OutputFormat::Json => {
            let items: Vec<_> = visible
                .iter()
                .take(args.limit)
                .map(|r| {
                    json!({
                        "filename": r.filename,
                        "title": r.title,
                        "category": r.category.map(|c| c.label()),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "visible": engine.visible_count(),
                    "total": engine.catalog().silhouette_count(),
                    "bucket": engine.filter_state().bucket.label(),
                    "records": items,
                }))?
            );
        }
        OutputFormat::Human => {
            if visible.is_empty() {
                println!("{}", "No results found".dimmed());
            } else {
                for record in visible.iter().take(args.limit) {
                    let category = record
                        .category
                        .map(|c| c.label())
                        .unwrap_or("none");
                    println!(
                        "{}  {}  {}",
                        record.filename.cyan(),
                        format!("[{}]", category).dimmed(),
                        record.alt_text()
                    );
                }
                if visible.len() > args.limit {
                    println!("{}", format!("... +{} more", visible.len() - args.limit).dimmed());
                }
            }
            println!("\n{}", engine.count_line().bold());
        }
    }

    Ok(())
}

/// `silograph view` - print every carousel page for the given selection
pub async fn run_view(args: &ViewArgs, config: &Config, output: OutputFormat) -> Result<()> {
    let engine = GalleryEngine::load(&dataset_path(&args.dataset, config)).await?;
    let catalog = engine.catalog();

    let slides: Vec<_> = args
        .files
        .iter()
        .map(|id| match catalog.get_by_filename(id) {
            Some(record) => crate::carousel::Slide::from_record(
                record,
                &config.data.outlines_dir,
                &config.data.outline_ext,
            ),
            None => crate::carousel::Slide::bare(id),
        })
        .collect();

    let mut carousel = Carousel::new(slides);

    match output {
        OutputFormat::Json => {
            let mut pages = Vec::new();
            loop {
                let page: Vec<_> = carousel
                    .window()
                    .iter()
                    .map(|s| {
                        json!({
                            "src": s.src,
                            "alt": s.alt,
                            "overlay": s.overlay,
                            "caption": s.caption.as_ref().map(|c| {
                                json!({
                                    "heading": c.heading,
                                    "date": c.date,
                                    "place": c.place,
                                })
                            }),
                        })
                    })
                    .collect();
                pages.push(page);
                if !carousel.has_next() {
                    break;
                }
                carousel.next();
            }
            println!("{}", serde_json::to_string_pretty(&pages)?);
        }
        OutputFormat::Human => {
            let mut page_no = 1;
            loop {
                println!("{}", format!("Page {}", page_no).bold());
                for slide in carousel.window() {
                    println!("  {}", slide.alt.cyan());
                    if let Some(caption) = &slide.caption {
                        if !caption.date.is_empty() {
                            println!("    {}", caption.date);
                        }
                        if !caption.place.is_empty() {
                            println!("    {}", caption.place);
                        }
                    }
                    if let Some(overlay) = &slide.overlay {
                        println!("    {} {}", "overlay:".dimmed(), overlay.display());
                    }
                }
                if !carousel.has_next() {
                    break;
                }
                carousel.next();
                page_no += 1;
                println!();
            }
        }
    }

    Ok(())
}

/// `silograph export` - persist the selection and run the ready-gated
/// handshake, with stdout standing in for the embedded consumer
pub async fn run_export(args: &ExportArgs, config: &Config, output: OutputFormat) -> Result<()> {
    // The dataset is only needed to warn about unknown filenames
    let engine = GalleryEngine::load(&dataset_path(&args.dataset, config)).await?;
    for id in &args.files {
        if engine.catalog().get_by_filename(id).is_none() {
            tracing::warn!("Filename not in catalog: {}", id);
        }
    }

    let cache_dir = args
        .cache_dir
        .clone()
        .or_else(|| config.export.cache_dir.clone())
        .unwrap_or_else(SelectionCache::default_dir);

    let bridge = SketchBridge::new(SelectionCache::new(cache_dir));
    let mut handshake = bridge.export(&args.files)?;

    // The consumer (stdout here) is ready as soon as the entry is written
    let message = handshake
        .consumer_ready()
        .context("Export handshake already consumed")?;

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&message)?);
        }
        OutputFormat::Human => {
            println!(
                "Exported {} filenames to {}",
                message.payload.len(),
                bridge.cache().entry_path().display()
            );
            println!("{}", serde_json::to_string(&message)?);
        }
    }

    Ok(())
}
