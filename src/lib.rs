//! Silograph Library
//!
//! Offline silhouette catalog browser - loads a read-only dataset of
//! catalog records, classifies silhouettes into audience categories,
//! filters them by category and keyword bucket, tracks an ordered
//! selection, pages it through a 3-up carousel, and exports the selection
//! to an external morph/sketch tool.
//!
//! # Features
//!
//! - **Load-time Classification**: Ordered word-boundary keyword rules
//!   tag every silhouette once, at catalog load
//! - **Compound Filtering**: Category and bucket combine with logical AND,
//!   order-preserving and idempotent
//! - **Ordered Selection**: Export and carousel order match the order in
//!   which records were selected
//! - **Ready-gated Export**: The selection is persisted before the
//!   consumer is notified, and notified exactly once
//!
//! # Example
//!
//! ```no_run
//! use silograph::core::GalleryEngine;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut engine = GalleryEngine::load(Path::new("data/dataset.json")).await?;
//!
//!     engine.set_bucket_raw("unidentified");
//!     println!("{}", engine.count_line());
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod carousel;
pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod filter;
pub mod selection;
pub mod tui;

// Re-export commonly used types
pub use bridge::{ExportHandshake, MorphMessage, SelectionCache, SketchBridge};
pub use carousel::{Caption, Carousel, Slide, PAGE_SIZE};
pub use classify::Classifier;
pub use config::Config;
pub use core::{Catalog, CatalogStats, Category, GalleryEngine, Record};
pub use filter::{Bucket, FilterEngine, FilterState};
pub use selection::SelectionSet;
