//! Catalog - the full ordered record set loaded from the dataset JSON
//!
//! Loaded once per session; immutable afterwards. The silhouette subset and
//! per-record categories are derived at load time.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Category, Record};
use crate::classify::Classifier;

/// Dataset load faults. Both are terminal for the session: the caller logs
/// and gives up, there is no retry and no partial catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog statistics (silhouette counts per category)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_records: usize,
    pub silhouettes: usize,
    pub by_category: HashMap<String, usize>,
    pub uncategorized: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// The full ordered record sequence plus the derived silhouette subset
#[derive(Debug)]
pub struct Catalog {
    /// All dataset records in load order
    records: Vec<Record>,
    /// Indices (into `records`) of the silhouette subset, in load order
    silhouette_idx: Vec<usize>,
    /// Load timestamp
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog from already-parsed records: derive the silhouette
    /// subset and assign each silhouette its exclusive category.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        let classifier = Classifier::new();

        let silhouette_idx: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_silhouette())
            .map(|(i, _)| i)
            .collect();

        // Stable, exclusive category so per-category counts never overlap
        for &i in &silhouette_idx {
            records[i].category = classifier.classify(&records[i]);
        }

        Self {
            records,
            silhouette_idx,
            loaded_at: Utc::now(),
        }
    }

    /// Load the dataset JSON array from disk.
    ///
    /// Missing record fields deserialize as empty strings; a malformed file
    /// is a terminal error.
    pub async fn load(path: &Path) -> Result<Self> {
        let owned_path = path.to_path_buf();
        let data = tokio::task::spawn_blocking(move || std::fs::read(&owned_path))
            .await
            .context("Dataset read task panicked")?
            .map_err(CatalogError::Io)
            .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

        let records: Vec<Record> = serde_json::from_slice(&data)
            .map_err(CatalogError::Parse)
            .with_context(|| format!("Failed to parse dataset: {}", path.display()))?;

        tracing::info!(
            "Loaded {} records from {}",
            records.len(),
            path.display()
        );

        Ok(Self::from_records(records))
    }

    /// All records in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The silhouette subset in load order
    pub fn silhouettes(&self) -> impl Iterator<Item = &Record> {
        self.silhouette_idx.iter().map(|&i| &self.records[i])
    }

    /// Number of silhouette records
    pub fn silhouette_count(&self) -> usize {
        self.silhouette_idx.len()
    }

    /// Total record count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its filename (full catalog, not just silhouettes)
    pub fn get_by_filename(&self, filename: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.filename == filename)
    }

    /// Aggregate statistics over the silhouette subset
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total_records: self.records.len(),
            silhouettes: self.silhouette_idx.len(),
            loaded_at: Some(self.loaded_at),
            ..Default::default()
        };

        for record in self.silhouettes() {
            match record.category {
                Some(category) => {
                    *stats
                        .by_category
                        .entry(category.label().to_string())
                        .or_insert(0) += 1;
                }
                None => stats.uncategorized += 1,
            }
        }

        stats
    }
}
