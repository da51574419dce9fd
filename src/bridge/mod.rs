//! Sketch Bridge - hands a selection to the external morph/sketch tool
//!
//! Two-step contract, ordering-safe by construction: the selection is
//! persisted to a session cache entry first, and the structured message is
//! built and handed over exactly once, only after the consumer signals it
//! has finished initializing. No ready signal means no message; there is no
//! timeout and no retry.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fixed cache key / message type shared with the consumer
pub const MORPH_SELECTION_KEY: &str = "morphSelection";

/// Session-scoped cache entry holding the last exported selection as a
/// JSON-encoded ordered array of filenames
#[derive(Debug, Clone)]
pub struct SelectionCache {
    dir: PathBuf,
}

impl SelectionCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Default session cache directory
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "tunclon", "silograph")
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::cache_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("silograph")
            })
    }

    /// Path of the cache entry for the fixed key
    pub fn entry_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", MORPH_SELECTION_KEY))
    }

    /// Write the ordered filename list. Synchronous: the write has
    /// completed before this returns, so the consumer can always read it.
    pub fn write(&self, ids: &[String]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache dir: {}", self.dir.display()))?;

        let path = self.entry_path();
        let data = serde_json::to_vec(ids).context("Failed to encode selection")?;
        std::fs::write(&path, data)
            .with_context(|| format!("Failed to write cache entry: {}", path.display()))?;

        tracing::debug!("Wrote {} filenames to {}", ids.len(), path.display());
        Ok(path)
    }

    /// Read the cached selection back. A missing or unparseable entry
    /// degrades to an empty payload rather than aborting the export.
    pub fn read(&self) -> Vec<String> {
        let path = self.entry_path();
        match std::fs::read(&path) {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::warn!("Unparseable cache entry {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!("Unreadable cache entry {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }
}

/// Cross-context message sent to the embedded consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Vec<String>,
}

impl MorphMessage {
    pub fn new(payload: Vec<String>) -> Self {
        Self {
            kind: MORPH_SELECTION_KEY.to_string(),
            payload,
        }
    }
}

/// One-shot ready/notify handshake for a single export.
///
/// Created after the cache write has completed; the message is produced on
/// the first `consumer_ready` call and never again.
#[derive(Debug)]
pub struct ExportHandshake {
    cache: SelectionCache,
    sent: bool,
}

impl ExportHandshake {
    /// Has the message already been handed over?
    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// The consumer finished initializing: build the message from the
    /// cache entry (degrading to an empty payload on a bad read) and hand
    /// it over. Returns None on every call after the first.
    pub fn consumer_ready(&mut self) -> Option<MorphMessage> {
        if self.sent {
            return None;
        }
        self.sent = true;
        Some(MorphMessage::new(self.cache.read()))
    }
}

/// The export mechanism: persist, then gate the message on consumer load
#[derive(Debug, Clone)]
pub struct SketchBridge {
    cache: SelectionCache,
}

impl SketchBridge {
    pub fn new(cache: SelectionCache) -> Self {
        Self { cache }
    }

    pub fn with_dir(dir: &Path) -> Self {
        Self::new(SelectionCache::new(dir.to_path_buf()))
    }

    pub fn cache(&self) -> &SelectionCache {
        &self.cache
    }

    /// Serialize the ordered selection to the cache entry and return the
    /// pending handshake. The write happens before the handshake exists,
    /// so the consumer can never observe a missing entry.
    pub fn export(&self, ids: &[String]) -> Result<ExportHandshake> {
        self.cache.write(ids)?;
        Ok(ExportHandshake {
            cache: self.cache.clone(),
            sent: false,
        })
    }
}
