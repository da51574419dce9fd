//! Configuration Module - User preferences from ~/.silograph/config.toml
//!
//! Supports:
//! - Dataset and outline asset locations
//! - Export cache directory
//! - Log level

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Silograph configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Dataset and asset locations
    pub data: DataConfig,
    /// Export settings
    pub export: ExportConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Dataset and asset locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Dataset JSON path
    pub dataset: PathBuf,
    /// Directory holding silhouette outline overlays
    pub outlines_dir: PathBuf,
    /// Overlay file extension
    pub outline_ext: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/dataset.json"),
            outlines_dir: PathBuf::from("outlines"),
            outline_ext: "png".to_string(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Cache directory for the morph selection entry
    /// (default: the per-user cache dir)
    pub cache_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from default path or return defaults
    pub fn load() -> Self {
        Self::load_from(&Self::default_path()).unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tunclon", "silograph")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".silograph")
                    .join("config.toml")
            })
    }
}

/// Generate a sample config file with comments
pub fn generate_sample_config() -> String {
    r#"# Silograph Configuration
# Location: ~/.config/silograph/config.toml

[general]
# Log level: trace, debug, info, warn, error
log_level = "info"

[data]
# Dataset JSON (an array of catalog records)
dataset = "data/dataset.json"

# Directory holding silhouette outline overlays
outlines_dir = "outlines"

# Overlay file extension
outline_ext = "png"

[export]
# Cache directory for the morph selection entry (optional)
# cache_dir = "/home/user/.cache/silograph"
"#
    .to_string()
}
