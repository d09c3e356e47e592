//! Glint configuration file handling

use anyhow::{Context, Result};
use glint_theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level Glint configuration (glint.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlintConfig {
    /// `[theme]` and `[transition]` tables
    #[serde(flatten)]
    pub engine: ThemeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where the persisted theme lives
#[derive(Debug, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".glint/preferences.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl GlintConfig {
    /// Load configuration from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and validate a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        let config: GlintConfig = toml::from_str(content).context("Failed to parse TOML")?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
