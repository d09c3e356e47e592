//! Theme engine configuration
//!
//! Maps onto the `[theme]` and `[transition]` tables of `glint.toml`. Every
//! field has a default, so an empty document is a valid configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Corner;
use crate::theme::Theme;

/// Engine configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub transition: TransitionConfig,
}

/// Theme selection settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// Storage key holding the persisted theme
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Theme used when neither storage nor the OS has an answer
    #[serde(default, rename = "default")]
    pub fallback: Theme,
    /// Transition origin, fixed for the life of the process
    #[serde(default)]
    pub corner: Corner,
}

fn default_storage_key() -> String {
    "theme".to_string()
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            fallback: Theme::default(),
            corner: Corner::default(),
        }
    }
}

/// Transition timing
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransitionConfig {
    /// Delay from toggle to commit
    #[serde(default = "default_commit_delay_ms")]
    pub commit_delay_ms: u64,
    /// Delay from toggle to idle
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

fn default_commit_delay_ms() -> u64 {
    200
}

fn default_settle_delay_ms() -> u64 {
    500
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            commit_delay_ms: default_commit_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl TransitionConfig {
    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// The commit timer must fire strictly before the settle timer
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.commit_delay_ms >= self.settle_delay_ms {
            return Err(ConfigError::DelayOrder {
                commit_ms: self.commit_delay_ms,
                settle_ms: self.settle_delay_ms,
            });
        }
        Ok(())
    }
}

impl ThemeConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: ThemeConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(src) => Self::from_toml_str(&src),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.transition.validate()
    }
}
