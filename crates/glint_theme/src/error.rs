use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the theme engine's public API.
///
/// Environmental faults (storage, OS preference) never show up here; they are
/// absorbed by the resolver and the store.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
    UnknownTheme(String),

    #[error("unknown corner {0:?}, expected top-right, top-left, bottom-right or bottom-left")]
    UnknownCorner(String),

    #[error("theme accessed outside a ThemeProvider scope; provide a ThemeEngine at the view root")]
    OutsideProvider,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("commit delay ({commit_ms}ms) must be shorter than settle delay ({settle_ms}ms)")]
    DelayOrder { commit_ms: u64, settle_ms: u64 },

    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

pub type Result<T> = std::result::Result<T, ThemeError>;
