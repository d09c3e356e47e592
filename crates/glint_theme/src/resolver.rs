//! Initial theme resolution
//!
//! Order, first hit wins: persisted value, OS preference, fallback. Storage
//! faults and malformed values fall through silently. Resolution never
//! writes storage.

use crate::environment::ColorSchemeQuery;
use crate::storage::PreferenceStore;
use crate::theme::Theme;

/// Where a resolved theme came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Fallback,
}

/// A resolved theme and its source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub theme: Theme,
    pub source: ThemeSource,
}

/// Computes the session's starting theme
#[derive(Clone, Debug)]
pub struct PreferenceResolver<'a> {
    storage_key: &'a str,
    fallback: Theme,
}

impl<'a> PreferenceResolver<'a> {
    pub fn new(storage_key: &'a str, fallback: Theme) -> Self {
        Self {
            storage_key,
            fallback,
        }
    }

    /// Resolve the initial theme
    pub fn resolve(&self, storage: &dyn PreferenceStore, env: &dyn ColorSchemeQuery) -> Theme {
        self.resolve_with_source(storage, env).theme
    }

    /// Resolve the initial theme, reporting which source decided it
    pub fn resolve_with_source(
        &self,
        storage: &dyn PreferenceStore,
        env: &dyn ColorSchemeQuery,
    ) -> Resolution {
        if let Some(theme) = self.stored(storage) {
            return Resolution {
                theme,
                source: ThemeSource::Stored,
            };
        }

        match env.prefers_dark() {
            Some(true) => Resolution {
                theme: Theme::Dark,
                source: ThemeSource::System,
            },
            Some(false) => Resolution {
                theme: Theme::Light,
                source: ThemeSource::System,
            },
            None => Resolution {
                theme: self.fallback,
                source: ThemeSource::Fallback,
            },
        }
    }

    fn stored(&self, storage: &dyn PreferenceStore) -> Option<Theme> {
        match storage.get(self.storage_key) {
            Ok(Some(value)) => {
                let theme = Theme::from_persisted(&value);
                if theme.is_none() {
                    tracing::debug!(key = self.storage_key, "ignoring malformed persisted theme");
                }
                theme
            }
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(key = self.storage_key, "theme storage read failed: {err}");
                None
            }
        }
    }
}
