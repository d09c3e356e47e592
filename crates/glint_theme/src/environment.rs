//! OS color-scheme preference
//!
//! The preference is read once, at initial resolution. The engine does not
//! subscribe to changes; an OS switch mid-session leaves the resolved theme
//! alone.

use crate::theme::Theme;

/// Read-only "prefers dark" signal from the host environment
pub trait ColorSchemeQuery {
    /// `Some(true)` for a dark preference, `Some(false)` for light, `None`
    /// when the environment exposes no signal
    fn prefers_dark(&self) -> Option<bool>;
}

/// Preference queried from the operating system
#[cfg(feature = "system-scheme")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemColorScheme;

#[cfg(feature = "system-scheme")]
impl ColorSchemeQuery for SystemColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(true),
            Ok(dark_light::Mode::Light) => Some(false),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!("system color scheme unavailable: {err}");
                None
            }
        }
    }
}

/// Fixed answer, for headless contexts and tests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub Option<Theme>);

impl FixedColorScheme {
    pub const NONE: FixedColorScheme = FixedColorScheme(None);

    pub fn prefers(theme: Theme) -> Self {
        Self(Some(theme))
    }

    /// Parse an override such as `GLINT_COLOR_SCHEME=dark`.
    ///
    /// Unrecognised values give no signal.
    pub fn from_override(value: &str) -> Self {
        Self(Theme::from_persisted(value.trim()))
    }
}

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0.map(Theme::is_dark)
    }
}
