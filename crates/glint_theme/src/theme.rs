//! The light/dark theme value

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// Visual theme variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The other variant
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted and attribute form
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value.
    ///
    /// Only the exact strings `"light"` and `"dark"` are accepted; anything
    /// else (other casing, padding, other names) counts as absent.
    pub fn from_persisted(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_persisted(s).ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        for theme in Theme::ALL {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_persisted_values_are_exact() {
        assert_eq!(Theme::from_persisted("light"), Some(Theme::Light));
        assert_eq!(Theme::from_persisted("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_persisted("Dark"), None);
        assert_eq!(Theme::from_persisted(" dark"), None);
        assert_eq!(Theme::from_persisted("blue"), None);
        assert_eq!(Theme::from_persisted(""), None);
    }

    #[test]
    fn test_from_str_reports_unknown_value() {
        let err = "blue".parse::<Theme>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(ref v) if v == "blue"));
    }
}
