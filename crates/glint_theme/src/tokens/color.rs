//! Color tokens for theming

use glint_core::Color;
use serde::Serialize;

use crate::theme::Theme;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    /// Page background
    Background,
    /// Soft glow behind the transition origin
    Glow,
    /// Radiating particles
    Particle,
}

impl ColorToken {
    pub const ALL: [ColorToken; 3] = [ColorToken::Background, ColorToken::Glow, ColorToken::Particle];

    /// CSS custom property name, without the leading `--`
    pub fn css_name(self) -> &'static str {
        match self {
            ColorToken::Background => "background",
            ColorToken::Glow => "glow",
            ColorToken::Particle => "particle",
        }
    }
}

/// Per-theme color set
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorTokens {
    pub background: Color,
    pub glow_color: Color,
    pub particle_color: Color,
}

impl ColorTokens {
    /// Tokens for `theme`
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            // Warm sunrise over a pale page
            Theme::Light => Self {
                background: Color::from_hex(0xF8FAFC),
                glow_color: Color::from_hex(0xFBBF24).with_alpha(0.6),
                particle_color: Color::from_hex(0xF59E0B),
            },
            // Indigo moonlight over a near-black page
            Theme::Dark => Self {
                background: Color::from_hex(0x0B0D17),
                glow_color: Color::from_hex(0x818CF8).with_alpha(0.5),
                particle_color: Color::from_hex(0xC7D2FE),
            },
        }
    }

    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Glow => self.glow_color,
            ColorToken::Particle => self.particle_color,
        }
    }

    /// `(name, value)` pairs for CSS custom properties, in token order
    pub fn css_variables(&self) -> [(&'static str, String); 3] {
        ColorToken::ALL.map(|token| (token.css_name(), self.get(token).to_css()))
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_have_distinct_backgrounds() {
        let light = ColorTokens::for_theme(Theme::Light);
        let dark = ColorTokens::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.particle_color, dark.particle_color);
    }

    #[test]
    fn test_css_variables() {
        let vars = ColorTokens::for_theme(Theme::Dark).css_variables();
        assert_eq!(vars[0], ("background", "#0b0d17".to_string()));
        assert_eq!(vars[1].0, "glow");
        assert!(vars[1].1.starts_with("rgba("));
        assert_eq!(vars[2], ("particle", "#c7d2fe".to_string()));
    }
}
