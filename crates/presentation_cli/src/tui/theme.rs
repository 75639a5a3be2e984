//! Color palettes for the light and dark themes

use domain::value_objects::ThemePreference;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by the panel for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        background: Color::Black,
        foreground: Color::White,
        muted: Color::Gray,
        accent: Color::Cyan,
        border: Color::DarkGray,
        error: Color::LightRed,
    };

    pub const LIGHT: Self = Self {
        background: Color::White,
        foreground: Color::Black,
        muted: Color::DarkGray,
        accent: Color::Blue,
        border: Color::Gray,
        error: Color::Red,
    };

    pub const fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Self::DARK,
            ThemePreference::Light => Self::LIGHT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        self.base().fg(self.border)
    }

    pub fn error(&self) -> Style {
        self.base().fg(self.error).add_modifier(Modifier::BOLD)
    }
}

/// Glyph for a theme toggle icon id
pub fn toggle_glyph(icon_id: &str) -> &'static str {
    match icon_id {
        "sun" => "\u{2600}",  // ☀
        "moon" => "\u{263E}", // ☾
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ() {
        assert_ne!(
            Palette::for_theme(ThemePreference::Dark),
            Palette::for_theme(ThemePreference::Light)
        );
        assert_eq!(Palette::for_theme(ThemePreference::Light).background, Color::White);
    }

    #[test]
    fn toggle_glyphs() {
        assert_eq!(toggle_glyph(ThemePreference::Dark.toggle_icon()), "\u{2600}");
        assert_eq!(toggle_glyph(ThemePreference::Light.toggle_icon()), "\u{263E}");
    }
}
