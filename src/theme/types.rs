//! Theme type definitions.

use ratatui::style::Color;

/// Binary palette mode. Dark is the default for fresh sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Dark palette.
    #[default]
    Dark,
    /// Light palette.
    Light,
}

impl ThemeMode {
    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Value written to the settings file.
    pub const fn as_config_key(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a settings value; `None` for anything unrecognized.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

/// Palette used by the rendering code.
///
/// All colors are [`ratatui::style::Color`] values suitable for direct use
/// with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background for the canvas.
    pub base: Color,
    /// Slightly offset background behind panels and modals.
    pub mantle: Color,
    /// Component surface and border shade.
    pub surface: Color,
    /// Muted line and border color.
    pub overlay: Color,
    /// Primary foreground text.
    pub text: Color,
    /// Secondary text for low-emphasis content.
    pub subtext: Color,
    /// Interactive highlight accent.
    pub sapphire: Color,
    /// Emphasized heading accent.
    pub mauve: Color,
    /// Positive state accent.
    pub green: Color,
    /// Attention accent.
    pub yellow: Color,
    /// Danger accent.
    pub red: Color,
    /// Selection and subtle emphasis accent.
    pub lavender: Color,
}
