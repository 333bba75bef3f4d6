//! Dark and light palette definitions.

use ratatui::style::Color;

use super::types::{Theme, ThemeMode};

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

const DARK: Theme = Theme {
    base: hex((0x16, 0x16, 0x21)),
    mantle: hex((0x11, 0x11, 0x1b)),
    surface: hex((0x3b, 0x3d, 0x52)),
    overlay: hex((0x77, 0x7c, 0x94)),
    text: hex((0xd2, 0xda, 0xf2)),
    subtext: hex((0x9d, 0xa5, 0xc0)),
    sapphire: hex((0x6e, 0xc4, 0xe8)),
    mauve: hex((0xc6, 0x9f, 0xf2)),
    green: hex((0x9f, 0xdf, 0x9b)),
    yellow: hex((0xf5, 0xde, 0xa5)),
    red: hex((0xef, 0x85, 0xa0)),
    lavender: hex((0xae, 0xb8, 0xf8)),
};

const LIGHT: Theme = Theme {
    base: hex((0xee, 0xf0, 0xf6)),
    mantle: hex((0xe4, 0xe6, 0xef)),
    surface: hex((0xbd, 0xc2, 0xd4)),
    overlay: hex((0x86, 0x8c, 0xa4)),
    text: hex((0x3a, 0x3f, 0x52)),
    subtext: hex((0x5c, 0x62, 0x78)),
    sapphire: hex((0x1d, 0x73, 0x9e)),
    mauve: hex((0x7a, 0x3d, 0xc8)),
    green: hex((0x35, 0x7e, 0x3c)),
    yellow: hex((0x9a, 0x6f, 0x14)),
    red: hex((0xc2, 0x2f, 0x54)),
    lavender: hex((0x5b, 0x63, 0xc7)),
};

/// Return the palette for `mode`.
///
/// Example
///
/// ```rust
/// use folio::theme::{ThemeMode, palette};
/// let th = palette(ThemeMode::Dark);
/// let primary_text = th.text;
/// ```
pub const fn palette(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => DARK,
        ThemeMode::Light => LIGHT,
    }
}
