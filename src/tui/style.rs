//! Colour theme for the TUI.

use ratatui::style::Color;

use crate::report::BAR_COLORS;

/// Page background.
pub const BACKGROUND: Color = Color::Rgb(0x1b, 0x16, 0x12);
/// Accent used for text, titles, and gauges.
pub const ACCENT: Color = Color::Rgb(0xff, 0xd3, 0x00);
/// Chart panel background; light so the darkest bar stays visible.
pub const CHART_BG: Color = Color::Rgb(0xf5, 0xf0, 0xe6);
/// Highlight for the selected control.
pub const SELECTED_BG: Color = Color::Rgb(0x3a, 0x30, 0x24);
/// Error message colour.
pub const ERROR_FG: Color = Color::Rgb(0xf5, 0x90, 0xc7);
/// Footer help text colour.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Parses `#rrggbb` into an RGB colour.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Fill colour of the `idx`-th chart bar.
pub fn bar_color(idx: usize) -> Color {
    BAR_COLORS
        .get(idx)
        .and_then(|h| hex_color(h))
        .unwrap_or(ACCENT)
}
