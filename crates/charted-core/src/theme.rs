// File: crates/charted-core/src/theme.rs
// Summary: Light/dark text colors and the default series palette.

use crate::params::ColorMode;

/// Text color on a light page.
pub const TEXT_LIGHT: &str = "#333333";
/// Text color on a dark page.
pub const TEXT_DARK: &str = "#FFFFFF";

/// Series colors, assigned by position within a chart.
pub const PALETTE: [&str; 7] = [
    "#6DCC73", // green
    "#1D7775", // teal
    "#4FCFD5", // cyan
    "#FCE651", // yellow
    "#FF7050", // red
    "#FFC050", // orange
    "#999999", // gray
];

/// Foreground color used for single-series charts and totals.
pub fn text_color(color: ColorMode) -> &'static str {
    match color {
        ColorMode::Light => TEXT_LIGHT,
        ColorMode::Dark => TEXT_DARK,
    }
}

/// Default color of page series `series_index` inside a chart showing `chart_series`.
///
/// A chart with one series draws it in the text color. `None` when the series
/// is not part of the chart.
pub fn default_series_color(chart_series: &[usize], series_index: usize, color: ColorMode) -> Option<&'static str> {
    if chart_series.len() == 1 {
        return Some(text_color(color));
    }
    let pos = chart_series.iter().position(|&s| s == series_index)?;
    Some(PALETTE[pos % PALETTE.len()])
}

/// `#rgb` or `#rrggbb`, case-insensitive.
pub fn is_valid_hex(s: &str) -> bool {
    let Some(hex) = s.strip_prefix('#') else { return false };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
