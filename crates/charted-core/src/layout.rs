// File: crates/charted-core/src/layout.rs
// Summary: Chart wrapper sizing from window size, chart count and grid mode.

use crate::params::GridMode;

const MIN_HEIGHT_FOR_HALF_HEIGHT: f64 = 600.0;
const MIN_WIDTH_FOR_HALF_WIDTH: f64 = 1200.0;
const MIN_WIDTH_FOR_FULL_HEIGHT: f64 = 800.0;

/// Inner size of the browser window or host surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Size shared by every chart wrapper on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    /// `None` sizes the wrapper to its content (narrow windows).
    pub height: Option<f64>,
    pub is_half_height: bool,
    /// Charts sit two per row.
    pub is_grid: bool,
}

impl ChartDimensions {
    /// Whether chart `chart` of `chart_count` sits in the last grid row.
    pub fn is_bottom_row(&self, chart: usize, chart_count: usize) -> bool {
        self.is_grid && chart >= chart_count.saturating_sub(1) / 2 * 2
    }
}

/// Lay out `chart_count` charts in `window`.
///
/// Two or more charts go two per row on wide windows unless the grid mode is
/// full width. Charts take half the window height when it is tall enough and
/// there are charts to stack; narrow windows let height follow content.
pub fn chart_dimensions(chart_count: usize, window: WindowSize, grid: GridMode) -> ChartDimensions {
    let default_height = (window.width > MIN_WIDTH_FOR_FULL_HEIGHT).then_some(window.height);

    let is_grid = chart_count >= 2 && window.width > MIN_WIDTH_FOR_HALF_WIDTH && grid == GridMode::Split;
    let tall_enough = window.height > MIN_HEIGHT_FOR_HALF_HEIGHT && window.width > MIN_WIDTH_FOR_FULL_HEIGHT;
    let enough_charts = chart_count >= 3 || (chart_count == 2 && !is_grid);
    let is_half_height = tall_enough && enough_charts;

    ChartDimensions {
        width: if is_grid { window.width / 2.0 } else { window.width },
        height: if is_half_height { Some(window.height / 2.0) } else { default_height },
        is_half_height,
        is_grid,
    }
}
