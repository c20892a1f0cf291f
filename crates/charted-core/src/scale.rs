// File: crates/charted-core/src/scale.rs
// Summary: Index (X) and value (Y) scales mapping chart data to plot pixels.

use crate::params::ChartType;
use crate::series::StackedDatum;
use crate::types::PlotGeometry;
use crate::view::ChartData;

/// Linear map from `[d0, d1]` onto `[r0, r1]`. A zero-width domain maps to `r0`.
#[inline]
fn linear(v: f64, d0: f64, d1: f64, r0: f64, r1: f64) -> f64 {
    let span = d1 - d0;
    if span == 0.0 {
        return r0;
    }
    r0 + (v - d0) / span * (r1 - r0)
}

/// Horizontal scale: one column slot per index.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub index_count: usize,
    pub left_px: f64,
    pub right_px: f64,
    plot_width: f64,
}

impl IndexScale {
    pub fn new(index_count: usize, geometry: &PlotGeometry) -> Self {
        let i = &geometry.insets;
        Self {
            index_count,
            left_px: i.left,
            right_px: geometry.width - i.right - i.left,
            plot_width: geometry.plot_width(),
        }
    }

    #[inline]
    pub fn to_px(&self, x: f64) -> f64 {
        linear(x, 0.0, self.index_count as f64, self.left_px, self.right_px)
    }

    /// Left edge of the column at `x`.
    pub fn x_position(&self, x: usize) -> f64 {
        self.to_px(x as f64).floor()
    }

    /// Column width at `x`, leaving a 1px gap once columns are at least 8px wide.
    pub fn bar_width(&self, x: usize) -> f64 {
        let space = if self.index_count > 0 && self.plot_width / self.index_count as f64 >= 8.0 { 1.0 } else { 0.0 };
        let next = if x + 1 < self.index_count { self.to_px((x + 1) as f64) } else { self.plot_width };
        next.floor() - self.x_position(x) - space
    }

    /// Center of the column at `x`, where line points sit.
    pub fn line_position(&self, x: usize) -> f64 {
        // every column at an index shares series 0's width
        self.x_position(x) + 0.5 * self.bar_width(x)
    }
}

/// Vertical scale; pixel y grows downward.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub vmin: f64,
    pub vmax: f64,
    pub bottom_px: f64,
    pub top_px: f64,
}

impl ValueScale {
    /// Scale whose domain always includes zero, with 10% headroom below negatives.
    pub fn for_range(range: (f64, f64), geometry: &PlotGeometry) -> Self {
        let vmin = if range.0 < 0.0 { range.0 * 1.1 } else { 0.0 };
        Self {
            vmin,
            vmax: range.1.max(0.0),
            bottom_px: geometry.height - geometry.insets.bottom,
            top_px: geometry.insets.top,
        }
    }

    /// Scale for `data` drawn as `chart_type`: stacked extent for columns, raw for lines.
    pub fn for_chart(data: &ChartData, chart_type: ChartType, geometry: &PlotGeometry) -> Self {
        Self::for_range(y_range(data, chart_type), geometry)
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        linear(y, self.vmin, self.vmax, self.bottom_px, self.top_px)
    }

    /// Pixel y of a line point.
    pub fn line_px(&self, d: &StackedDatum) -> f64 {
        self.to_px(d.y)
    }

    /// Pixel y of a column's top edge.
    pub fn stacked_top_px(&self, d: &StackedDatum) -> f64 {
        self.to_px(d.y1)
    }

    /// Column height; zero values draw nothing.
    pub fn stacked_height_px(&self, d: &StackedDatum) -> f64 {
        if d.y == 0.0 { 0.0 } else { self.to_px(d.y0) - self.to_px(d.y1) + 1.0 }
    }
}

/// Value range a chart is laid out against, `(0, 0)` without data.
pub fn y_range(data: &ChartData, chart_type: ChartType) -> (f64, f64) {
    let ext = match chart_type {
        ChartType::Column => data.stacked_extent(),
        ChartType::Line => data.unstacked_extent(),
    };
    ext.unwrap_or((0.0, 0.0))
}
