// File: crates/charted-core/src/selection.rs
// Summary: Pointer hit testing (nearest index and focused series) and the selection it drives.

use crate::format::{number_to_string, rounded_value, string_to_number};
use crate::params::{ChartType, Rounding};
use crate::scale::ValueScale;
use crate::types::{PlotGeometry, Pointer};
use crate::view::ChartData;

/// What the selection readout describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Series at this position within the chart.
    Series(usize),
    /// Sum of every series at the selected index.
    Total,
}

impl Focus {
    pub fn is_total(self) -> bool {
        matches!(self, Focus::Total)
    }

    pub fn series(self) -> Option<usize> {
        match self {
            Focus::Series(pos) => Some(pos),
            Focus::Total => None,
        }
    }
}

/// Result of resolving a pointer position against a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosestPoint {
    pub index: usize,
    pub focus: Focus,
}

/// Resolve `pointer` to the nearest index and the series under it.
///
/// Lines pick the series whose point is vertically closest. Columns pick the
/// nearest band whose top lies above the pointer; a pointer at or above the
/// whole stack, or below it, focuses the total. Ties go to the earlier series.
/// `None` when the chart has no indices.
pub fn resolve_closest_point(
    pointer: Pointer,
    data: &ChartData,
    chart_type: ChartType,
    geometry: &PlotGeometry,
) -> Option<ClosestPoint> {
    let count = data.index_count();
    if count == 0 {
        return None;
    }

    let span = geometry.width - geometry.insets.right;
    let fractional = if span > 0.0 { pointer.x * count as f64 / span } else { 0.0 };
    let index = (fractional.max(0.0).floor() as usize).min(count - 1);

    let y_scale = ValueScale::for_chart(data, chart_type, geometry);
    let mut best: Option<(f64, usize)> = None;
    for pos in 0..data.series_count() {
        let Some(d) = data.datum(pos, index) else { continue };
        let (diff, valid) = match chart_type {
            ChartType::Line => ((pointer.y - y_scale.line_px(d)).abs(), true),
            ChartType::Column => {
                let diff = pointer.y - y_scale.stacked_top_px(d);
                (diff, diff > 0.0)
            }
        };
        if valid && best.map_or(true, |(b, _)| diff < b) {
            best = Some((diff, pos));
        }
    }

    let mut focus = if data.series_count() == 0 {
        Focus::Total
    } else {
        Focus::Series(best.map_or(0, |(_, pos)| pos))
    };

    if chart_type == ChartType::Column {
        let (neg, pos) = data.stacked_extent_for_index(index);
        let bottom_px = y_scale.to_px(neg);
        let top_px = y_scale.to_px(pos);
        if pointer.y <= top_px || pointer.y > bottom_px {
            focus = Focus::Total;
        }
    }

    Some(ClosestPoint { index, focus })
}

/// Selected index and focus of one chart, kept between pointer events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub focus: Focus,
}

impl Selection {
    /// State after a full render: the last index, focused on the total for
    /// columns or on the largest value there for lines.
    pub fn initial(data: &ChartData, chart_type: ChartType) -> Option<Self> {
        let index = data.index_count().checked_sub(1)?;
        let focus = match chart_type {
            ChartType::Column => Focus::Total,
            ChartType::Line => {
                let values = data.unstacked_values_at_index(index);
                let mut best: Option<(f64, usize)> = None;
                for (pos, v) in values.into_iter().enumerate() {
                    if best.map_or(true, |(b, _)| v > b) {
                        best = Some((v, pos));
                    }
                }
                best.map_or(Focus::Total, |(_, pos)| Focus::Series(pos))
            }
        };
        Some(Self { index, focus })
    }

    /// Follow the pointer. Returns `true` when index or focus changed, i.e.
    /// when the highlight needs redrawing. Pointers below the plot are ignored.
    pub fn track(&mut self, pointer: Pointer, data: &ChartData, chart_type: ChartType, geometry: &PlotGeometry) -> bool {
        if pointer.y > geometry.height {
            return false;
        }
        let Some(point) = resolve_closest_point(pointer, data, chart_type, geometry) else {
            return false;
        };
        if point.index == self.index && point.focus == self.focus {
            return false;
        }
        self.index = point.index;
        self.focus = point.focus;
        true
    }

    /// Move to `index` (synchronised from another chart), keeping the focus.
    pub fn select_index(&mut self, index: usize, data: &ChartData) {
        if let Some(last) = data.index_count().checked_sub(1) {
            self.index = index.min(last);
        }
    }

    /// Whether the marker for the focused series is drawn: only inside that
    /// series' non-blank extent, never for the total.
    pub fn selected_dot_visible(&self, data: &ChartData) -> bool {
        match self.focus {
            Focus::Series(pos) => pos < data.series_count() && data.is_within_extent(pos, self.index),
            Focus::Total => false,
        }
    }

    /// Numeric value the readout shows: the total, or the focused cell's raw text re-parsed.
    pub fn value(&self, data: &ChartData) -> Option<f64> {
        match self.focus {
            Focus::Total => Some(data.total_at_index(self.index)),
            Focus::Series(pos) => data.datum(pos, self.index).map(|d| string_to_number(&d.y_raw)),
        }
    }
}

/// Text shown next to the selection marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionReadout {
    pub x_label: String,
    /// Series name, `total`, or empty for single-series charts.
    pub y_label: String,
    pub value: String,
    pub color: String,
}

/// Format a readout value: rounded against the chart's range, or as-is.
pub fn format_value(value: f64, rounding: Rounding, y_range: (f64, f64)) -> String {
    match rounding {
        Rounding::On => rounded_value(value, y_range),
        Rounding::Off => number_to_string(value),
    }
}
