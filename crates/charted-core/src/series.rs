// File: crates/charted-core/src/series.rs
// Summary: Series descriptors and per-cell datums, raw and stacked.

use serde::{Deserialize, Serialize};

/// A non-index column of the source table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInfo {
    pub label: String,
    /// Column position after the index column is removed. Stable across charts.
    pub series_index: usize,
}

/// One cell of a series.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    /// Row position.
    pub x: usize,
    pub x_label: String,
    /// Parsed value; unparseable text reads as 0.
    pub y: f64,
    /// Original cell text, used for display and to tell blanks from zeros.
    pub y_raw: String,
}

impl Datum {
    pub fn new(x: usize, x_label: impl Into<String>, y_raw: impl Into<String>) -> Self {
        let y_raw = y_raw.into();
        Self { x, x_label: x_label.into(), y: crate::format::string_to_number(&y_raw), y_raw }
    }
}

/// A datum placed in one chart's stack.
///
/// `y0`/`y1` bound the band this value occupies at its index. Negative values
/// hang below zero, the rest sit above it.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedDatum {
    pub x: usize,
    pub x_label: String,
    pub y: f64,
    pub y_raw: String,
    /// Position of the owning series within the chart.
    pub y_series: usize,
    pub y0: f64,
    pub y1: f64,
}

impl StackedDatum {
    pub(crate) fn unstacked(d: &Datum, y_series: usize) -> Self {
        Self {
            x: d.x,
            x_label: d.x_label.clone(),
            y: d.y,
            y_raw: d.y_raw.clone(),
            y_series,
            y0: 0.0,
            y1: 0.0,
        }
    }

    /// The value that bounds the band's visual footprint.
    #[inline]
    pub fn stacked_edge(&self) -> f64 {
        if self.y < 0.0 { self.y0 } else { self.y1 }
    }
}
