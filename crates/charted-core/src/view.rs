// File: crates/charted-core/src/view.rs
// Summary: Per-chart projection of page data: stacking pass, trimmed series extents, value ranges.

use crate::data::PageData;
use crate::format::trimmed_extent;
use crate::series::{SeriesInfo, StackedDatum};

/// One chart's view of the page: a subset of series with their stacked bands.
///
/// Owns copies of the selected datums so charts sharing series never see each
/// other's stacking.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    data: Vec<Vec<StackedDatum>>,
    serieses: Vec<SeriesInfo>,
    indices: Vec<String>,
}

impl ChartData {
    /// Project `page` onto `series_indices`, kept in the given order.
    ///
    /// Duplicates keep their first position; indices the page does not have
    /// are skipped.
    pub fn project(page: &PageData, series_indices: &[usize]) -> Self {
        let mut picked: Vec<usize> = Vec::with_capacity(series_indices.len());
        for &idx in series_indices {
            if picked.contains(&idx) {
                continue;
            }
            if idx >= page.series_count() {
                log::warn!("ignoring series {idx}: page has {} series", page.series_count());
                continue;
            }
            picked.push(idx);
        }

        let serieses = picked.iter().map(|&i| page.serieses[i].clone()).collect();
        let data = picked
            .iter()
            .enumerate()
            .map(|(pos, &i)| page.data[i].iter().map(|d| StackedDatum::unstacked(d, pos)).collect())
            .collect();

        let mut view = Self { data, serieses, indices: page.indices.clone() };
        view.stack();
        log::debug!("projected {} series over {} indices", view.series_count(), view.index_count());
        view
    }

    /// Recompute `y_series`, `y0` and `y1` for every datum from `y` alone.
    ///
    /// Per index, negative values accumulate downward from zero and the rest
    /// upward, each against its own running total.
    pub fn stack(&mut self) {
        for i in 0..self.index_count() {
            let mut neg = 0.0f64;
            let mut pos = 0.0f64;
            for (j, series) in self.data.iter_mut().enumerate() {
                let Some(d) = series.get_mut(i) else { continue };
                d.y_series = j;
                if d.y < 0.0 {
                    neg += d.y;
                    d.y0 = neg;
                    d.y1 = d.y0 - d.y;
                } else {
                    d.y0 = pos;
                    d.y1 = d.y0 + d.y;
                    pos += d.y;
                }
            }
        }
    }

    pub fn serieses(&self) -> &[SeriesInfo] {
        &self.serieses
    }

    pub fn series(&self, pos: usize) -> Option<&SeriesInfo> {
        self.serieses.get(pos)
    }

    pub fn series_by_index(&self, series_index: usize) -> Option<&SeriesInfo> {
        self.serieses.iter().find(|s| s.series_index == series_index)
    }

    /// Chart position of the page series `series_index`.
    pub fn series_position_by_index(&self, series_index: usize) -> Option<usize> {
        self.serieses.iter().position(|s| s.series_index == series_index)
    }

    pub fn datum(&self, pos: usize, index: usize) -> Option<&StackedDatum> {
        self.data.get(pos).and_then(|s| s.get(index))
    }

    /// Every datum, series by series.
    pub fn flattened(&self) -> impl Iterator<Item = &StackedDatum> {
        self.data.iter().flatten()
    }

    pub fn series_labels(&self) -> Vec<&str> {
        self.serieses.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn series_indices(&self) -> Vec<usize> {
        self.serieses.iter().map(|s| s.series_index).collect()
    }

    pub fn series_count(&self) -> usize {
        self.serieses.len()
    }

    pub fn indices(&self) -> &[String] {
        &self.indices
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// First and last index labels.
    pub fn index_extent(&self) -> Option<(&str, &str)> {
        Some((self.indices.first()?.as_str(), self.indices.last()?.as_str()))
    }

    pub fn unstacked_values_at_index(&self, index: usize) -> Vec<f64> {
        self.data.iter().filter_map(|s| s.get(index)).map(|d| d.y).collect()
    }

    /// `(first, last)` index with a non-blank raw value for the series at `pos`.
    pub fn series_extent(&self, pos: usize) -> (usize, usize) {
        match self.data.get(pos) {
            Some(series) => {
                let raws: Vec<&str> = series.iter().map(|d| d.y_raw.as_str()).collect();
                trimmed_extent(&raws)
            }
            None => (0, 0),
        }
    }

    /// Whether `index` falls inside the series' trimmed extent.
    pub fn is_within_extent(&self, pos: usize, index: usize) -> bool {
        let (first, last) = self.series_extent(pos);
        index >= first && index <= last
    }

    /// Datums between the first and last non-blank value, inclusive.
    pub fn values_for_series(&self, pos: usize) -> &[StackedDatum] {
        let Some(series) = self.data.get(pos) else { return &[] };
        let (first, last) = self.series_extent(pos);
        if first > last || last >= series.len() {
            return &[];
        }
        &series[first..=last]
    }

    pub fn first_datum(&self, pos: usize) -> Option<&StackedDatum> {
        let (first, _) = self.series_extent(pos);
        self.datum(pos, first)
    }

    pub fn last_datum(&self, pos: usize) -> Option<&StackedDatum> {
        let (_, last) = self.series_extent(pos);
        self.datum(pos, last)
    }

    /// Min/max of the stacked footprint; `None` without data.
    pub fn stacked_extent(&self) -> Option<(f64, f64)> {
        extent(self.flattened().map(StackedDatum::stacked_edge))
    }

    /// Min/max of raw values; `None` without data.
    pub fn unstacked_extent(&self) -> Option<(f64, f64)> {
        extent(self.flattened().map(|d| d.y))
    }

    /// `(negative total, non-negative total)` at one index.
    pub fn stacked_extent_for_index(&self, index: usize) -> (f64, f64) {
        let mut ext = (0.0, 0.0);
        for d in self.data.iter().filter_map(|s| s.get(index)) {
            if d.y < 0.0 {
                ext.0 += d.y;
            } else {
                ext.1 += d.y;
            }
        }
        ext
    }

    /// Sum of every series at one index.
    pub fn total_at_index(&self, index: usize) -> f64 {
        let (neg, pos) = self.stacked_extent_for_index(index);
        neg + pos
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
