// File: crates/charted-core/src/page.rs
// Summary: Page-level orchestration: series assignment across charts, default titles and colors.

use std::sync::Arc;

use crate::data::PageData;
use crate::error::{ChartError, Result};
use crate::format::string_to_number;
use crate::layout::{chart_dimensions, ChartDimensions, WindowSize};
use crate::params::{ChartOptions, ChartParameters, ChartType, CompressedParams, Rounding};
use crate::scale::y_range;
use crate::selection::{format_value, Selection, SelectionReadout};
use crate::series::SeriesInfo;
use crate::theme::{default_series_color, text_color};
use crate::view::ChartData;

/// Title used when no better default exists.
pub const FALLBACK_TITLE: &str = "Charted";

/// Chart settings with every default filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub rounding: Rounding,
    pub title: String,
    pub note: Option<String>,
    pub series: Vec<usize>,
}

/// Loaded data plus the parameters describing how it is split into charts.
#[derive(Clone, Debug)]
pub struct Page {
    pub params: ChartParameters,
    pub data: PageData,
}

impl Page {
    pub fn new(mut params: ChartParameters, data: PageData) -> Self {
        if params.charts.is_empty() {
            params.charts.push(ChartOptions::default());
        }
        if params.charts[0].explicit_title().is_none() {
            let title = if data.series_count() > 1 {
                "Chart".to_string()
            } else {
                data.serieses.first().map_or_else(|| FALLBACK_TITLE.to_string(), |s| s.label.clone())
            };
            params.charts[0].title = Some(title);
        }
        let serieses = data.serieses.clone();
        params.set_default_title(Arc::new(move |p: &ChartParameters, chart: usize| default_title_in(p, &serieses, chart)));
        Self { params, data }
    }

    pub fn chart_count(&self) -> usize {
        self.params.charts.len()
    }

    /// Series of chart 0: every page series no later chart claims.
    pub fn first_chart_series(&self) -> Vec<usize> {
        chart_series_in(&self.params, self.data.series_count(), 0)
    }

    /// Series shown by chart `chart`.
    pub fn chart_series(&self, chart: usize) -> Vec<usize> {
        chart_series_in(&self.params, self.data.series_count(), chart)
    }

    /// Display name of a page series: the user's override or the column header.
    pub fn series_name(&self, series_index: usize) -> String {
        series_name_in(&self.params, &self.data.serieses, series_index)
    }

    /// Title chart `chart` shows when the user has not set one.
    pub fn default_title(&self, chart: usize) -> String {
        default_title_in(&self.params, &self.data.serieses, chart)
    }

    /// Document title: every chart's title joined, with the series names
    /// spelled out for a lone chart titled `Chart`.
    pub fn page_title(&self) -> String {
        if self.params.charts.is_empty() {
            return FALLBACK_TITLE.to_string();
        }
        let titles: Vec<String> = (0..self.chart_count()).map(|i| self.params.resolved_title(i)).collect();
        let title = titles.join(", ");
        if title == "Chart" {
            let names: Vec<String> = self.first_chart_series().into_iter().map(|s| self.series_name(s)).collect();
            return format!("{title} of {}", names.join(", "));
        }
        title
    }

    /// Size of every chart wrapper for the current chart count and grid mode.
    pub fn dimensions(&self, window: WindowSize) -> ChartDimensions {
        chart_dimensions(self.chart_count(), window, self.params.grid())
    }

    pub fn full_params(&self, chart: usize) -> Result<ChartConfig> {
        let opts = self.params.charts.get(chart).ok_or(ChartError::UnknownChart(chart))?;
        Ok(ChartConfig {
            chart_type: opts.chart_type,
            rounding: opts.rounding,
            title: opts.explicit_title().map_or_else(|| self.default_title(chart), str::to_string),
            note: opts.explicit_note().map(str::to_string),
            series: self.chart_series(chart),
        })
    }

    /// Project the page onto chart `chart`'s series.
    pub fn chart_data(&self, chart: usize) -> Result<ChartData> {
        let config = self.full_params(chart)?;
        if config.series.is_empty() {
            return Err(ChartError::EmptySeriesSelection { chart });
        }
        Ok(ChartData::project(&self.data, &config.series))
    }

    /// Drop charts left without series. Returns the removed positions, in
    /// terms of the layout before removal.
    pub fn prune_empty_charts(&mut self) -> Vec<usize> {
        let mut removed = Vec::new();
        let mut i = 0;
        let mut original = 0;
        while i < self.chart_count() && self.chart_count() > 1 {
            if self.chart_series(i).is_empty() {
                self.params.charts.remove(i);
                removed.push(original);
            } else {
                i += 1;
            }
            original += 1;
        }
        if !removed.is_empty() {
            log::debug!("removed empty charts {removed:?}");
        }
        removed
    }

    /// Move page series `series` from chart `from` to chart `to`.
    ///
    /// A `to` past the last chart creates a new chart. Titles that merely
    /// matched their default are cleared first so they follow the new layout.
    pub fn move_series(&mut self, series: usize, from: usize, to: usize) -> Result<()> {
        if from >= self.chart_count() {
            return Err(ChartError::UnknownChart(from));
        }

        let defaults: Vec<String> = (0..self.chart_count()).map(|i| self.default_title(i)).collect();
        for (chart, default) in self.params.charts.iter_mut().zip(&defaults) {
            if chart.explicit_title() == Some(default.as_str()) {
                chart.title = None;
            }
        }

        if to >= self.chart_count() {
            self.params.charts.push(ChartOptions::with_series(vec![series]));
        } else if to > 0 {
            let target = &mut self.params.charts[to].series;
            if !target.contains(&series) {
                target.push(series);
            }
            target.sort_unstable();
        }

        if from > 0 {
            self.params.charts[from].series.retain(|&s| s != series);
        }
        log::info!("moved series {series} from chart {from} to chart {to}");

        self.prune_empty_charts();
        Ok(())
    }

    /// `(position, title)` of every chart except `chart`.
    pub fn other_charts(&self, chart: usize) -> Vec<(usize, String)> {
        (0..self.chart_count())
            .filter(|&i| i != chart)
            .map(|i| (i, self.params.resolved_title(i)))
            .collect()
    }

    pub fn toggle_type(&mut self, chart: usize) -> Result<ChartType> {
        let opts = self.params.charts.get_mut(chart).ok_or(ChartError::UnknownChart(chart))?;
        opts.chart_type = opts.chart_type.toggle();
        Ok(opts.chart_type)
    }

    pub fn toggle_rounding(&mut self, chart: usize) -> Result<Rounding> {
        let opts = self.params.charts.get_mut(chart).ok_or(ChartError::UnknownChart(chart))?;
        opts.rounding = opts.rounding.toggle();
        Ok(opts.rounding)
    }

    /// Color of page series `series_index` in chart `chart`: override or palette.
    pub fn series_color(&self, chart: usize, series_index: usize) -> String {
        if let Some(c) = self.params.series_color(series_index) {
            return c.to_string();
        }
        self.default_series_color(chart, series_index)
    }

    pub fn default_series_color(&self, chart: usize, series_index: usize) -> String {
        default_series_color(&self.chart_series(chart), series_index, self.params.color())
            .unwrap_or_else(|| text_color(self.params.color()))
            .to_string()
    }

    /// Minimal persisted parameters for the current layout.
    pub fn compress(&self) -> CompressedParams {
        self.params.compress()
    }

    /// Readout for `selection` on chart `chart`, whose projection is `data`.
    pub fn selection_readout(&self, chart: usize, data: &ChartData, selection: &Selection) -> Result<SelectionReadout> {
        let config = self.full_params(chart)?;
        let count = data.series_count();
        let focused = selection.focus.series().filter(|&pos| pos < count);
        let show_total = focused.is_none();
        let pos = match focused {
            Some(pos) => pos,
            None => count.checked_sub(1).ok_or(ChartError::EmptySeriesSelection { chart })?,
        };
        let datum = data.datum(pos, selection.index).ok_or(ChartError::EmptySeriesSelection { chart })?;
        let series_index = data.series(pos).map(|s| s.series_index).unwrap_or_default();

        let y_label = if count > 1 {
            if show_total { "total".to_string() } else { self.series_name(series_index) }
        } else {
            String::new()
        };
        let color = if show_total {
            text_color(self.params.color()).to_string()
        } else {
            self.series_color(chart, series_index)
        };
        let value = if show_total {
            data.total_at_index(selection.index)
        } else {
            string_to_number(&datum.y_raw)
        };

        Ok(SelectionReadout {
            x_label: datum.x_label.clone(),
            y_label,
            value: format_value(value, config.rounding, y_range(data, config.chart_type)),
            color,
        })
    }
}

fn chart_series_in(params: &ChartParameters, series_count: usize, chart: usize) -> Vec<usize> {
    if chart == 0 {
        let claimed: Vec<usize> = params.charts.iter().skip(1).flat_map(|c| c.series.iter().copied()).collect();
        return (0..series_count).filter(|i| !claimed.contains(i)).collect();
    }
    params.charts.get(chart).map(|c| c.series.clone()).unwrap_or_default()
}

fn series_name_in(params: &ChartParameters, serieses: &[SeriesInfo], series_index: usize) -> String {
    match params.series_name(series_index) {
        Some(name) => name.to_string(),
        None => serieses.get(series_index).map(|s| s.label.clone()).unwrap_or_default(),
    }
}

/// Default title of chart `chart`, computed from the current assignment of
/// series and their current names.
fn default_title_in(params: &ChartParameters, serieses: &[SeriesInfo], chart: usize) -> String {
    if chart >= params.charts.len() {
        return FALLBACK_TITLE.to_string();
    }
    let series = chart_series_in(params, serieses.len(), chart);
    if series.len() == 1 {
        return series_name_in(params, serieses, series[0]);
    }
    if chart == 0 {
        return "Chart".to_string();
    }
    let earlier = (0..chart).filter(|&i| !chart_series_in(params, serieses.len(), i).is_empty()).count();
    format!("Chart {}", 1 + earlier)
}
