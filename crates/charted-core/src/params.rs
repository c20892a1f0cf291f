// File: crates/charted-core/src/params.rs
// Summary: Page and per-chart parameters with minimal (compressed) JSON persistence.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Column,
    Line,
}

impl ChartType {
    pub fn toggle(self) -> Self {
        match self {
            ChartType::Column => ChartType::Line,
            ChartType::Line => ChartType::Column,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    #[default]
    On,
    Off,
}

impl Rounding {
    pub fn toggle(self) -> Self {
        match self {
            Rounding::On => Rounding::Off,
            Rounding::Off => Rounding::On,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    Full,
    #[default]
    Split,
}

/// Settings of a single chart on the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartOptions {
    pub chart_type: ChartType,
    pub rounding: Rounding,
    pub title: Option<String>,
    pub note: Option<String>,
    /// Page series shown in this chart. Ignored for chart 0, whose series are
    /// whatever no other chart claims.
    pub series: Vec<usize>,
}

impl ChartOptions {
    pub fn with_series(series: Vec<usize>) -> Self {
        Self { series, ..Self::default() }
    }

    /// Title if one is set and non-empty.
    pub fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn explicit_note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

/// Strategy computing the title chart `i` gets when none was chosen. It sees
/// the parameters as they are at call time.
pub type DefaultTitleFn = Arc<dyn Fn(&ChartParameters, usize) -> String + Send + Sync>;

/// Persisted form of one chart: every field equal to its default is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedChart {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<Rounding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<usize>>,
}

impl CompressedChart {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Persisted form of the page parameters (URL and stored JSON).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedParams {
    #[serde(alias = "csvUrl", default)]
    pub data_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_names: Option<BTreeMap<usize, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_colors: Option<BTreeMap<usize, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charts: Option<Vec<CompressedChart>>,
}

impl CompressedParams {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse stored parameters. Older links wrap the object in an array;
    /// the first element is used and an empty array reads as defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<StoredParams>(json)? {
            StoredParams::Object(params) => Ok(params),
            StoredParams::Wrapped(list) => Ok(list.into_iter().next().unwrap_or_default()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredParams {
    Object(CompressedParams),
    Wrapped(Vec<CompressedParams>),
}

/// All user-controlled settings of a page of charts.
#[derive(Clone)]
pub struct ChartParameters {
    pub url: String,
    pub charts: Vec<ChartOptions>,
    pub series_names: BTreeMap<usize, String>,
    pub series_colors: BTreeMap<usize, String>,
    color: ColorMode,
    grid: GridMode,
    default_title: DefaultTitleFn,
}

impl ChartParameters {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            charts: vec![ChartOptions::default()],
            series_names: BTreeMap::new(),
            series_colors: BTreeMap::new(),
            color: ColorMode::default(),
            grid: GridMode::default(),
            default_title: Arc::new(|_: &ChartParameters, _: usize| String::new()),
        }
    }

    /// Rebuild parameters from their persisted form. Missing fields take defaults.
    pub fn expand(c: CompressedParams) -> Self {
        let mut params = Self::new(c.data_url);
        if let Some(charts) = c.charts.filter(|charts| !charts.is_empty()) {
            params.charts = charts
                .into_iter()
                .map(|ch| ChartOptions {
                    chart_type: ch.chart_type.unwrap_or_default(),
                    rounding: ch.rounding.unwrap_or_default(),
                    title: ch.title,
                    note: ch.note,
                    series: ch.series.unwrap_or_default(),
                })
                .collect();
        }
        params.series_names = c.series_names.unwrap_or_default();
        params.series_colors = c.series_colors.unwrap_or_default();
        params.color = c.color.unwrap_or_default();
        params.grid = c.grid.unwrap_or_default();
        params
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::expand(CompressedParams::from_json(json)?))
    }

    /// Parameters carried in a legacy query string: `?<url-encoded JSON>`
    /// (or `?data=<url-encoded JSON>`).
    ///
    /// `Ok(None)` when the query has no JSON payload or the payload names no
    /// data URL.
    pub fn from_query_string(qs: &str) -> Result<Option<Self>> {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let mut payload: Option<String> = None;
        for piece in qs.split('&').filter(|p| !p.is_empty()) {
            let mut pairs = url::form_urlencoded::parse(piece.as_bytes());
            let Some((key, value)) = pairs.next() else { continue };
            if !piece.contains('=') {
                payload = Some(key.into_owned());
            } else if key == "data" {
                payload = Some(value.into_owned());
            } else {
                log::warn!("ignoring query parameter {key}");
            }
        }
        let Some(json) = payload else { return Ok(None) };
        let compressed = CompressedParams::from_json(&json)?;
        if compressed.data_url.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::expand(compressed)))
    }

    /// Install the strategy used for default chart titles.
    pub fn with_default_title(mut self, f: DefaultTitleFn) -> Self {
        self.default_title = f;
        self
    }

    pub fn set_default_title(&mut self, f: DefaultTitleFn) {
        self.default_title = f;
    }

    pub fn default_title(&self, chart: usize) -> String {
        (self.default_title)(self, chart)
    }

    /// The title chart `chart` displays: its own, or the default.
    pub fn resolved_title(&self, chart: usize) -> String {
        self.charts
            .get(chart)
            .and_then(|c| c.explicit_title())
            .map(str::to_string)
            .unwrap_or_else(|| self.default_title(chart))
    }

    pub fn color(&self) -> ColorMode {
        self.color
    }

    pub fn grid(&self) -> GridMode {
        self.grid
    }

    pub fn is_light(&self) -> bool {
        self.color == ColorMode::Light
    }

    pub fn toggle_color(&mut self) {
        self.color = if self.is_light() { ColorMode::Dark } else { ColorMode::Light };
    }

    pub fn is_full(&self) -> bool {
        self.grid == GridMode::Full
    }

    pub fn toggle_grid(&mut self) {
        self.grid = if self.is_full() { GridMode::Split } else { GridMode::Full };
    }

    pub fn series_color(&self, series_index: usize) -> Option<&str> {
        self.series_colors.get(&series_index).map(String::as_str)
    }

    pub fn series_name(&self, series_index: usize) -> Option<&str> {
        self.series_names.get(&series_index).map(String::as_str)
    }

    /// Rename a series; an empty name or the source label clears the override.
    pub fn rename_series(&mut self, series_index: usize, name: &str, source_label: &str) {
        if name.is_empty() || name == source_label {
            self.series_names.remove(&series_index);
        } else {
            self.series_names.insert(series_index, name.to_string());
        }
    }

    /// Recolor a series; invalid hex or the default color clears the override.
    pub fn recolor_series(&mut self, series_index: usize, input: &str, default_hex: &str) {
        let hex = format!("#{}", input.trim().trim_start_matches('#'));
        if hex == default_hex || !crate::theme::is_valid_hex(&hex) {
            self.series_colors.remove(&series_index);
        } else {
            self.series_colors.insert(series_index, hex);
        }
    }

    /// Minimal persisted form, using the installed default-title strategy.
    pub fn compress(&self) -> CompressedParams {
        self.compress_with(|i| self.default_title(i))
    }

    /// Minimal persisted form with an explicit default-title function.
    pub fn compress_with(&self, default_title: impl Fn(usize) -> String) -> CompressedParams {
        let charts: Vec<CompressedChart> = self
            .charts
            .iter()
            .enumerate()
            .map(|(i, chart)| CompressedChart {
                chart_type: Some(chart.chart_type).filter(|t| *t != ChartType::default()),
                rounding: Some(chart.rounding).filter(|r| *r != Rounding::default()),
                title: chart
                    .explicit_title()
                    .filter(|t| *t != default_title(i))
                    .map(str::to_string),
                note: chart.explicit_note().map(str::to_string),
                series: (i > 0 && !chart.series.is_empty()).then(|| chart.series.clone()),
            })
            .collect();

        let single_empty = charts.len() == 1 && charts[0].is_empty();
        CompressedParams {
            data_url: self.url.clone(),
            series_names: Some(self.series_names.clone()).filter(|m| !m.is_empty()),
            series_colors: Some(self.series_colors.clone()).filter(|m| !m.is_empty()),
            color: Some(self.color).filter(|c| *c != ColorMode::default()),
            grid: Some(self.grid).filter(|g| *g != GridMode::default()),
            charts: if single_empty { None } else { Some(charts) },
        }
    }
}

/// Equality of externally observable state.
///
/// Titles compare as displayed (default applied), notes treat empty as absent,
/// and chart 0's stored series are ignored since they are always derived.
impl PartialEq for ChartParameters {
    fn eq(&self, other: &Self) -> bool {
        if self.url != other.url
            || self.series_names != other.series_names
            || self.series_colors != other.series_colors
            || self.color != other.color
            || self.grid != other.grid
            || self.charts.len() != other.charts.len()
        {
            return false;
        }
        self.charts.iter().zip(&other.charts).enumerate().all(|(i, (a, b))| {
            a.chart_type == b.chart_type
                && a.rounding == b.rounding
                && self.resolved_title(i) == other.resolved_title(i)
                && a.explicit_note() == b.explicit_note()
                && (i == 0 || a.series == b.series)
        })
    }
}

impl fmt::Debug for ChartParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartParameters")
            .field("url", &self.url)
            .field("charts", &self.charts)
            .field("series_names", &self.series_names)
            .field("series_colors", &self.series_colors)
            .field("color", &self.color)
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}
