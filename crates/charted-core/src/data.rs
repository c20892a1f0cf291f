// File: crates/charted-core/src/data.rs
// Summary: Page data loader: raw CSV/TSV rows into an index axis plus numeric series.

use crate::error::{ChartError, Result};
use crate::series::{Datum, SeriesInfo};

/// Field separator of the source table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Choose by file extension of `url`, ignoring any query string.
    pub fn from_url(url: &str) -> Self {
        if file_extension(url) == "tsv" { Delimiter::Tab } else { Delimiter::Comma }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

/// Lowercased text after the last `.` of `url` with `?query` removed.
pub fn file_extension(url: &str) -> String {
    let path = url.split('?').next().unwrap_or(url);
    path.rsplit('.').next().unwrap_or("").to_lowercase()
}

/// Split delimited text into rows of cells. Rows may have differing lengths.
pub fn parse_rows(text: &str, delimiter: Delimiter) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// All series of one fetched table, sharing a single index axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageData {
    pub indices: Vec<String>,
    pub serieses: Vec<SeriesInfo>,
    /// `data[series_index][row]`.
    pub data: Vec<Vec<Datum>>,
}

impl PageData {
    /// Parse `text` as CSV or TSV depending on `url`'s extension.
    pub fn from_text(url: &str, text: &str) -> Result<Self> {
        let rows = parse_rows(text, Delimiter::from_url(url))?;
        Self::load(rows)
    }

    /// Build page data from rows whose first entry is the header.
    ///
    /// With more than one column the first column labels the index axis;
    /// a single column gets synthesized `Row N` labels.
    pub fn load(mut rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ChartError::MalformedInput("table has no header row".into()));
        }
        let mut header = rows.remove(0);
        if header.is_empty() {
            return Err(ChartError::MalformedInput("header row has no columns".into()));
        }

        let has_index_column = header.len() != 1;
        let indices: Vec<String> = if has_index_column {
            header.remove(0);
            rows.iter().map(|row| row.first().cloned().unwrap_or_default()).collect()
        } else {
            (1..=rows.len()).map(|i| format!("Row {i}")).collect()
        };
        let offset = usize::from(has_index_column);

        let serieses: Vec<SeriesInfo> = header
            .into_iter()
            .enumerate()
            .map(|(series_index, label)| SeriesInfo { label, series_index })
            .collect();

        let data = serieses
            .iter()
            .map(|series| {
                let column = series.series_index + offset;
                rows.iter()
                    .enumerate()
                    .map(|(x, row)| {
                        let raw = row.get(column).map(String::as_str).unwrap_or("");
                        Datum::new(x, indices[x].as_str(), raw)
                    })
                    .collect()
            })
            .collect();

        log::debug!("loaded {} rows x {} series", indices.len(), serieses.len());
        Ok(Self { indices, serieses, data })
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn series_count(&self) -> usize {
        self.serieses.len()
    }

    pub fn series(&self, series_index: usize) -> Option<&SeriesInfo> {
        self.serieses.get(series_index)
    }
}
