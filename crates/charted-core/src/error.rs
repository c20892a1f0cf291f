// File: crates/charted-core/src/error.rs
// Summary: Error type shared by the loader, chart views and parameter model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The source table has no header row (or an empty one).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A chart resolved to zero series. Callers usually drop the chart.
    #[error("chart {chart} has no series selected")]
    EmptySeriesSelection { chart: usize },

    #[error("chart {0} does not exist")]
    UnknownChart(usize),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
