// File: crates/charted-core/src/lib.rs
// Summary: Core library entry point; exports the chart data pipeline, hit testing and parameters.

pub mod error;
pub mod format;
pub mod axis;
pub mod series;
pub mod data;
pub mod view;
pub mod types;
pub mod scale;
pub mod selection;
pub mod params;
pub mod theme;
pub mod layout;
pub mod page;

pub use error::{ChartError, Result};
pub use format::{round_to_decimal_order, rounded_value, string_to_number, trimmed_extent};
pub use axis::{nice_intervals, Tick, TickOptions};
pub use series::{Datum, SeriesInfo, StackedDatum};
pub use data::{Delimiter, PageData};
pub use view::ChartData;
pub use types::{Insets, PlotGeometry, Pointer};
pub use scale::{IndexScale, ValueScale};
pub use selection::{resolve_closest_point, ClosestPoint, Focus, Selection, SelectionReadout};
pub use params::{ChartOptions, ChartParameters, ChartType, ColorMode, CompressedChart, CompressedParams, GridMode, Rounding};
pub use layout::{chart_dimensions, ChartDimensions, WindowSize};
pub use page::{ChartConfig, Page};
