// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV/TSV table, splits it into charts and prints titles, ticks, readouts and persisted params.

use anyhow::{Context, Result};
use charted_core::axis::axis_labels;
use charted_core::scale::y_range;
use charted_core::{nice_intervals, ChartParameters, Page, PageData, PlotGeometry, Selection, WindowSize};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    // Data path from CLI or the bundled sample; params as a JSON file or a `?{...}` query string
    let raw = std::env::args().nth(1).unwrap_or_else(|| "demos/sample.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let url = path.to_string_lossy().to_string();
    let params = match std::env::args().nth(2) {
        Some(arg) => load_params(&arg, &url)?,
        None => ChartParameters::new(url.clone()),
    };

    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let data = PageData::from_text(&url, &text)
        .with_context(|| format!("failed to load table '{}'", path.display()))?;
    println!("Loaded {} rows x {} series", data.index_count(), data.series_count());

    let mut page = Page::new(params, data);
    let pruned = page.prune_empty_charts();
    if !pruned.is_empty() {
        log::warn!("dropped charts without series: {pruned:?}");
    }

    let dims = page.dimensions(WindowSize::new(1440.0, 900.0));
    println!("{}", page.page_title());
    println!(
        "Layout: {}px wide, height {}, grid {}",
        dims.width,
        dims.height.map_or_else(|| "auto".to_string(), |h| format!("{h}px")),
        dims.is_grid
    );

    let geometry = PlotGeometry::new(640.0, 300.0);
    for chart in 0..page.chart_count() {
        let config = page.full_params(chart)?;
        let view = page.chart_data(chart)?;
        let names: Vec<String> = config.series.iter().map(|&s| page.series_name(s)).collect();

        println!();
        println!("[{}] {} ({:?}, rounding {:?})", chart, config.title, config.chart_type, config.rounding);
        if let Some(note) = &config.note {
            println!("  note: {note}");
        }
        println!("  series: {}", names.join(", "));

        let ticks = nice_intervals(y_range(&view, config.chart_type), geometry.height);
        println!("  ticks: {}", axis_labels(&ticks, config.rounding).join(" | "));

        if let Some(selection) = Selection::initial(&view, config.chart_type) {
            let readout = page.selection_readout(chart, &view, &selection)?;
            println!(
                "  {}: {} {} ({})",
                readout.x_label, readout.y_label, readout.value, readout.color
            );
        }
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&page.compress())?);
    Ok(())
}

/// Parameters from a query string (`?{...}`) or a JSON file. The data URL
/// defaults to the input path when the params leave it empty.
fn load_params(arg: &str, url: &str) -> Result<ChartParameters> {
    if arg.starts_with('?') {
        let params = ChartParameters::from_query_string(arg).context("parsing query string")?;
        return Ok(params.unwrap_or_else(|| ChartParameters::new(url)));
    }
    let json = std::fs::read_to_string(arg).with_context(|| format!("reading params {arg}"))?;
    let mut params = ChartParameters::from_json(&json).with_context(|| format!("parsing params {arg}"))?;
    if params.url.is_empty() {
        params.url = url.to_string();
    }
    Ok(params)
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}
