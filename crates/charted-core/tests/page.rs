// File: crates/charted-core/tests/page.rs
// Purpose: Page orchestration: series assignment, titles, layout, colors and readouts.

use charted_core::theme::{PALETTE, TEXT_DARK, TEXT_LIGHT};
use charted_core::{
    chart_dimensions, ChartDimensions, ChartError, ChartOptions, ChartParameters, ChartType, Focus, GridMode, Page,
    PageData, Selection, WindowSize,
};
use serde_json::json;

const URL: &str = "http://charted.co/data.csv";

fn data() -> PageData {
    PageData::from_text(URL, "month,a,b,c\n2013-07,10,-5,1\n2013-08,20,3,2\n").unwrap()
}

fn page() -> Page {
    Page::new(ChartParameters::new(URL), data())
}

#[test]
fn first_chart_takes_every_series() {
    let page = page();
    assert_eq!(page.chart_count(), 1);
    assert_eq!(page.first_chart_series(), vec![0, 1, 2]);
    assert_eq!(page.params.charts[0].title.as_deref(), Some("Chart"));
    assert_eq!(page.default_title(0), "Chart");
    assert_eq!(serde_json::to_value(page.compress()).unwrap(), json!({"dataUrl": URL}));
}

#[test]
fn single_series_page_is_titled_after_it() {
    let data = PageData::from_text(URL, "month,revenue\n2013-07,10\n").unwrap();
    let page = Page::new(ChartParameters::new(URL), data);
    assert_eq!(page.params.charts[0].title.as_deref(), Some("revenue"));
}

#[test]
fn stored_title_is_kept() {
    let params = ChartParameters::from_json(r#"{"dataUrl":"x.csv","charts":[{"title":"Sales"}]}"#).unwrap();
    let page = Page::new(params, data());
    assert_eq!(page.full_params(0).unwrap().title, "Sales");
}

#[test]
fn moving_series_creates_and_removes_charts() {
    let mut page = page();

    page.move_series(2, 0, 1).unwrap();
    assert_eq!(page.chart_count(), 2);
    assert_eq!(page.chart_series(0), vec![0, 1]);
    assert_eq!(page.chart_series(1), vec![2]);
    assert_eq!(page.params.charts[0].title, None);
    assert_eq!(page.default_title(0), "Chart");
    assert_eq!(page.default_title(1), "c");
    assert_eq!(
        serde_json::to_value(page.compress()).unwrap(),
        json!({"dataUrl": URL, "charts": [{}, {"series": [2]}]})
    );

    page.move_series(1, 0, 1).unwrap();
    assert_eq!(page.chart_series(1), vec![1, 2]);
    assert_eq!(page.default_title(0), "a");
    assert_eq!(page.default_title(1), "Chart 2");
    assert_eq!(page.params.resolved_title(1), "Chart 2");

    page.move_series(2, 1, 0).unwrap();
    assert_eq!(page.chart_series(0), vec![0, 2]);
    assert_eq!(page.chart_series(1), vec![1]);

    page.move_series(1, 1, 0).unwrap();
    assert_eq!(page.chart_count(), 1);
    assert_eq!(page.first_chart_series(), vec![0, 1, 2]);
}

#[test]
fn moving_keeps_custom_titles() {
    let mut page = page();
    page.params.charts[0].title = Some("Mine".into());
    page.move_series(0, 0, 1).unwrap();
    assert_eq!(page.full_params(0).unwrap().title, "Mine");
    assert_eq!(page.full_params(1).unwrap().title, "a");
}

#[test]
fn moving_from_unknown_chart_fails() {
    let mut page = page();
    assert!(matches!(page.move_series(0, 3, 0), Err(ChartError::UnknownChart(3))));
}

#[test]
fn empty_charts_are_pruned() {
    let mut params = ChartParameters::new(URL);
    params.charts = vec![ChartOptions::default(), ChartOptions::with_series(vec![0, 1, 2])];
    let mut page = Page::new(params, data());

    assert!(matches!(page.chart_data(0), Err(ChartError::EmptySeriesSelection { chart: 0 })));
    assert_eq!(page.prune_empty_charts(), vec![0]);
    assert_eq!(page.chart_count(), 1);
    assert_eq!(page.chart_data(0).unwrap().series_count(), 3);
}

#[test]
fn pruning_keeps_populated_charts() {
    let mut page = page();
    page.move_series(0, 0, 1).unwrap();
    assert!(page.prune_empty_charts().is_empty());
    assert_eq!(page.chart_count(), 2);
}

#[test]
fn unknown_chart_is_an_error() {
    let page = page();
    assert!(matches!(page.full_params(4), Err(ChartError::UnknownChart(4))));
    assert_eq!(page.default_title(4), "Charted");
}

#[test]
fn series_colors_follow_position_and_overrides() {
    let mut page = page();
    assert_eq!(page.series_color(0, 1), PALETTE[1]);

    page.move_series(2, 0, 1).unwrap();
    assert_eq!(page.series_color(1, 2), TEXT_LIGHT);
    page.params.toggle_color();
    assert_eq!(page.series_color(1, 2), TEXT_DARK);

    let default = page.default_series_color(0, 1);
    page.params.recolor_series(1, "fff", &default);
    assert_eq!(page.series_color(0, 1), "#fff");
}

#[test]
fn renamed_series_names_single_series_charts() {
    let mut page = page();
    page.move_series(2, 0, 1).unwrap();
    page.params.rename_series(2, "Costs", "c");
    assert_eq!(page.series_name(2), "Costs");
    assert_eq!(page.default_title(1), "Costs");
}

#[test]
fn renaming_after_move_keeps_custom_title() {
    let mut page = page();
    page.move_series(2, 0, 1).unwrap();
    page.params.charts[1].title = Some("c".into());
    page.params.rename_series(2, "Costs", "c");

    assert_eq!(page.default_title(1), "Costs");
    assert_eq!(page.params.resolved_title(1), "c");
    assert_eq!(page.params.compress(), page.compress());
    assert_eq!(
        serde_json::to_value(page.params.compress()).unwrap()["charts"][1],
        json!({"title": "c", "series": [2]})
    );

    let back = Page::new(ChartParameters::expand(page.params.compress()), data());
    assert_eq!(back.params.resolved_title(1), "c");
    assert_eq!(back.params, page.params);
}

#[test]
fn page_title_joins_chart_titles() {
    let mut page = page();
    assert_eq!(page.page_title(), "Chart of a, b, c");

    page.move_series(2, 0, 1).unwrap();
    assert_eq!(page.page_title(), "Chart, c");

    page.params.charts[0].title = Some("Revenue".into());
    assert_eq!(page.page_title(), "Revenue, c");
}

#[test]
fn layout_by_chart_count_and_grid() {
    let window = WindowSize::new(1400.0, 900.0);
    let dims = |count, grid| chart_dimensions(count, window, grid);

    assert_eq!(
        dims(1, GridMode::Split),
        ChartDimensions { width: 1400.0, height: Some(900.0), is_half_height: false, is_grid: false }
    );
    assert_eq!(
        dims(2, GridMode::Split),
        ChartDimensions { width: 700.0, height: Some(900.0), is_half_height: false, is_grid: true }
    );
    assert_eq!(
        dims(2, GridMode::Full),
        ChartDimensions { width: 1400.0, height: Some(450.0), is_half_height: true, is_grid: false }
    );

    let three = dims(3, GridMode::Split);
    assert_eq!(three, ChartDimensions { width: 700.0, height: Some(450.0), is_half_height: true, is_grid: true });
    assert!(three.is_bottom_row(2, 3));
    assert!(!three.is_bottom_row(1, 3));
    assert!(!dims(3, GridMode::Full).is_bottom_row(2, 3));
}

#[test]
fn narrow_window_sizes_to_content() {
    assert_eq!(
        chart_dimensions(3, WindowSize::new(600.0, 900.0), GridMode::Split),
        ChartDimensions { width: 600.0, height: None, is_half_height: false, is_grid: false }
    );
    // wide enough for full height but not for two per row
    assert_eq!(
        chart_dimensions(2, WindowSize::new(1000.0, 500.0), GridMode::Split),
        ChartDimensions { width: 1000.0, height: Some(500.0), is_half_height: false, is_grid: false }
    );
}

#[test]
fn page_layout_follows_grid_toggle() {
    let mut page = page();
    let window = WindowSize::new(1400.0, 900.0);
    assert!(!page.dimensions(window).is_grid);

    page.move_series(2, 0, 1).unwrap();
    assert_eq!(page.dimensions(window).width, 700.0);

    page.params.toggle_grid();
    let dims = page.dimensions(window);
    assert_eq!((dims.width, dims.height), (1400.0, Some(450.0)));
    assert!(dims.is_half_height);
}

#[test]
fn other_charts_lists_titles() {
    let mut page = page();
    page.move_series(2, 0, 1).unwrap();
    assert_eq!(page.other_charts(1), vec![(0, "Chart".to_string())]);
    assert_eq!(page.other_charts(0), vec![(1, "c".to_string())]);
}

#[test]
fn toggles_flip_chart_settings() {
    let mut page = page();
    assert_eq!(page.toggle_type(0).unwrap(), ChartType::Line);
    assert_eq!(page.full_params(0).unwrap().chart_type, ChartType::Line);
    assert!(page.toggle_rounding(1).is_err());
}

#[test]
fn readout_for_total_and_series() {
    let mut page = page();
    let view = page.chart_data(0).unwrap();

    // stacked range (-5, 25) rounds at the tens order
    let mut sel = Selection::initial(&view, ChartType::Column).unwrap();
    let readout = page.selection_readout(0, &view, &sel).unwrap();
    assert_eq!(readout.x_label, "2013-08");
    assert_eq!(readout.y_label, "total");
    assert_eq!(readout.value, "25.0");
    assert_eq!(readout.color, TEXT_LIGHT);

    sel.focus = Focus::Series(0);
    let readout = page.selection_readout(0, &view, &sel).unwrap();
    assert_eq!(readout.y_label, "a");
    assert_eq!(readout.value, "20.0");
    assert_eq!(readout.color, PALETTE[0]);

    page.toggle_rounding(0).unwrap();
    let readout = page.selection_readout(0, &view, &sel).unwrap();
    assert_eq!(readout.value, "20");
}

#[test]
fn single_series_readout_has_no_label() {
    let mut page = page();
    page.move_series(1, 0, 1).unwrap();
    let view = page.chart_data(1).unwrap();
    let sel = Selection { index: 0, focus: Focus::Series(0) };
    let readout = page.selection_readout(1, &view, &sel).unwrap();
    assert_eq!(readout.y_label, "");
    assert_eq!(readout.value, "-5.00");
    assert_eq!(readout.color, TEXT_LIGHT);
}
