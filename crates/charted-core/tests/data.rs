// File: crates/charted-core/tests/data.rs
// Purpose: Table loading into page data (index column, series, datums) and delimiter choice.

use charted_core::data::{file_extension, parse_rows};
use charted_core::{ChartError, Delimiter, PageData};

fn rows(table: &[&[&str]]) -> Vec<Vec<String>> {
    table.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
}

fn sample() -> Vec<Vec<String>> {
    rows(&[
        &["month", "example_one", "example_two"],
        &["2013-07", "2023", "5247"],
        &["2013-08", "3343", "2357"],
    ])
}

#[test]
fn loads_series_and_indices() {
    let data = PageData::load(sample()).unwrap();

    assert_eq!(data.serieses[0].label, "example_one");
    assert_eq!(data.serieses[0].series_index, 0);
    assert_eq!(data.serieses[1].label, "example_two");
    assert_eq!(data.serieses[1].series_index, 1);
    assert_eq!(data.indices, vec!["2013-07", "2013-08"]);

    assert_eq!(data.data.len(), 2);
    let d = &data.data[0][1];
    assert_eq!(d.x, 1);
    assert_eq!(d.x_label, "2013-08");
    assert_eq!(d.y, 3343.0);
    assert_eq!(d.y_raw, "3343");
    assert_eq!(data.data[1][0].y, 5247.0);
    assert_eq!(data.data[1][1].y_raw, "2357");
}

#[test]
fn every_series_spans_every_index() {
    let data = PageData::load(sample()).unwrap();
    assert_eq!(data.series_count(), data.data.len());
    for series in &data.data {
        assert_eq!(series.len(), data.index_count());
        for (x, d) in series.iter().enumerate() {
            assert_eq!(d.x, x);
            assert_eq!(d.x_label, data.indices[x]);
        }
    }
}

#[test]
fn single_column_gets_row_labels() {
    let data = PageData::load(rows(&[&["month"], &["2013-07"], &["2013-08"]])).unwrap();
    assert_eq!(data.indices, vec!["Row 1", "Row 2"]);
    assert_eq!(data.serieses[0].label, "month");
    assert_eq!(data.data[0][0].y_raw, "2013-07");
    assert_eq!(data.data[0][0].y, 0.0);
}

#[test]
fn empty_table_is_malformed() {
    assert!(matches!(PageData::load(Vec::new()), Err(ChartError::MalformedInput(_))));
    assert!(matches!(PageData::load(vec![Vec::new()]), Err(ChartError::MalformedInput(_))));
}

#[test]
fn header_only_table_has_no_indices() {
    let data = PageData::load(rows(&[&["month", "a"]])).unwrap();
    assert_eq!(data.index_count(), 0);
    assert_eq!(data.series_count(), 1);
    assert!(data.data[0].is_empty());
}

#[test]
fn ragged_rows_read_missing_cells_as_blank() {
    let data = PageData::load(rows(&[&["i", "a", "b"], &["1", "5"], &["2", "6", "7"]])).unwrap();
    assert_eq!(data.data[1][0].y_raw, "");
    assert_eq!(data.data[1][0].y, 0.0);
    assert_eq!(data.data[1][1].y, 7.0);
}

#[test]
fn formatted_cells_are_coerced() {
    let text = "month,revenue\n2013-07,\"$1,234.50\"\n2013-08,12%\n";
    let data = PageData::from_text("http://example.com/data.csv", text).unwrap();
    assert_eq!(data.data[0][0].y, 1234.5);
    assert_eq!(data.data[0][0].y_raw, "$1,234.50");
    assert_eq!(data.data[0][1].y, 12.0);
}

#[test]
fn tsv_extension_selects_tab() {
    let text = "month\ta\tb\n2013-07\t1,000\t2\n";
    let data = PageData::from_text("http://example.com/export.TSV?dl=1", text).unwrap();
    assert_eq!(data.series_count(), 2);
    assert_eq!(data.data[0][0].y, 1000.0);
    assert_eq!(data.data[1][0].y, 2.0);
}

#[test]
fn delimiter_from_url() {
    assert_eq!(Delimiter::from_url("data.tsv"), Delimiter::Tab);
    assert_eq!(Delimiter::from_url("data.csv"), Delimiter::Comma);
    assert_eq!(Delimiter::from_url("https://host/export?format=tsv"), Delimiter::Comma);
    assert_eq!(file_extension("http://host/file.tsv?x=1"), "tsv");
}

#[test]
fn parse_rows_keeps_quoted_delimiters() {
    let rows = parse_rows("a,b\n\"x, y\",2\n", Delimiter::Comma).unwrap();
    assert_eq!(rows, vec![vec!["a", "b"], vec!["x, y", "2"]]);
}
