use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use ratechart::chart::BarChart;
use ratechart::pipeline::{self, aggregator, grouper, CsvSource, PipelineError};

fn write_csv(csv: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{}", csv).unwrap();
    tmp
}

#[test]
fn groups_and_averages_a_small_listing() {
    let tmp = write_csv("purpose,int_rate\ncar,4.0\ncar,6.0\neducation,10.0\n");

    let csv = CsvSource::open(tmp.path()).unwrap();
    let grouped = grouper::group(&csv, "purpose", "int_rate").unwrap();
    assert_eq!(grouped["car"], vec![4.0, 6.0]);
    assert_eq!(grouped["education"], vec![10.0]);

    let means = aggregator::average(grouped);
    assert!((means["car"] - 5.0).abs() < 1e-9);
    assert!((means["education"] - 10.0).abs() < 1e-9);
}

#[test]
fn single_row_listing_averages_to_its_own_rate() {
    let tmp = write_csv("purpose,int_rate\ncredit_card,12.3\n");
    let means = pipeline::mean_rates_by_purpose(tmp.path()).unwrap();
    assert_eq!(means.len(), 1);
    assert!((means["credit_card"] - 12.3).abs() < 1e-9);
}

#[test]
fn header_only_listing_yields_empty_series() {
    let tmp = write_csv("purpose,int_rate\n");
    let means = pipeline::mean_rates_by_purpose(tmp.path()).unwrap();
    assert!(means.is_empty());
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let result = pipeline::mean_rates_by_purpose(Path::new("no_such_listing.csv"));
    match result {
        Err(PipelineError::Io(_)) => {}
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn non_numeric_rate_surfaces_a_parse_error() {
    let tmp = write_csv("purpose,int_rate\ncar,4.0\ncar,abc\n");
    match pipeline::mean_rates_by_purpose(tmp.path()) {
        Err(PipelineError::RateParse { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "abc");
        }
        other => panic!("expected RateParse, got {:?}", other),
    }
}

#[test]
fn missing_purpose_column_surfaces_a_schema_error() {
    let tmp = write_csv("loan_purpose,int_rate\ncar,4.0\n");
    match pipeline::mean_rates_by_purpose(tmp.path()) {
        Err(PipelineError::MissingColumn(name)) => assert_eq!(name, "purpose"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn no_row_is_lost_and_no_key_is_invented() {
    let mut csv = String::from("purpose,int_rate\n");
    for i in 0..30 {
        let purpose = ["car", "education"][i % 2];
        csv.push_str(&format!("{},{}.0\n", purpose, i));
    }
    let tmp = write_csv(&csv);

    let source = CsvSource::open(tmp.path()).unwrap();
    let grouped = grouper::group(&source, "purpose", "int_rate").unwrap();

    let total: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(total, 30);
    let keys: Vec<_> = grouped.keys().cloned().collect();
    assert_eq!(keys, ["car", "education"]);

    let means = aggregator::average(grouped);
    assert_eq!(means.len(), 2);
}

#[test]
fn hundred_rows_across_three_purposes_match_hand_computed_means() {
    // rate of row i is i/10; per-purpose sums follow arithmetic series
    let mut csv = String::from("purpose,int_rate\n");
    for i in 0..100 {
        let purpose = ["car", "education", "house"][i % 3];
        csv.push_str(&format!("{},{:.1}\n", purpose, i as f64 / 10.0));
    }
    let tmp = write_csv(&csv);

    let means = pipeline::mean_rates_by_purpose(tmp.path()).unwrap();
    assert!((means["car"] - 168.3 / 34.0).abs() < 1e-9);
    assert!((means["education"] - 161.7 / 33.0).abs() < 1e-9);
    assert!((means["house"] - 165.0 / 33.0).abs() < 1e-9);
}

#[test]
fn chart_rows_follow_the_series_end_to_end() {
    let tmp = write_csv("purpose,int_rate\nhouse,2.0\ncar,4.0\ncar,6.0\n");
    let means = pipeline::mean_rates_by_purpose(tmp.path()).unwrap();

    let chart = BarChart::from_series(&means);
    assert_eq!(chart.labels(), ["house", "car"]);
    assert_eq!(chart.values(), [2.0, 5.0]);
}
