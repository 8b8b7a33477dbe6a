//! CSV and JSON export to disk.

use std::fs;

use gaussian_overlap::output::{write_group_summary_csv, write_json, write_points_csv};
use gaussian_overlap::OverlapAnalysis;
use tempfile::TempDir;

#[test]
fn writes_points_and_summary_csv() {
    let dir = TempDir::new().unwrap();
    let report = OverlapAnalysis::new().population(300).run().unwrap();

    let points = dir.path().join("overlap_points.csv");
    let summary = dir.path().join("group_summary.csv");
    write_points_csv(&report, &points).unwrap();
    write_group_summary_csv(&report, &summary).unwrap();

    let points_text = fs::read_to_string(&points).unwrap();
    assert_eq!(points_text.lines().count(), 301);
    let overlap_rows = points_text.lines().skip(1).filter(|l| l.ends_with(",true")).count();
    assert_eq!(overlap_rows, report.overlap.overlap_count);

    let summary_text = fs::read_to_string(&summary).unwrap();
    assert_eq!(summary_text.lines().count(), 4);
    assert!(summary_text.lines().nth(3).unwrap().starts_with("Group 3,100,"));
}

#[test]
fn writes_json_report() {
    let dir = TempDir::new().unwrap();
    let report = OverlapAnalysis::new().population(150).seed(9).run().unwrap();

    let path = dir.path().join("overlap_report.json");
    write_json(&report, &path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["config"]["seed"], 9);
    assert_eq!(
        value["overlap"]["overlap_count"].as_u64().unwrap() as usize,
        report.overlap.overlap_count
    );
    assert_eq!(value["dataset"]["labels"].as_array().unwrap().len(), 150);
}

#[test]
fn missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let report = OverlapAnalysis::new().population(30).run().unwrap();

    let path = dir.path().join("no/such/dir/points.csv");
    let err = write_points_csv(&report, &path).unwrap_err();
    assert!(matches!(err, gaussian_overlap::Error::Io { .. }), "{:?}", err);
}
