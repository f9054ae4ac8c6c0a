//! Integration tests for chart commands over CSV files.

use std::io::Write;
use std::path::PathBuf;

use chartform_cli::cli::{Cli, InputArgs};
use chartform_cli::commands::{build_chart, chart_request, render, run_chart};
use chartform_transform::{ChartOutput, ChartRequest, DataTableParams};
use clap::Parser;
use tempfile::{NamedTempFile, TempDir};

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

fn input(path: PathBuf) -> InputArgs {
    InputArgs {
        input: path,
        config: None,
        clean_columns: false,
        output: None,
        pretty: false,
    }
}

#[test]
fn test_bar_chart_from_csv() {
    let csv = write_csv(&["Vendor Name,Total GMV", "Acme,120.5", "Globex,80"]);
    let cli = Cli::try_parse_from([
        "chartform".into(),
        "bar".into(),
        csv.path().as_os_str().to_owned(),
        "--x".into(),
        "vendor_name".into(),
        "--y".into(),
        "total_gmv".into(),
        "--clean-columns".into(),
    ])
    .unwrap();
    let (args, request) = chart_request(&cli.command).unwrap();

    let output = build_chart(args, &request).unwrap();
    assert_eq!(
        render(&output, false).unwrap(),
        r#"{"chart_type":"bar_chart","data":[{"x":"Acme","y":120.5,"label":"Acme"},{"x":"Globex","y":80.0,"label":"Globex"}],"x_label":"Vendor Name","y_label":"Total Gmv"}"#
    );
}

#[test]
fn test_config_sets_default_page_size() {
    let csv = write_csv(&["id", "1", "2", "3", "4", "5"]);
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "default_page_size = 2").unwrap();

    let mut args = input(csv.path().to_path_buf());
    args.config = Some(config.path().to_path_buf());
    let output = build_chart(&args, &ChartRequest::DataTable(DataTableParams::page(3))).unwrap();

    let ChartOutput::DataTable(table) = output else {
        panic!("expected a data table");
    };
    assert_eq!(table.pagination.total_pages, 3);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn test_missing_column_reports_context() {
    let csv = write_csv(&["stage,users", "visit,100"]);
    let cli = Cli::try_parse_from([
        "chartform".into(),
        "funnel".into(),
        csv.path().as_os_str().to_owned(),
        "--stage".into(),
        "stage".into(),
        "--value".into(),
        "sessions".into(),
    ])
    .unwrap();
    let (args, request) = chart_request(&cli.command).unwrap();

    let err = build_chart(args, &request).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("build funnel_chart from"));
    assert!(message.contains("missing required columns: sessions (available: stage, users)"));
}

#[test]
fn test_run_chart_writes_output_file() {
    let csv = write_csv(&["a,b", "1,2", "2,4", "3,7"]);
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("corr.json");

    let mut args = input(csv.path().to_path_buf());
    args.output = Some(out.clone());
    args.pretty = true;
    run_chart(&args, &ChartRequest::CorrelationHeatmap(Default::default())).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["chart_type"], "correlation_heatmap");
    assert_eq!(json["columns"], serde_json::json!(["a", "b"]));
    assert_eq!(json["matrix"][0][0], 1.0);
}

#[test]
fn test_charts_subcommand_builds_no_request() {
    let cli = Cli::try_parse_from(["chartform", "charts"]).unwrap();
    assert!(chart_request(&cli.command).is_none());
}
