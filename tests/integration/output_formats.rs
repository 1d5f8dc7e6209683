// tests/integration/output_formats.rs
use league_table::{Config, run_with_config};
use league_table_domain::options::{ColorChoice, OutputFormat};

#[path = "../common/mod.rs"]
mod common;
use common::{SEASON, match_file};

fn render(format: OutputFormat, top: Option<usize>, color: ColorChoice) -> String {
    let (dir, path) = match_file(SEASON);
    let out = dir.path().join("report.out");
    let config = Config::builder(path)
        .format(format)
        .top_n(top)
        .color(color)
        .output(Some(out.clone()))
        .build();
    run_with_config(&config).expect("report renders");
    std::fs::read_to_string(out).expect("report written")
}

#[test]
fn table_written_to_file_is_plain_by_default() {
    let out = render(OutputFormat::Table, None, ColorChoice::Auto);
    assert!(!out.contains('\x1B'));
    assert!(out.contains("1. Tarantulas          6 pts"));
    assert!(out.contains("3. FC Awesome          1 pt"));
}

#[test]
fn color_always_forces_ansi_into_files() {
    let out = render(OutputFormat::Table, None, ColorChoice::Always);
    assert!(out.contains("\x1B[1m1. Tarantulas"));
}

#[test]
fn csv_respects_top() {
    let out = render(OutputFormat::Csv, Some(3), ColorChoice::Always);
    assert_eq!(out, "rank,team,points\n1,Tarantulas,6\n2,Lions,5\n3,FC Awesome,1\n");
}

#[test]
fn json_report_round_trips_through_serde() {
    let out = render(OutputFormat::Json, None, ColorChoice::Always);
    let doc: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    let standings = doc["standings"].as_array().expect("array");
    assert_eq!(standings.len(), 5);
    assert_eq!(standings[3]["team"], "Snakes");
    assert_eq!(standings[3]["rank"], 3);
    assert_eq!(doc["version"], league_table::VERSION);
}

#[test]
fn jsonl_ends_with_summary() {
    let out = render(OutputFormat::Jsonl, None, ColorChoice::Always);
    let last: serde_json::Value = serde_json::from_str(out.lines().last().expect("lines")).expect("json");
    assert_eq!(last["type"], "summary");
    assert_eq!(last["teams"], 5);
}
