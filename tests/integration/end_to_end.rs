// tests/integration/end_to_end.rs
use league_table::{Config, compute, run_with_config};
use league_table_shared_kernel::LeagueTableError;

#[path = "../common/mod.rs"]
mod common;
use common::{SEASON, match_file};

fn triples(config: &Config) -> Vec<(usize, String, u32)> {
    compute(config)
        .expect("season computes")
        .standings
        .into_iter()
        .map(|e| (e.rank.value(), e.team.into_inner(), e.points.value()))
        .collect()
}

#[test]
fn season_is_ranked_with_shared_ranks() {
    let (_dir, path) = match_file(SEASON);
    let config = Config::builder(path).build();

    assert_eq!(
        triples(&config),
        vec![
            (1, "Tarantulas".to_string(), 6),
            (2, "Lions".to_string(), 5),
            (3, "FC Awesome".to_string(), 1),
            (3, "Snakes".to_string(), 1),
            (5, "Grouches".to_string(), 0),
        ]
    );
}

#[test]
fn summary_reflects_processed_matches() {
    let (_dir, path) = match_file(SEASON);
    let report = compute(&Config::builder(path).build()).expect("season computes");
    assert_eq!(report.summary.matches, 5);
    assert_eq!(report.summary.teams, 5);
    assert_eq!(report.summary.draws, 2);
    assert_eq!(report.summary.decisive, 3);
}

#[test]
fn crlf_endings_and_final_newline_are_tolerated() {
    let (_dir, path) = match_file("Foo 1, Bar 0\r\nBar 3, Foo 0\r\n");
    let config = Config::builder(path).build();
    assert_eq!(triples(&config), vec![(1, "Bar".to_string(), 3), (1, "Foo".to_string(), 3)]);
}

#[test]
fn blank_line_between_matches_fails_whole_run() {
    let (_dir, path) = match_file("Foo 1, Bar 0\n\nBar 3, Foo 0\n");
    let err = compute(&Config::builder(path).build()).expect_err("blank line");
    let err = err.downcast::<LeagueTableError>().expect("domain error");
    assert!(err.is_format_error());
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn malformed_line_fails_whole_run() {
    let (_dir, path) = match_file("Foo 1, Bar 0\nFoo two, Bar 1\n");
    let err = compute(&Config::builder(path).build()).expect_err("malformed input");
    let err = err.downcast::<LeagueTableError>().expect("domain error");
    assert!(err.is_format_error());
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn missing_file_is_reported_as_unavailable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = compute(&Config::builder(dir.path().join("absent.txt")).build()).expect_err("missing");
    let err = err.downcast::<LeagueTableError>().expect("typed error");
    assert!(err.is_source_unavailable());
}

#[test]
fn failed_run_writes_no_output_file() {
    let (dir, path) = match_file("Foo vs Bar\n");
    let out = dir.path().join("table.txt");
    let config = Config::builder(path).output(Some(out.clone())).build();

    assert!(run_with_config(&config).is_err());
    assert!(!out.exists(), "no partial table should be written");
}
