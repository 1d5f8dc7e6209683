// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{SEASON, match_file};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_league_table"))
}

#[test]
fn shows_help() {
    bin().arg("--help").assert().success().stdout(predicate::str::contains("league_table"));
}

#[test]
fn prints_table_for_file() {
    let (_dir, path) = match_file("Liverpool 3, ManchesterUnited 1\n");
    bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Liverpool           3 pts"))
        .stdout(predicate::str::contains("2. ManchesterUnited    0 pts"))
        .stdout(predicate::str::contains("\x1B").not());
}

#[test]
fn reads_stdin_when_input_is_dash() {
    bin()
        .args(["--format", "csv", "-"])
        .write_stdin("Arsenal 2, Chelsea 2\n")
        .assert()
        .success()
        .stdout("rank,team,points\n1,Arsenal,1\n1,Chelsea,1\n");
}

#[test]
fn progress_goes_to_stderr() {
    let (_dir, path) = match_file(SEASON);
    bin()
        .args(["--progress", "--no-banner", "--color", "never"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Processed match #1: Lions 3, Snakes 3"))
        .stderr(predicate::str::contains("All 5 matches processed."));
}

#[test]
fn malformed_line_fails_without_table() {
    let (_dir, path) = match_file("Foo 1, Bar 0\nFoo vs Bar\n");
    bin()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("missing ','"));
}

#[test]
fn missing_file_fails() {
    bin()
        .arg("definitely-not-here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("definitely-not-here.txt"));
}

#[test]
fn zero_top_is_rejected() {
    let (_dir, path) = match_file(SEASON);
    bin().args(["--top", "0"]).arg(&path).assert().failure().stderr(predicate::str::contains("--top"));
}
