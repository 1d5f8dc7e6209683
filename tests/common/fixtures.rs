// tests/common/fixtures.rs
use std::path::PathBuf;

use tempfile::TempDir;

/// A season with ties, a draw-heavy mid-table and a multi-word team name.
pub const SEASON: &str = "\
Lions 3, Snakes 3
Tarantulas 1, FC Awesome 0
Lions 1, FC Awesome 1
Tarantulas 3, Snakes 1
Lions 4, Grouches 0
";

/// Write `contents` to `matches.txt` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive for as long as the path is used.
pub fn match_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("matches.txt");
    std::fs::write(&path, contents).expect("write match file");
    (dir, path)
}
