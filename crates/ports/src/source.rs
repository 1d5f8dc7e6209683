// crates/ports/src/source.rs
use league_table_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO for one raw line pulled from a match source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    /// 1-based line number within the source.
    pub number: usize,
    pub text: String,
}

/// Port for reading match results one line at a time.
///
/// Implementations own whatever handle backs the source and release it when dropped.
pub trait LineSource {
    /// Human-readable name for messages, e.g. the file path.
    fn name(&self) -> String;

    /// Next line, or `None` once the source is exhausted.
    fn next_line(&mut self) -> Result<Option<SourceLine>>;
}
