// crates/ports/src/progress.rs
use league_table_shared_kernel::Result;

/// Receives notifications while match lines are folded into the table.
pub trait ProgressSink {
    fn on_match(&self, index: usize, line: &str) -> Result<()>;
    fn on_complete(&self, matches: usize) -> Result<()>;
}
