// src/progress.rs
use std::io::Write;

use league_table_ports::ProgressSink;
use league_table_shared_kernel::Result;

use crate::presentation::Palette;

/// Echoes every processed match to stderr, e.g. `Processed match #2: Bar 3, Foo 0`.
pub struct ConsoleProgress {
    palette: Palette,
}

impl ConsoleProgress {
    pub fn new(color: bool) -> Self {
        Self { palette: Palette::new(color) }
    }

    fn line(&self, text: &str) -> Result<()> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", text)?;
        Ok(())
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_match(&self, index: usize, line: &str) -> Result<()> {
        let text = format!("Processed match #{index}: {line}");
        self.line(&self.palette.paint(self.palette.success, &text))
    }

    fn on_complete(&self, matches: usize) -> Result<()> {
        let text = format!("All {matches} matches processed.");
        self.line(&self.palette.paint(self.palette.highlight, &text))
    }
}

/// Routes progress through the `log` facade at `debug`/`info`.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_match(&self, index: usize, line: &str) -> Result<()> {
        log::debug!("processed match #{index}: {line}");
        Ok(())
    }

    fn on_complete(&self, matches: usize) -> Result<()> {
        log::info!("all {matches} matches processed");
        Ok(())
    }
}
