// crates/usecase/src/orchestrator.rs
use league_table_domain::StandingsCalculator;
use league_table_ports::{LineSource, ProgressSink};
use league_table_shared_kernel::{ErrorContext, Result};

use crate::dto::StandingsReport;

/// Drains a [`LineSource`] through a [`StandingsCalculator`].
///
/// Any read or parse failure aborts the run; no partial standings are returned.
pub struct ComputeStandings<'a> {
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> ComputeStandings<'a> {
    pub fn new(progress: Option<&'a dyn ProgressSink>) -> Self {
        Self { progress }
    }

    pub fn run(&self, source: &mut dyn LineSource) -> Result<StandingsReport> {
        let name = source.name();
        let mut calculator = StandingsCalculator::new();
        let mut matches = 0usize;

        while let Some(line) = source.next_line()? {
            calculator
                .push_line(line.number, &line.text)
                .with_context(|| format!("reading matches from {name}"))?;
            matches += 1;
            if let Some(progress) = self.progress {
                progress.on_match(matches, &line.text)?;
            }
        }

        if let Some(progress) = self.progress {
            progress.on_complete(matches)?;
        }

        let summary = calculator.summary();
        log::info!("{name}: {} matches, {} teams", summary.matches, summary.teams);
        Ok(StandingsReport { source: name, standings: calculator.finish(), summary })
    }
}
