// crates/domain/src/calculator.rs
use league_table_shared_kernel::DomainResult;

use crate::{
    model::{MatchOutcome, MatchRecord},
    parser::parse_numbered_line,
    points_table::{PointsTable, TableSummary},
    ranking::Standings,
};

/// Folds match lines into a [`PointsTable`] and ranks the result.
///
/// Every line must be a match; the first malformed line, blank ones
/// included, aborts the run.
#[derive(Debug, Default)]
pub struct StandingsCalculator {
    table: PointsTable,
}

impl StandingsCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and fold the line found at 1-based position `number`.
    pub fn push_line(&mut self, number: usize, line: &str) -> DomainResult<(MatchRecord, MatchOutcome)> {
        let record = parse_numbered_line(number, line)
            .inspect_err(|e| log::debug!("line {number} rejected: {}", e.format_kind()))?;
        let outcome = self.push(&record);
        Ok((record, outcome))
    }

    /// Fold an already parsed record.
    pub fn push(&mut self, record: &MatchRecord) -> MatchOutcome {
        self.table.record(record)
    }

    pub fn summary(&self) -> TableSummary {
        self.table.summary()
    }

    pub fn finish(self) -> Standings {
        Standings::from_table(&self.table)
    }
}

/// Compute ranked standings from raw match lines.
pub fn compute_standings<I, S>(lines: I) -> DomainResult<Standings>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut calculator = StandingsCalculator::new();
    for (index, line) in lines.into_iter().enumerate() {
        calculator.push_line(index + 1, line.as_ref())?;
    }
    Ok(calculator.finish())
}
