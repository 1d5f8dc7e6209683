// crates/usecase/src/dto.rs
use league_table_domain::{Standings, TableSummary};

/// Everything the presentation layer needs after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsReport {
    /// Name of the source the matches were read from.
    pub source: String,
    pub standings: Standings,
    pub summary: TableSummary,
}
