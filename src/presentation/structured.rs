// src/presentation/structured.rs
//! JSON, YAML and JSON Lines documents.

use std::io::Write;

use chrono::{DateTime, Local};
use league_table_domain::{RankingEntry, TableSummary};
use league_table_shared_kernel::Result;
use serde::Serialize;

use super::ReportView;

/// Whole-report document shared by the JSON and YAML formats.
#[derive(Debug, Serialize)]
pub struct StandingsDocument<'a> {
    pub version: &'static str,
    pub generated_at: DateTime<Local>,
    pub source: &'a str,
    pub summary: TableSummary,
    pub standings: &'a [RankingEntry],
}

impl<'a> StandingsDocument<'a> {
    pub fn new(view: &ReportView<'a>) -> Self {
        Self {
            version: crate::VERSION,
            generated_at: Local::now(),
            source: view.source,
            summary: view.summary,
            standings: view.rows,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonlRecord<'a> {
    Standing(&'a RankingEntry),
    Summary {
        version: &'static str,
        source: &'a str,
        matches: usize,
        teams: usize,
        draws: usize,
        decisive: usize,
    },
}

pub(super) fn write_json(view: &ReportView<'_>, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &StandingsDocument::new(view))?;
    writeln!(out)?;
    Ok(())
}

pub(super) fn write_yaml(view: &ReportView<'_>, out: &mut impl Write) -> Result<()> {
    serde_yaml::to_writer(&mut *out, &StandingsDocument::new(view))?;
    Ok(())
}

pub(super) fn write_jsonl(view: &ReportView<'_>, out: &mut impl Write) -> Result<()> {
    for entry in view.rows {
        serde_json::to_writer(&mut *out, &JsonlRecord::Standing(entry))?;
        writeln!(out)?;
    }
    let TableSummary { matches, teams, draws, decisive } = view.summary;
    let summary = JsonlRecord::Summary { version: crate::VERSION, source: view.source, matches, teams, draws, decisive };
    serde_json::to_writer(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(())
}
