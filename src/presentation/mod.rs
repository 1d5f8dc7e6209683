// src/presentation/mod.rs
//! Rendering of finished standings. Nothing here feeds back into scoring.

mod delimited;
mod markdown;
pub mod structured;
pub mod style;
mod table;

use std::io::Write;

use league_table_domain::{RankingEntry, TableSummary, options::OutputFormat};
use league_table_shared_kernel::Result;
use league_table_usecase::StandingsReport;

pub use style::Palette;

use crate::config::Config;

/// The slice of a report that formatters render.
#[derive(Debug, Clone, Copy)]
pub struct ReportView<'a> {
    pub source: &'a str,
    pub summary: TableSummary,
    pub rows: &'a [RankingEntry],
    pub banner: bool,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a StandingsReport, config: &Config) -> Self {
        Self {
            source: &report.source,
            summary: report.summary,
            rows: report.standings.top(config.top_n),
            banner: config.banner,
        }
    }
}

/// Render `report` in the configured format.
pub fn emit(report: &StandingsReport, config: &Config, color: bool, out: &mut impl Write) -> Result<()> {
    let view = ReportView::new(report, config);
    match config.format {
        OutputFormat::Table => table::write_table(&view, Palette::new(color), out)?,
        OutputFormat::Csv => delimited::write_delimited(&view, ',', out)?,
        OutputFormat::Tsv => delimited::write_delimited(&view, '\t', out)?,
        OutputFormat::Md => markdown::write_markdown(&view, out)?,
        OutputFormat::Json => structured::write_json(&view, out)?,
        OutputFormat::Yaml => structured::write_yaml(&view, out)?,
        OutputFormat::Jsonl => structured::write_jsonl(&view, out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use league_table_domain::compute_standings;

    use super::*;

    fn report() -> StandingsReport {
        let lines = ["Liverpool 3, ManchesterUnited 1", "Arsenal 2, Chelsea 2", "Chelsea 1, Liverpool 1"];
        StandingsReport {
            source: "matches.txt".into(),
            standings: compute_standings(lines).expect("valid"),
            summary: TableSummary { matches: 3, teams: 4, draws: 2, decisive: 1 },
        }
    }

    fn render(config: &Config) -> String {
        let mut buf = Vec::new();
        emit(&report(), config, false, &mut buf).expect("renders");
        String::from_utf8(buf).expect("utf-8")
    }

    fn config(format: OutputFormat) -> Config {
        Config::builder("matches.txt").format(format).build()
    }

    #[test]
    fn table_has_banner_rows_and_closing_line() {
        let out = render(&config(OutputFormat::Table));
        assert!(out.contains("LEAGUE TABLE: Final Standings"));
        assert!(out.contains("1. Liverpool           4 pts"));
        assert!(out.contains("2. Chelsea             2 pts"));
        assert!(out.contains("3. Arsenal             1 pt\n"));
        assert!(out.contains("4 teams ranked from 3 matches (2 draws)."));
    }

    #[test]
    fn table_without_banner_is_rows_only() {
        let out = render(&Config::builder("m").banner(false).build());
        assert_eq!(out.lines().count(), 4);
        assert!(out.starts_with("1. Liverpool"));
    }

    #[test]
    fn top_limits_rows() {
        let out = render(&Config::builder("m").format(OutputFormat::Csv).top_n(Some(2)).build());
        assert_eq!(out, "rank,team,points\n1,Liverpool,4\n2,Chelsea,2\n");
    }

    #[test]
    fn tsv_uses_tabs() {
        let out = render(&config(OutputFormat::Tsv));
        assert!(out.starts_with("rank\tteam\tpoints\n1\tLiverpool\t4\n"));
    }

    #[test]
    fn markdown_table_has_header_and_rows() {
        let out = render(&config(OutputFormat::Md));
        assert!(out.starts_with("| Rank | Team | Points |\n| ---: | :--- | -----: |\n"));
        assert!(out.contains("| 4 | ManchesterUnited | 0 |"));
    }

    #[test]
    fn json_document_lists_standings() {
        let out = render(&config(OutputFormat::Json));
        let doc: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(doc["source"], "matches.txt");
        assert_eq!(doc["summary"]["teams"], 4);
        assert_eq!(doc["standings"][0]["team"], "Liverpool");
        assert_eq!(doc["standings"][0]["rank"], 1);
        assert_eq!(doc["standings"][3]["points"], 0);
    }

    #[test]
    fn yaml_document_mentions_every_team() {
        let out = render(&config(OutputFormat::Yaml));
        for team in ["Liverpool", "Chelsea", "Arsenal", "ManchesterUnited"] {
            assert!(out.contains(team), "{team} missing from {out}");
        }
        assert!(out.contains("standings:"));
    }

    #[test]
    fn jsonl_has_one_line_per_team_plus_summary() {
        let out = render(&config(OutputFormat::Jsonl));
        let lines: Vec<serde_json::Value> =
            out.lines().map(|l| serde_json::from_str(l).expect("json line")).collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0]["type"], "standing");
        assert_eq!(lines[0]["team"], "Liverpool");
        assert_eq!(lines[4]["type"], "summary");
        assert_eq!(lines[4]["matches"], 3);
    }
}
