// src/presentation/table.rs
use std::io::Write;

use league_table_domain::RankingEntry;
use unicode_segmentation::UnicodeSegmentation;

use super::{ReportView, style::Palette};

const TEAM_WIDTH: usize = 20;
const RULE: &str = "===================================================";

pub(super) fn write_table(view: &ReportView<'_>, palette: Palette, out: &mut impl Write) -> std::io::Result<()> {
    if view.banner {
        writeln!(out, "{}", palette.paint(palette.highlight, RULE))?;
        writeln!(out, "{}", palette.paint(palette.bold, "        LEAGUE TABLE: Final Standings"))?;
        writeln!(out, "{}", palette.paint(palette.highlight, RULE))?;
        writeln!(out)?;
    }

    for entry in view.rows {
        writeln!(out, "{}", format_row(entry, palette))?;
    }

    if view.banner {
        writeln!(out)?;
        let closing = format!(
            "{} teams ranked from {} matches ({} draws).",
            view.summary.teams, view.summary.matches, view.summary.draws
        );
        writeln!(out, "{}", palette.paint(palette.info, &closing))?;
    }
    Ok(())
}

/// `1. Liverpool           3 pts`; the team column is padded by grapheme count.
pub(super) fn format_row(entry: &RankingEntry, palette: Palette) -> String {
    let label = format!("{}. {}", entry.rank, pad_right(&entry.team, TEAM_WIDTH));
    let points = format!("{} {}", entry.points, entry.points.unit());
    format!("{}{}", palette.paint(palette.bold, &label), palette.paint(palette.info, &points))
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.graphemes(true).count();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(len));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_pluralises_points() {
        let plain = Palette::new(false);
        assert_eq!(format_row(&RankingEntry::new(1, "Arsenal", 1), plain), "1. Arsenal             1 pt");
        assert_eq!(
            format_row(&RankingEntry::new(2, "ManchesterUnited", 0), plain),
            "2. ManchesterUnited    0 pts"
        );
    }

    #[test]
    fn padding_counts_graphemes_not_bytes() {
        assert_eq!(pad_right("Malmö", 7), "Malmö  ");
        assert_eq!(pad_right("A very long team name", 4), "A very long team name");
    }

    #[test]
    fn colored_row_wraps_both_columns() {
        let row = format_row(&RankingEntry::new(1, "Foo", 3), Palette::new(true));
        assert!(row.starts_with("\x1B[1m1. Foo"));
        assert!(row.ends_with("\x1B[36m3 pts\x1B[0m"));
    }
}
