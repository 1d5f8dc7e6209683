// src/presentation/markdown.rs
use std::io::Write;

use super::ReportView;

pub(super) fn write_markdown(view: &ReportView<'_>, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "| Rank | Team | Points |")?;
    writeln!(out, "| ---: | :--- | -----: |")?;
    for entry in view.rows {
        writeln!(out, "| {} | {} | {} |", entry.rank, entry.team.replace('|', "\\|"), entry.points)?;
    }
    Ok(())
}
