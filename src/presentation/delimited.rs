// src/presentation/delimited.rs
use std::io::Write;

use super::ReportView;

pub(super) fn write_delimited(view: &ReportView<'_>, sep: char, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "rank{sep}team{sep}points")?;
    for entry in view.rows {
        writeln!(out, "{}{sep}{}{sep}{}", entry.rank, escape_field(&entry.team, sep), entry.points)?;
    }
    Ok(())
}

/// Quote a field when it contains the separator, a quote or a line break.
fn escape_field(field: &str, sep: char) -> String {
    if field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
