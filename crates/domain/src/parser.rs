// crates/domain/src/parser.rs
//! Match line parsing.
//!
//! A line has the shape `<HomeTeamWords> <HomeScore>, <AwayTeamWords> <AwayScore>`.
//! Scores are plain ASCII digits; words are separated by spaces and re-joined
//! with single spaces. Other whitespace is part of the word it appears in.

use league_table_shared_kernel::{DomainError, DomainResult, FormatErrorKind, Goals, Side, TeamName};

use crate::model::MatchRecord;

/// Parse one match line into a [`MatchRecord`].
pub fn parse_match_line(line: &str) -> DomainResult<MatchRecord> {
    let fail = |kind| DomainError::format(line, kind);

    let segments: Vec<&str> = line.split(',').collect();
    let (home, away) = match segments.as_slice() {
        [_] => return Err(fail(FormatErrorKind::MissingComma)),
        [home, away] => (*home, *away),
        more => return Err(fail(FormatErrorKind::TooManySegments { found: more.len() })),
    };

    let (home_team, home_score) = parse_segment(home, Side::Home).map_err(fail)?;
    let (away_team, away_score) = parse_segment(away, Side::Away).map_err(fail)?;

    Ok(MatchRecord { home_team, home_score, away_team, away_score })
}

/// Parse a line read from a source, tagging failures with its 1-based line number.
pub fn parse_numbered_line(number: usize, line: &str) -> DomainResult<MatchRecord> {
    parse_match_line(line).map_err(|e| e.at_line(number))
}

fn parse_segment(segment: &str, side: Side) -> Result<(TeamName, Goals), FormatErrorKind> {
    let tokens: Vec<&str> = segment.split(' ').filter(|t| !t.is_empty()).collect();
    let Some((score, name)) = tokens.split_last() else {
        return Err(FormatErrorKind::EmptySegment { side });
    };
    let goals = parse_score(score).ok_or_else(|| FormatErrorKind::InvalidScore {
        side,
        token: (*score).to_string(),
    })?;
    if name.is_empty() {
        return Err(FormatErrorKind::MissingTeamName { side });
    }
    Ok((TeamName::new(name.join(" ")), goals))
}

fn parse_score(token: &str) -> Option<Goals> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok().map(Goals::new)
}
