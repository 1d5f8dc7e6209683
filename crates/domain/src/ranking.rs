// crates/domain/src/ranking.rs
//! Standings ordering and competition ranking.

use std::{cmp::Ordering, slice, vec};

use league_table_shared_kernel::{Points, Rank, TeamName};
use serde::{Deserialize, Serialize};

use crate::points_table::PointsTable;

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: Rank,
    pub team: TeamName,
    pub points: Points,
}

impl RankingEntry {
    pub fn new(rank: usize, team: impl Into<TeamName>, points: u32) -> Self {
        Self { rank: Rank::new(rank), team: team.into(), points: Points::new(points) }
    }
}

/// Points descending, then team name ascending ignoring case.
pub fn compare_standing(a: (&TeamName, Points), b: (&TeamName, Points)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp_ignore_case(b.0))
}

/// Sort `(team, points)` pairs and assign competition ranks (1, 1, 3 rather than 1, 1, 2).
pub fn rank_entries<I>(teams: I) -> Vec<RankingEntry>
where
    I: IntoIterator<Item = (TeamName, Points)>,
{
    let mut sorted: Vec<(TeamName, Points)> = teams.into_iter().collect();
    sorted.sort_by(|a, b| compare_standing((&a.0, a.1), (&b.0, b.1)));

    let mut entries: Vec<RankingEntry> = Vec::with_capacity(sorted.len());
    for (position, (team, points)) in sorted.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.points == points => prev.rank,
            _ => Rank::new(position + 1),
        };
        entries.push(RankingEntry { rank, team, points });
    }
    entries
}

/// Ranked standings derived from a [`PointsTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Standings(Vec<RankingEntry>);

impl Standings {
    pub fn from_table(table: &PointsTable) -> Self {
        Self(rank_entries(table.iter().map(|(team, points)| (team.clone(), *points))))
    }

    /// Recompute ranks for entries that may already be ranked.
    pub fn rerank<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RankingEntry>,
    {
        Self(rank_entries(entries.into_iter().map(|e| (e.team, e.points))))
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.0
    }

    /// The first `n` rows, or all of them when `n` is `None`.
    pub fn top(&self, n: Option<usize>) -> &[RankingEntry] {
        let limit = n.unwrap_or(self.0.len()).min(self.0.len());
        &self.0[..limit]
    }

    pub fn iter(&self) -> slice::Iter<'_, RankingEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<RankingEntry> {
        self.0
    }
}

impl IntoIterator for Standings {
    type Item = RankingEntry;
    type IntoIter = vec::IntoIter<RankingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a RankingEntry;
    type IntoIter = slice::Iter<'a, RankingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
