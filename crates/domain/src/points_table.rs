// crates/domain/src/points_table.rs
use std::collections::{HashMap, hash_map};

use league_table_shared_kernel::{Points, TeamName};
use serde::Serialize;

use crate::model::{MatchOutcome, MatchRecord};

/// Running per-team point totals under win=3 / draw=1 / loss=0 scoring.
///
/// Entries are created on a team's first appearance and never removed.
#[derive(Debug, Clone, Default)]
pub struct PointsTable {
    points: HashMap<TeamName, Points>,
    matches: usize,
    draws: usize,
}

impl PointsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `team` with zero points unless it is already present.
    pub fn register(&mut self, team: &TeamName) {
        if !self.points.contains_key(team) {
            self.points.insert(team.clone(), Points::zero());
        }
    }

    /// Fold one match into the table and return its outcome.
    pub fn record(&mut self, record: &MatchRecord) -> MatchOutcome {
        self.register(&record.home_team);
        self.register(&record.away_team);

        let outcome = record.outcome();
        let (home, away) = outcome.points();
        self.award(&record.home_team, home);
        self.award(&record.away_team, away);

        self.matches += 1;
        if outcome.is_draw() {
            self.draws += 1;
        }
        outcome
    }

    fn award(&mut self, team: &TeamName, points: Points) {
        if points.is_zero() {
            return;
        }
        if let Some(total) = self.points.get_mut(team) {
            *total += points;
        }
    }

    pub fn points(&self, team: &str) -> Option<Points> {
        self.points.get(team).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entries in unspecified order; ordering is the ranking step's job.
    pub fn iter(&self) -> hash_map::Iter<'_, TeamName, Points> {
        self.points.iter()
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            matches: self.matches,
            teams: self.points.len(),
            draws: self.draws,
            decisive: self.matches - self.draws,
        }
    }
}

impl Extend<MatchRecord> for PointsTable {
    fn extend<I: IntoIterator<Item = MatchRecord>>(&mut self, iter: I) {
        for record in iter {
            self.record(&record);
        }
    }
}

impl FromIterator<MatchRecord> for PointsTable {
    fn from_iter<I: IntoIterator<Item = MatchRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a> IntoIterator for &'a PointsTable {
    type Item = (&'a TeamName, &'a Points);
    type IntoIter = hash_map::Iter<'a, TeamName, Points>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Counters describing what went into a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TableSummary {
    pub matches: usize,
    pub teams: usize,
    pub draws: usize,
    pub decisive: usize,
}
