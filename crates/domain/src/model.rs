// crates/domain/src/model.rs
use std::fmt;

use league_table_shared_kernel::{Goals, Points, TeamName};
use serde::{Deserialize, Serialize};

/// One parsed fixture: two teams and the goals each scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home_team: TeamName,
    pub home_score: Goals,
    pub away_team: TeamName,
    pub away_score: Goals,
}

impl MatchRecord {
    pub fn new(
        home_team: impl Into<TeamName>,
        home_score: u32,
        away_team: impl Into<TeamName>,
        away_score: u32,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            home_score: Goals::new(home_score),
            away_team: away_team.into(),
            away_score: Goals::new(away_score),
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_scores(self.home_score, self.away_score)
    }
}

/// Renders the record back into its input-line form, e.g. `Liverpool 3, ManchesterUnited 1`.
impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {} {}", self.home_team, self.home_score, self.away_team, self.away_score)
    }
}

/// Result of a match from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchOutcome {
    pub fn from_scores(home: Goals, away: Goals) -> Self {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Self::HomeWin,
            std::cmp::Ordering::Less => Self::AwayWin,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }

    /// Points awarded as `(home, away)`.
    pub const fn points(self) -> (Points, Points) {
        match self {
            Self::HomeWin => (Points::WIN, Points::LOSS),
            Self::AwayWin => (Points::LOSS, Points::WIN),
            Self::Draw => (Points::DRAW, Points::DRAW),
        }
    }

    pub const fn is_draw(self) -> bool {
        matches!(self, Self::Draw)
    }
}
