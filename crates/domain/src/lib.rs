// crates/domain/src/lib.rs
//! # Domain
//!
//! Match parsing, scoring and ranking. Pure logic with no I/O:
//!
//! - [`parser`]: match line to [`MatchRecord`]
//! - [`points_table`]: win/draw/loss accumulation
//! - [`ranking`]: ordering and competition ranks
//! - [`calculator`]: the line-by-line fold tying the three together

#![allow(clippy::multiple_crate_versions)]

pub mod calculator;
pub mod model;
pub mod options;
pub mod parser;
pub mod points_table;
pub mod ranking;

pub use calculator::{StandingsCalculator, compute_standings};
pub use model::{MatchOutcome, MatchRecord};
pub use parser::{parse_match_line, parse_numbered_line};
pub use points_table::{PointsTable, TableSummary};
pub use ranking::{RankingEntry, Standings, compare_standing, rank_entries};
