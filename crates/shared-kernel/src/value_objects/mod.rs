// crates/shared-kernel/src/value_objects/mod.rs
pub mod points;
pub mod rank;
pub mod team;

pub use points::{Goals, Points};
pub use rank::Rank;
pub use team::TeamName;
