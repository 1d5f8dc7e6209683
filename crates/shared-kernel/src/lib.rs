// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, FormatErrorKind, InfraResult,
    InfrastructureError, LeagueTableError, PresentationError, Result, Side,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Goals, Points, Rank, TeamName};
