//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: line-oriented match result sources
//! - [`progress`]: progress reporting while matches are processed
//!
//! These ports keep the use cases independent of files, stdin and terminals.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod progress;
pub mod source;

pub use progress::ProgressSink;
pub use source::{LineSource, SourceLine};
