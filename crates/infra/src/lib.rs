// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod source;

pub use persistence::{FileReader, FileWriter, OutputWriter};
pub use source::{FileLineSource, MemoryLineSource, STDIN_PATH};
