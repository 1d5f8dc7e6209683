// src/version.rs
//! Version string shown by `--version` and embedded in structured output.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
