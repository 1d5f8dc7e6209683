// tests/common/mod.rs
//! Shared fixtures for the integration suites.

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
