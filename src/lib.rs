// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod progress;
pub mod version;

pub use app::{compute, run, run_with_config};
pub use config::Config;
pub use version::VERSION;
