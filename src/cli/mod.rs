// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::Args;
use clap::Parser;
use league_table_shared_kernel::{PresentationError, Result};
pub use value_enum::{CliColorChoice, CliOutputFormat};

use crate::config::Config;

fn validate_at_least_one(flag: &str, value: Option<usize>) -> Result<()> {
    if value == Some(0) {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments are invalid.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(args)
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when `--top` is zero.
pub fn build_config(args: Args) -> Result<Config> {
    validate_at_least_one("--top", args.top)?;

    Ok(Config::builder(args.input)
        .format(args.format.into())
        .top_n(args.top)
        .output(args.output)
        .color(args.color.into())
        .banner(!args.no_banner)
        .progress(args.progress)
        .verbosity(args.verbose)
        .build())
}
