// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliColorChoice, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "league_table",
    version = crate::VERSION,
    about = "Compute league standings from match results",
    long_about = "Reads one match per line in the form `<Team> <Score>, <Team> <Score>`,\n\
                  awards 3 points for a win and 1 for a draw, and prints the ranked table.\n\
                  Teams level on points share a rank and are listed alphabetically."
)]
pub struct Args {
    /// Match results file (`-` reads standard input)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Show only the first N rows of the table
    #[arg(long, help_heading = "Output")]
    pub top: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// When to colour table output
    #[arg(long, value_enum, default_value = "auto", help_heading = "Output")]
    pub color: CliColorChoice,

    /// Omit the banner and closing line from table output
    #[arg(long, help_heading = "Output")]
    pub no_banner: bool,

    /// Print a confirmation line to stderr for every processed match
    #[arg(long, help_heading = "Behavior")]
    pub progress: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}
