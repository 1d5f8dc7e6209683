// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    match league_table::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
