// src/app.rs
use std::io::IsTerminal;

use anyhow::Result;
use league_table_infra::{FileLineSource, OutputWriter};
use league_table_ports::ProgressSink;
use league_table_shared_kernel::ApplicationError;
use league_table_usecase::{ComputeStandings, StandingsReport};

use crate::{
    cli,
    config::Config,
    presentation,
    progress::{ConsoleProgress, LogProgress},
};

pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    crate::logging::init(config.verbosity);
    run_with_config(&config)
}

/// Read, rank and render. Nothing is written unless every line parsed.
pub fn run_with_config(config: &Config) -> Result<()> {
    let report = compute(config)?;

    let mut writer = OutputWriter::create(config.output.as_deref())?;
    if writer.is_stdout() {
        log::debug!("rendering {} report to stdout", config.format);
    } else if let Some(path) = &config.output {
        log::debug!("rendering {} report to {}", config.format, path.display());
    }
    let color = config.use_color(std::io::stdout().is_terminal());
    presentation::emit(&report, config, color, &mut writer).map_err(|e| ApplicationError::PresentationFailed {
        reason: e.to_string(),
        source: Some(Box::new(e)),
    })?;
    writer.finish()?;
    Ok(())
}

/// Run the standings use case for the configured input.
pub fn compute(config: &Config) -> Result<StandingsReport> {
    let console;
    let progress: &dyn ProgressSink = if config.progress {
        console = ConsoleProgress::new(config.color.enabled(std::io::stderr().is_terminal()));
        &console
    } else {
        &LogProgress
    };

    let mut source = FileLineSource::open(&config.input)?;
    let report = ComputeStandings::new(Some(progress)).run(&mut source)?;
    Ok(report)
}
