// src/config.rs
use std::path::PathBuf;

use league_table_domain::options::{ColorChoice, OutputFormat};

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub top_n: Option<usize>,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
    pub banner: bool,
    pub progress: bool,
    pub verbosity: u8,
}

impl Config {
    pub fn builder(input: impl Into<PathBuf>) -> ConfigBuilder {
        ConfigBuilder::new(input)
    }

    /// Whether table output should carry ANSI styling given the destination.
    pub fn use_color(&self, stdout_is_terminal: bool) -> bool {
        self.format.supports_color() && self.color.enabled(self.output.is_none() && stdout_is_terminal)
    }
}

/// Builder with the same defaults as the command line.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            config: Config {
                input: input.into(),
                format: OutputFormat::default(),
                top_n: None,
                output: None,
                color: ColorChoice::default(),
                banner: true,
                progress: false,
                verbosity: 0,
            },
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn top_n(mut self, top_n: Option<usize>) -> Self {
        self.config.top_n = top_n;
        self
    }

    pub fn output(mut self, output: Option<PathBuf>) -> Self {
        self.config.output = output;
        self
    }

    pub fn color(mut self, color: ColorChoice) -> Self {
        self.config.color = color;
        self
    }

    pub fn banner(mut self, banner: bool) -> Self {
        self.config.banner = banner;
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.config.progress = progress;
        self
    }

    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.config.verbosity = verbosity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
