// crates/shared-kernel/src/error.rs
use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LeagueTableError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LeagueTableError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl LeagueTableError {
    /// Walks through `Context` wrappers and returns the innermost error.
    pub fn root(&self) -> &LeagueTableError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the innermost error is a match line that failed to parse.
    pub fn is_format_error(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::Format { .. }))
    }

    /// True when the innermost error is an unreadable line source.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::SourceUnavailable { .. }))
    }
}

pub type Result<T> = std::result::Result<T, LeagueTableError>;

/// Which half of a match line a parse failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Away => f.write_str("away"),
        }
    }
}

/// Reason a match line could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("missing ',' between the two teams")]
    MissingComma,

    #[error("expected 2 comma-separated segments, found {found}")]
    TooManySegments { found: usize },

    #[error("{side} segment is empty")]
    EmptySegment { side: Side },

    #[error("{side} segment has a score but no team name")]
    MissingTeamName { side: Side },

    #[error("{side} score '{token}' is not a non-negative integer")]
    InvalidScore { side: Side, token: String },
}

/// Domain-layer specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A match line that does not follow `<Team> <Score>, <Team> <Score>`.
    #[error("{}invalid match line '{text}': {kind}", line_prefix(.line))]
    Format {
        line: Option<usize>,
        text: String,
        kind: FormatErrorKind,
    },
}

impl DomainError {
    pub fn format(text: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self::Format { line: None, text: text.into(), kind }
    }

    /// Attaches a 1-based line number to a format error.
    #[must_use]
    pub fn at_line(self, number: usize) -> Self {
        let Self::Format { text, kind, .. } = self;
        Self::Format { line: Some(number), text, kind }
    }

    pub fn format_kind(&self) -> &FormatErrorKind {
        let Self::Format { kind, .. } = self;
        kind
    }
}

fn line_prefix(line: &Option<usize>) -> String {
    line.map(|n| format!("line {n}: ")).unwrap_or_default()
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to present output: {reason}")]
    PresentationFailed {
        reason: String,
        #[source]
        source: Option<Box<LeagueTableError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// The line source could not be opened or read.
    #[error("Match source '{path}' is unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for LeagueTableError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LeagueTableError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for LeagueTableError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LeagueTableError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LeagueTableError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LeagueTableError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
