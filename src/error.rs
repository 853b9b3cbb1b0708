use std::fmt;

use thiserror::Error;

use crate::config::server::ServerId;

/// A single field-level problem found while validating a configuration
/// document. `field` is the stable diagnostic key (`cli/...` namespace) so
/// an operator can map the message back to their file in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Collects every violation found in one validation pass.
///
/// Sections push into a shared report so a broken document surfaces all of
/// its problems at once instead of one per restart attempt.
#[derive(Debug, Default)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a required field that is absent or empty.
    pub fn missing(&mut self, field: &'static str) {
        self.violations.push(Violation {
            field,
            reason: "missing required value".to_string(),
        });
    }

    /// Record a present field whose value is out of range or malformed.
    pub fn invalid(&mut self, field: &'static str, reason: impl Into<String>) {
        self.violations.push(Violation {
            field,
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Finish the pass: `Ok` when clean, otherwise the whole batch as one error.
    pub fn into_result(self) -> std::result::Result<(), ConfigError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {violation}")?;
        }
        Ok(())
    }
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// Batch outcome of a full validation pass; names every offending field.
    #[error("invalid configuration:\n{0}")]
    Validation(ValidationReport),

    /// The proxy specification could not be parsed. The offending value is
    /// rendered through the secret masker because proxy strings may embed
    /// credentials.
    #[error("unparseable proxy specification: {masked}")]
    InvalidProxy { masked: String },

    /// The configured server has no endpoint for the requested routing mode.
    #[error("no {mode} endpoint registered for server {server}")]
    UnresolvedServer {
        server: ServerId,
        mode: &'static str,
    },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("WebSocket error: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Error::WebSocket(Box::new(err))
    }
}
