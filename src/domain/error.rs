use std::io;

use thiserror::Error;

use super::context::Capability;

/// Library-wide error type for svcgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A JSON document could not be parsed or serialized.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The parent context does not provide a capability the generator requires.
    #[error("Standalone execution is not supported: parent context does not provide '{capability}'")]
    UnsupportedContext { capability: Capability },

    /// A service binding in the configuration does not have the expected shape.
    #[error("Invalid binding for service '{service}': {reason}")]
    InvalidServiceBinding { service: String, reason: String },

    /// Embedded service catalog metadata is invalid.
    #[error("Invalid catalog entry for service '{service}': {reason}")]
    InvalidServiceCatalog { service: String, reason: String },

    /// Label table is malformed.
    #[error("Invalid label table: {0}")]
    InvalidLabelTable(String),

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Json { path: path.into(), source }
    }
}
