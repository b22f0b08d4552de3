//! Error types for the docschema CLI

use std::path::PathBuf;

use docschema_fields::FieldsError;
use thiserror::Error;

/// Result type for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised while loading inputs or running a command
#[derive(Error, Debug)]
pub enum CliError {
    /// A file could not be read
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file could not be written
    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An edit script could not be decoded
    #[error("Failed to parse script {path}: {message}")]
    Script { path: PathBuf, message: String },

    /// File extension not recognised
    #[error("Unsupported file format: {path} (expected .yaml, .yml, .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration could not be loaded
    #[error("Failed to load configuration")]
    Config {
        #[source]
        source: Box<figment::Error>,
    },

    /// A script command was rejected by the registry
    #[error("Command {index} ({op}) failed")]
    Command {
        index: usize,
        op: &'static str,
        source: FieldsError,
    },

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Registry error outside of a script command
    #[error(transparent)]
    Fields(#[from] FieldsError),
}

impl CliError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn script(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Script {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<figment::Error> for CliError {
    fn from(error: figment::Error) -> Self {
        CliError::Config {
            source: Box::new(error),
        }
    }
}
