//! Error types for the CLI application.

use infoextract_domain::{SchemaError, UpstreamError};
use infoextract_extractor::ExtractorError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction pipeline error
    #[error("{0}")]
    Extractor(#[from] ExtractorError),

    /// Source or input file could not be read
    #[error("Cannot read {}: {source}", path.display())]
    ReadFile {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        CliError::Extractor(e.into())
    }
}

impl From<UpstreamError> for CliError {
    fn from(e: UpstreamError) -> Self {
        CliError::Extractor(e.into())
    }
}
