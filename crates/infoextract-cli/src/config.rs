//! Configuration management for the CLI.
//!
//! The API key is never read from the file. It comes from the environment
//! or the command line.

use crate::error::{CliError, Result};
use infoextract_extractor::ExtractorConfig;
use infoextract_llm::OpenAiConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Pipeline limits
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// OpenAI endpoint settings
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"output_data": [...]}` document
    Json,
    /// Table format
    Table,
    /// Record count only
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".infoextract").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::read(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.extractor
            .validate()
            .map_err(|e| CliError::Config(format!("[extractor] {}", e)))?;
        self.openai
            .validate()
            .map_err(|e| CliError::Config(format!("[openai] {}", e)))?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Json,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Json
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.extractor.max_text_length, 50_000);
        assert_eq!(config.extractor.request_timeout_secs, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [extractor]
            request_timeout_secs = 30

            [settings]
            format = "table"
            "#,
        )
        .unwrap();

        assert_eq!(config.extractor.request_timeout_secs, 30);
        assert_eq!(config.extractor.max_text_length, 50_000);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.settings.color);
        assert_eq!(config.openai, OpenAiConfig::default());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[openai]\nendpoint = \"http://localhost:9999/v1\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.openai.endpoint, "http://localhost:9999/v1");
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(CliError::ReadFile { .. })));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[extractor]\nrequest_timeout_secs = 0").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(CliError::Config(ref msg)) if msg.starts_with("[extractor]")));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Config::from_toml("[extractor"),
            Err(CliError::Toml(_))
        ));
    }
}
