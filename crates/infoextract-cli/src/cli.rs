//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use infoextract_domain::{FieldDescriptor, FieldKind, ModelSelector, SchemaError};
use std::path::PathBuf;

/// Infoextract CLI - Pull structured records out of free text with an LLM.
#[derive(Debug, Parser)]
#[command(name = "infoextract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// JSON document (default)
    Json,
    /// Table format
    Table,
    /// Record count only
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run an extraction described by a piece input document
    Run(RunArgs),

    /// Extract fields from a text file
    Extract(ExtractArgs),

    /// List supported models
    Models,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Input document path
    #[arg(short, long, conflicts_with = "stdin", required_unless_present = "stdin")]
    pub input: Option<PathBuf>,

    /// Read the input document from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text file to analyze
    pub file: PathBuf,

    /// Field to extract as `name:type[:description]`; defaults to name and age
    #[arg(short = 'i', long = "item", value_parser = parse_item)]
    pub items: Vec<FieldDescriptor>,

    /// Model identifier
    #[arg(short, long, default_value_t = ModelSelector::default())]
    pub model: ModelSelector,

    /// Additional information for the model
    #[arg(long)]
    pub info: Option<String>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

/// Parse `name:type[:description]`.
///
/// The type may be omitted (`name` alone) and defaults to string. The
/// description is everything after the second colon.
pub fn parse_item(s: &str) -> Result<FieldDescriptor, SchemaError> {
    let mut parts = s.splitn(3, ':');
    let name = parts.next().unwrap_or_default().trim();
    let kind = match parts.next().map(str::trim) {
        Some(kind) if !kind.is_empty() => kind.parse::<FieldKind>()?,
        _ => FieldKind::default(),
    };
    let description = parts.next().unwrap_or_default().trim();

    FieldDescriptor::new(name, kind, description)
}
