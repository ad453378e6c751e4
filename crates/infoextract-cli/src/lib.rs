//! Infoextract CLI library.
//!
//! This library provides the host side of the extractor: the piece input
//! and output documents, configuration loading, command execution and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use input::{default_extract_items, PieceInput, PieceOutput};
pub use output::Formatter;
