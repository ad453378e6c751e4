//! Run command implementation.

use crate::cli::RunArgs;
use crate::error::Result;
use crate::input::{PieceInput, PieceOutput};
use crate::output::Formatter;
use infoextract_domain::LlmProvider;
use infoextract_extractor::Extractor;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute the run command.
///
/// Relative `input_file_path` values resolve against the input document's
/// directory, or the working directory when reading from stdin.
pub async fn execute_run<L: LlmProvider>(
    args: RunArgs,
    extractor: &Extractor<L>,
    formatter: &Formatter,
) -> Result<PieceOutput> {
    let (json_data, base_dir) = match args.input {
        Some(path) if !args.stdin => {
            let contents = fs::read_to_string(&path).map_err(|source| crate::CliError::ReadFile {
                path: path.clone(),
                source,
            })?;
            (contents, base_dir_of(&path))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            (buffer, PathBuf::from("."))
        }
    };

    let input = PieceInput::from_json(&json_data)?;
    debug!("Resolved input file {}", input.input_file_path.display());

    let request = input.into_request(&base_dir)?;
    super::extract_and_emit(extractor, &request, args.output.as_deref(), formatter).await
}

fn base_dir_of(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
