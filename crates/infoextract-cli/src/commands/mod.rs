//! Command implementations.

pub mod extract;
pub mod models;
pub mod run;

pub use self::extract::execute_extract;
pub use self::models::execute_models;
pub use self::run::execute_run;

use crate::config::Config;
use crate::error::Result;
use crate::input::PieceOutput;
use crate::output::{emit, Formatter};
use infoextract_domain::{ApiKey, ExtractionRequest, LlmProvider, UpstreamError};
use infoextract_extractor::Extractor;
use infoextract_llm::OpenAiProvider;
use std::path::Path;

/// Build the OpenAI-backed extractor.
///
/// A missing or blank key fails here, before any network traffic.
pub fn build_extractor(config: &Config, api_key: Option<&str>) -> Result<Extractor<OpenAiProvider>> {
    let api_key = api_key
        .map(ApiKey::new)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| UpstreamError::Auth("OPENAI_API_KEY is not set".to_string()))?;

    let provider = OpenAiProvider::new(api_key, config.openai.clone());
    Ok(Extractor::new(provider, config.extractor.clone()))
}

/// Run one request and write the result.
pub async fn extract_and_emit<L: LlmProvider>(
    extractor: &Extractor<L>,
    request: &ExtractionRequest,
    output: Option<&Path>,
    formatter: &Formatter,
) -> Result<PieceOutput> {
    let result = extractor.extract(request).await?;
    let piece_output = PieceOutput::new(result);

    emit(&formatter.format_output(&piece_output, request.fields())?, output)?;

    if let Some(path) = output {
        eprintln!(
            "{}",
            formatter.success(&format!(
                "Extracted {} record(s) to {}",
                piece_output.output_data.len(),
                path.display()
            ))
        );
    }

    Ok(piece_output)
}
