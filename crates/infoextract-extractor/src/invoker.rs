//! Extraction invoker - one bounded call to the LLM collaborator

use crate::error::ExtractorError;
use crate::prompt::PromptBuilder;
use infoextract_domain::{
    CandidateRecord, ExtractionShape, LlmProvider, ModelSelector, UpstreamError,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Formats the prompt and sends it to the collaborator, once
///
/// No retries: every failure is surfaced to the caller as-is. The call is
/// cancelled when `timeout` elapses.
pub struct ExtractionInvoker<L> {
    provider: Arc<L>,
    timeout: Duration,
}

impl<L> ExtractionInvoker<L>
where
    L: LlmProvider,
{
    /// Create a new invoker
    pub fn new(provider: Arc<L>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Configured upstream timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Request candidate records for `shape` from the model
    ///
    /// # Errors
    ///
    /// Returns the upstream error classes of [`ExtractorError`]. Elapsing
    /// the timeout yields [`ExtractorError::UpstreamTimeout`] and no records.
    pub async fn invoke(
        &self,
        source_text: &str,
        additional_context: Option<&str>,
        shape: &ExtractionShape,
        model: ModelSelector,
    ) -> Result<Vec<CandidateRecord>, ExtractorError> {
        let prompt = PromptBuilder::new(source_text, shape, model)
            .with_additional_context(additional_context)
            .build();

        debug!(
            "Prompt length: {} chars instructions, {} chars input",
            prompt.instructions.len(),
            prompt.input.len()
        );

        match timeout(self.timeout, self.provider.send(&prompt)).await {
            Ok(Ok(candidates)) => {
                debug!("Received {} candidate records", candidates.len());
                Ok(candidates)
            }
            Ok(Err(e)) => {
                warn!(retriable = e.is_retriable(), "LLM call failed: {}", e);
                Err(e.into())
            }
            Err(_) => {
                warn!("LLM call exceeded {:?}", self.timeout);
                Err(ExtractorError::UpstreamTimeout(UpstreamError::Timeout(
                    format!("no response within {:?}", self.timeout),
                )))
            }
        }
    }
}
