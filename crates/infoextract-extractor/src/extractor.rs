//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::invoker::ExtractionInvoker;
use crate::validator::ResultValidator;
use infoextract_domain::{
    ExtractionRequest, ExtractionResult, ExtractionShape, FieldDescriptor, LlmProvider,
    ModelSelector,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// The Extractor turns unstructured text into records of the requested shape
///
/// Schema Builder → Invoker → Validator, each step completing before the
/// next one starts. The extractor holds no per-request state, so one
/// instance can serve concurrent requests.
pub struct Extractor<L> {
    invoker: ExtractionInvoker<L>,
    config: ExtractorConfig,
}

impl<L> Extractor<L>
where
    L: LlmProvider,
{
    /// Create a new Extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self::with_shared_provider(Arc::new(llm_provider), config)
    }

    /// Create a new Extractor around a provider shared with other owners
    pub fn with_shared_provider(llm_provider: Arc<L>, config: ExtractorConfig) -> Self {
        Self {
            invoker: ExtractionInvoker::new(llm_provider, config.request_timeout()),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the pipeline for a prepared request
    pub async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractorError> {
        self.extract_fields(
            request.source_text(),
            request.additional_context(),
            request.fields(),
            request.model(),
        )
        .await
    }

    /// Run the pipeline from raw parts.
    ///
    /// The fields are turned into a shape first. If that fails, no
    /// upstream call is made.
    pub async fn extract_fields(
        &self,
        source_text: &str,
        additional_context: Option<&str>,
        fields: &[FieldDescriptor],
        model: ModelSelector,
    ) -> Result<ExtractionResult, ExtractorError> {
        let start_time = Instant::now();

        let shape = ExtractionShape::build(fields)?;

        let text_length = source_text.chars().count();
        if text_length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                text_length,
                self.config.max_text_length,
            ));
        }

        info!(
            "Starting extraction of {} fields with {}, text length {}",
            shape.len(),
            model,
            text_length
        );

        let candidates = self
            .invoker
            .invoke(source_text, additional_context, &shape, model)
            .await?;

        let result = ResultValidator::new(&shape).validate(candidates);

        info!(
            "Extraction complete: {} records in {} ms",
            result.len(),
            start_time.elapsed().as_millis()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infoextract_domain::FieldKind;
    use infoextract_llm::MockProvider;

    fn fields() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor::new("name", FieldKind::String, "").unwrap()]
    }

    #[tokio::test]
    async fn test_extract_empty_response() {
        let extractor = Extractor::new(MockProvider::new("[]"), ExtractorConfig::default());
        let result = extractor
            .extract_fields("Some text", None, &fields(), ModelSelector::default())
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_extract_text_too_long() {
        let llm = Arc::new(MockProvider::default());
        let mut config = ExtractorConfig::default();
        config.max_text_length = 10;
        let extractor = Extractor::with_shared_provider(Arc::clone(&llm), config);

        let result = extractor
            .extract_fields(&"a".repeat(11), None, &fields(), ModelSelector::default())
            .await;
        assert!(matches!(result, Err(ExtractorError::TextTooLong(11, 10))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_text_length_counts_chars() {
        let mut config = ExtractorConfig::default();
        config.max_text_length = 3;
        let extractor = Extractor::new(MockProvider::default(), config);

        let result = extractor
            .extract_fields("äöü", None, &fields(), ModelSelector::default())
            .await;
        assert!(result.is_ok());
    }
}
