//! Trait definitions for external interactions
//!
//! The LLM collaborator is the only external dependency of the pipeline.
//! Implementations live in `infoextract-llm`.

use crate::model::ModelSelector;
use crate::record::CandidateRecord;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Fully formatted request handed to the collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    /// Target model
    pub model: ModelSelector,

    /// Standing instructions (system message)
    pub instructions: String,

    /// Source text plus any additional context (user message)
    pub input: String,

    /// JSON Schema the records should follow
    pub response_schema: Value,
}

/// Failures surfaced by the collaborator
///
/// A failed call is always an error, never an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Network or transport failure, or a provider-side outage
    #[error("LLM provider unavailable: {0}")]
    Unavailable(String),

    /// Provider backpressure
    #[error("LLM provider rate limit exceeded: {0}")]
    RateLimited(String),

    /// Bad or missing API key
    #[error("LLM provider rejected credentials: {0}")]
    Auth(String),

    /// The call did not finish in time
    #[error("LLM request timed out: {0}")]
    Timeout(String),

    /// The provider answered, but not with readable candidate records
    #[error("Invalid response from LLM provider: {0}")]
    InvalidResponse(String),
}

impl UpstreamError {
    /// Whether a caller-side retry policy may try again
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            UpstreamError::Unavailable(_) | UpstreamError::RateLimited(_) | UpstreamError::Timeout(_)
        )
    }
}

/// Trait for the external LLM completion collaborator
///
/// Implementations perform a single attempt: no retries, no hidden
/// fallbacks. Cancellation is the caller's job (dropping the future).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the prompt and return the raw candidate records
    async fn send(&self, prompt: &PromptSpec) -> Result<Vec<CandidateRecord>, UpstreamError>;
}

#[async_trait]
impl<T> LlmProvider for Arc<T>
where
    T: LlmProvider + ?Sized,
{
    async fn send(&self, prompt: &PromptSpec) -> Result<Vec<CandidateRecord>, UpstreamError> {
        (**self).send(prompt).await
    }
}
