//! Infoextract LLM Provider Layer
//!
//! Implementations of the [`LlmProvider`] collaborator trait from
//! `infoextract-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic stub for testing
//! - `OpenAiProvider`: OpenAI chat completions over HTTPS
//!
//! # Examples
//!
//! ```
//! use infoextract_llm::parse_candidates;
//!
//! let records = parse_candidates(r#"{"records": [{"name": "Ana", "age": "30"}]}"#).unwrap();
//! assert_eq!(records.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod openai;
pub mod parser;

use async_trait::async_trait;
use infoextract_domain::{CandidateRecord, LlmProvider, PromptSpec, UpstreamError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub use openai::{OpenAiConfig, OpenAiProvider};
pub use parser::parse_candidates;

/// What a [`MockProvider`] does when called
#[derive(Debug, Clone)]
enum MockBehavior {
    /// Parse this text as the completion body
    Respond(String),
    /// Fail with this error
    Fail(UpstreamError),
    /// Never answer
    Hang,
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured output without making any network
/// calls. The canned text goes through the same parser as real completions.
///
/// # Examples
///
/// ```
/// use infoextract_llm::MockProvider;
/// use infoextract_domain::UpstreamError;
///
/// let ok = MockProvider::new("[]");
/// let down = MockProvider::failing(UpstreamError::Unavailable("down".into()));
/// let stuck = MockProvider::hanging();
/// assert_eq!(ok.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    call_count: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<PromptSpec>>>,
}

impl MockProvider {
    /// Create a mock that answers every prompt with `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Respond(response.into()))
    }

    /// Create a mock that fails every call with `error`
    pub fn failing(error: UpstreamError) -> Self {
        Self::with_behavior(MockBehavior::Fail(error))
    }

    /// Create a mock whose calls never complete
    pub fn hanging() -> Self {
        Self::with_behavior(MockBehavior::Hang)
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the number of times send was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// The most recent prompt received, if any
    pub fn last_prompt(&self) -> Option<PromptSpec> {
        self.last_prompt.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("[]")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn send(&self, prompt: &PromptSpec) -> Result<Vec<CandidateRecord>, UpstreamError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.clone());
        }

        match &self.behavior {
            MockBehavior::Respond(body) => parse_candidates(body),
            MockBehavior::Fail(error) => Err(error.clone()),
            MockBehavior::Hang => std::future::pending().await,
        }
    }
}
