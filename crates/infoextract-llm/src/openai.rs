//! OpenAI Provider Implementation
//!
//! Sends extraction prompts to the OpenAI chat completions API and parses the
//! answer into candidate records.
//!
//! # Features
//!
//! - Bearer authentication from an out-of-band [`ApiKey`]
//! - JSON-object response format for models that support it
//! - HTTP status mapped onto the upstream error taxonomy
//!
//! The provider makes exactly one attempt per call. Retries and timeouts are
//! owned by the caller.
//!
//! # Examples
//!
//! ```no_run
//! use infoextract_domain::ApiKey;
//! use infoextract_llm::{OpenAiConfig, OpenAiProvider};
//!
//! let provider = OpenAiProvider::new(ApiKey::new("sk-..."), OpenAiConfig::default());
//! ```

use crate::parser::parse_candidates;
use async_trait::async_trait;
use infoextract_domain::{ApiKey, CandidateRecord, LlmProvider, PromptSpec, UpstreamError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default OpenAI API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Configuration for [`OpenAiProvider`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// API base URL (without `/chat/completions`)
    pub endpoint: String,

    /// Sampling temperature; 0.0 keeps extraction deterministic
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: 0.0,
        }
    }
}

impl OpenAiConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint cannot be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature {} out of range [0.0, 2.0]",
                self.temperature
            ));
        }
        Ok(())
    }
}

/// OpenAI chat completions provider
pub struct OpenAiProvider {
    config: OpenAiConfig,
    api_key: ApiKey,
    client: reqwest::Client,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    pub fn new(api_key: ApiKey, config: OpenAiConfig) -> Self {
        Self {
            config,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Provider configuration
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    fn request_body<'a>(&self, prompt: &'a PromptSpec) -> ChatRequest<'a> {
        ChatRequest {
            model: prompt.model.as_str(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.instructions,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.input,
                },
            ],
            temperature: self.config.temperature,
            response_format: prompt.model.supports_json_mode().then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.endpoint.trim_end_matches('/'))
    }

    /// Send a prompt and return the raw completion text
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Auth`] for a blank key or HTTP 401/403
    /// - [`UpstreamError::RateLimited`] for HTTP 429
    /// - [`UpstreamError::Unavailable`] for transport failures, 404 and 5xx
    /// - [`UpstreamError::Timeout`] if the transport reports a timeout
    /// - [`UpstreamError::InvalidResponse`] for other statuses or unreadable bodies
    pub async fn complete(&self, prompt: &PromptSpec) -> Result<String, UpstreamError> {
        if self.api_key.is_empty() {
            return Err(UpstreamError::Auth("API key is missing".to_string()));
        }

        let request_body = self.request_body(prompt);

        debug!(model = prompt.model.as_str(), "Sending chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose())
            .json(&request_body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, &error_text, prompt.model.as_str()));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| UpstreamError::InvalidResponse("Response has no message content".to_string()))
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn send(&self, prompt: &PromptSpec) -> Result<Vec<CandidateRecord>, UpstreamError> {
        let content = self.complete(prompt).await?;
        debug!("Completion length: {} chars", content.len());
        parse_candidates(&content)
    }
}

fn transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout(e.to_string())
    } else {
        UpstreamError::Unavailable(format!("Request failed: {}", e))
    }
}

fn status_error(status: StatusCode, body: &str, model: &str) -> UpstreamError {
    let detail = format!("HTTP {}: {}", status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => UpstreamError::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited(detail),
        StatusCode::NOT_FOUND => {
            UpstreamError::Unavailable(format!("Model not available: {}", model))
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => UpstreamError::Timeout(detail),
        s if s.is_server_error() => UpstreamError::Unavailable(detail),
        _ => UpstreamError::InvalidResponse(detail),
    }
}
