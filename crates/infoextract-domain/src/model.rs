//! Model selector - the closed set of completion models a request may target

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported OpenAI completion models
///
/// Unknown identifiers are rejected when the request is built, not inside
/// the upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ModelSelector {
    /// `gpt-3.5-turbo-1106`
    #[default]
    Gpt35Turbo1106,

    /// `gpt-4`
    Gpt4,
}

impl ModelSelector {
    /// Every supported model
    pub fn all() -> &'static [ModelSelector] {
        &[ModelSelector::Gpt35Turbo1106, ModelSelector::Gpt4]
    }

    /// Get the provider-side model identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSelector::Gpt35Turbo1106 => "gpt-3.5-turbo-1106",
            ModelSelector::Gpt4 => "gpt-4",
        }
    }

    /// Whether the model honours the JSON-object response format
    pub fn supports_json_mode(&self) -> bool {
        match self {
            ModelSelector::Gpt35Turbo1106 => true,
            ModelSelector::Gpt4 => false,
        }
    }
}

impl fmt::Display for ModelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelSelector {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|model| model.as_str() == s.trim())
            .ok_or_else(|| SchemaError::UnsupportedModel(s.to_string()))
    }
}

impl TryFrom<String> for ModelSelector {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModelSelector> for &'static str {
    fn from(model: ModelSelector) -> Self {
        model.as_str()
    }
}
