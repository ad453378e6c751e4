//! Extraction request - one invocation's read-only input

use crate::error::SchemaError;
use crate::field::FieldDescriptor;
use crate::model::ModelSelector;
use crate::shape::ExtractionShape;

/// Everything the pipeline needs for one extraction, except the API key
///
/// Constructed once per invocation and read-only afterwards. Construction
/// checks the same invariants as the schema builder, so a request always
/// has at least one field and no duplicate names.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    source_text: String,
    additional_context: Option<String>,
    fields: Vec<FieldDescriptor>,
    model: ModelSelector,
}

impl ExtractionRequest {
    /// Create a new request
    ///
    /// # Errors
    /// Returns [`SchemaError`] if `fields` is empty or contains a duplicate name
    pub fn new(
        source_text: impl Into<String>,
        additional_context: Option<String>,
        fields: Vec<FieldDescriptor>,
        model: ModelSelector,
    ) -> Result<Self, SchemaError> {
        ExtractionShape::build(&fields)?;

        Ok(Self {
            source_text: source_text.into(),
            additional_context: additional_context.filter(|ctx| !ctx.trim().is_empty()),
            fields,
            model,
        })
    }

    /// Text to extract from
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Extra hints for the model, if any
    pub fn additional_context(&self) -> Option<&str> {
        self.additional_context.as_deref()
    }

    /// Requested fields in order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Target model
    pub fn model(&self) -> ModelSelector {
        self.model
    }
}
