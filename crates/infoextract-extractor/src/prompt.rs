//! LLM prompt construction for schema-driven extraction

use infoextract_domain::{ExtractionShape, ModelSelector, PromptSpec};

/// Builds the prompt sent to the LLM collaborator
pub struct PromptBuilder<'a> {
    text: &'a str,
    shape: &'a ExtractionShape,
    model: ModelSelector,
    additional_context: Option<&'a str>,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(text: &'a str, shape: &'a ExtractionShape, model: ModelSelector) -> Self {
        Self {
            text,
            shape,
            model,
            additional_context: None,
        }
    }

    /// Add caller-supplied hints about the text
    pub fn with_additional_context(mut self, context: Option<&'a str>) -> Self {
        self.additional_context = context;
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> PromptSpec {
        let schema = self.shape.json_schema();

        let mut instructions = String::new();
        instructions.push_str(EXTRACTION_INSTRUCTIONS);
        instructions.push_str("\n\nFields to extract:\n");
        for field in self.shape.fields() {
            instructions.push_str(&format!("- {} ({})", field.name(), field.kind()));
            if !field.description().is_empty() {
                instructions.push_str(&format!(": {}", field.description()));
            }
            instructions.push('\n');
        }
        instructions.push_str("\nJSON Schema of the answer:\n");
        instructions.push_str(&schema.to_string());
        instructions.push_str("\n\n");
        instructions.push_str(OUTPUT_FORMAT_REMINDER);

        let mut input = String::new();
        if let Some(context) = self.additional_context {
            input.push_str("Additional information:\n");
            input.push_str(context);
            input.push_str("\n\n");
        }
        input.push_str("Text to analyze:\n");
        input.push_str("---\n");
        input.push_str(self.text);
        input.push_str("\n---\n");

        PromptSpec {
            model: self.model,
            instructions,
            input,
            response_schema: schema,
        }
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You extract structured information from text.
Find every entity in the text that the requested fields describe and return one record per entity.

Rules:
- Use only the field names listed below, spelled exactly as given
- Leave a field out of a record when the text does not state it; never guess
- Integer fields hold whole numbers, float fields hold numbers, boolean fields hold true or false
- Array fields hold JSON arrays
- Return an empty list when nothing in the text matches"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON object only, no additional text):
{"records": [{"<field>": <value>, ...}, ...]}

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;
