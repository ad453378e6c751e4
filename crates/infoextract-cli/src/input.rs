//! Piece input and output documents.
//!
//! A host pipeline hands the extractor a JSON document naming the source
//! file, the model and the fields to pull out, and expects a JSON document
//! with the records back.

use crate::error::{CliError, Result};
use infoextract_domain::{
    ExtractionRequest, ExtractionResult, FieldDescriptor, FieldKind, ModelSelector, SchemaError,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Input document for `infoextract run`.
///
/// Model and field kinds stay as strings here so that an unknown value
/// surfaces as a schema error rather than a JSON error.
#[derive(Debug, Clone, Deserialize)]
pub struct PieceInput {
    /// File holding the text to analyze
    pub input_file_path: PathBuf,

    /// Extra hints for the model
    #[serde(default)]
    pub additional_information: Option<String>,

    /// Model identifier
    #[serde(default)]
    pub openai_model: Option<String>,

    /// Fields to extract; [`default_extract_items`] when absent
    #[serde(default)]
    pub extract_items: Option<Vec<InputItem>>,
}

/// One entry of `extract_items`.
#[derive(Debug, Clone, Deserialize)]
pub struct InputItem {
    /// Field name
    pub name: String,

    /// Kind name, `string` when absent
    #[serde(rename = "type", default = "default_item_type")]
    pub kind: String,

    /// Hint for the model
    #[serde(default)]
    pub description: String,
}

/// Output document written after a successful extraction.
#[derive(Debug, Clone, Serialize)]
pub struct PieceOutput {
    /// Validated records in model order
    pub output_data: ExtractionResult,
}

impl InputItem {
    /// Turn the item into a checked descriptor
    pub fn into_descriptor(self) -> std::result::Result<FieldDescriptor, SchemaError> {
        let kind = self.kind.parse::<FieldKind>()?;
        FieldDescriptor::new(self.name, kind, self.description)
    }
}

impl PieceInput {
    /// Parse an input document.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Selected model, the default when none was given.
    pub fn model(&self) -> std::result::Result<ModelSelector, SchemaError> {
        match &self.openai_model {
            Some(id) => id.parse(),
            None => Ok(ModelSelector::default()),
        }
    }

    /// Requested fields, the default person fields when none were given.
    pub fn fields(&self) -> std::result::Result<Vec<FieldDescriptor>, SchemaError> {
        match &self.extract_items {
            Some(items) => items.iter().cloned().map(InputItem::into_descriptor).collect(),
            None => Ok(default_extract_items()),
        }
    }

    /// Read the source file and build the request.
    ///
    /// Relative source paths resolve against `base_dir`.
    pub fn into_request(self, base_dir: &Path) -> Result<ExtractionRequest> {
        let model = self.model()?;
        let fields = self.fields()?;
        let source_text = read_source(&base_dir.join(&self.input_file_path))?;

        Ok(ExtractionRequest::new(
            source_text,
            self.additional_information,
            fields,
            model,
        )?)
    }
}

impl PieceOutput {
    /// Wrap a result for output.
    pub fn new(output_data: ExtractionResult) -> Self {
        Self { output_data }
    }
}

/// Default fields: a person's name and age.
///
/// Returns a fresh list on every call.
pub fn default_extract_items() -> Vec<FieldDescriptor> {
    [
        ("name", FieldKind::String, "Name of the person."),
        ("age", FieldKind::Integer, "Age of the person."),
    ]
    .into_iter()
    .filter_map(|(name, kind, description)| FieldDescriptor::new(name, kind, description).ok())
    .collect()
}

/// Read a UTF-8 source file.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn default_item_type() -> String {
    FieldKind::String.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use infoextract_extractor::ExtractorError;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_input_uses_defaults() {
        let input = PieceInput::from_json(r#"{"input_file_path": "memo.txt"}"#).unwrap();

        assert_eq!(input.model().unwrap(), ModelSelector::Gpt35Turbo1106);
        assert!(input.additional_information.is_none());

        let fields = input.fields().unwrap();
        assert_eq!(fields, default_extract_items());
        assert_eq!(fields[0].name(), "name");
        assert_eq!(fields[1].kind(), FieldKind::Integer);
    }

    #[test]
    fn test_default_items_are_fresh() {
        let mut first = default_extract_items();
        first.clear();
        assert_eq!(default_extract_items().len(), 2);
    }

    #[test]
    fn test_full_input() {
        let input = PieceInput::from_json(
            &json!({
                "input_file_path": "memo.txt",
                "additional_information": "Quarterly staff memo",
                "openai_model": "gpt-4",
                "extract_items": [
                    {"name": "city", "description": "City mentioned."},
                    {"name": "population", "type": "integer"},
                    {"name": "coastal", "type": "boolean"}
                ]
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(input.model().unwrap(), ModelSelector::Gpt4);
        let fields = input.fields().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].kind(), FieldKind::String);
        assert_eq!(fields[0].description(), "City mentioned.");
        assert_eq!(fields[1].kind(), FieldKind::Integer);
        assert_eq!(fields[2].kind(), FieldKind::Boolean);
    }

    #[test]
    fn test_unknown_model_is_a_schema_error() {
        let input = PieceInput::from_json(
            r#"{"input_file_path": "memo.txt", "openai_model": "davinci"}"#,
        )
        .unwrap();

        assert!(matches!(
            input.model(),
            Err(SchemaError::UnsupportedModel(ref id)) if id == "davinci"
        ));
    }

    #[test]
    fn test_unknown_field_type_is_a_schema_error() {
        let input = PieceInput::from_json(
            r#"{"input_file_path": "memo.txt", "extract_items": [{"name": "x", "type": "date"}]}"#,
        )
        .unwrap();

        assert!(matches!(input.fields(), Err(SchemaError::UnknownFieldType(_))));
    }

    #[test]
    fn test_explicit_empty_items_fail_at_request() {
        let mut source = NamedTempFile::new().unwrap();
        write!(source, "Ana is 30.").unwrap();

        let input = PieceInput::from_json(
            &json!({
                "input_file_path": source.path(),
                "extract_items": []
            })
            .to_string(),
        )
        .unwrap();

        let result = input.into_request(Path::new("."));
        assert!(matches!(
            result,
            Err(CliError::Extractor(ExtractorError::InvalidSchema(SchemaError::NoFields)))
        ));
    }

    #[test]
    fn test_into_request_reads_relative_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("memo.txt"), "Ana is 30.").unwrap();

        let input = PieceInput::from_json(
            r#"{"input_file_path": "memo.txt", "additional_information": "  "}"#,
        )
        .unwrap();
        let request = input.into_request(dir.path()).unwrap();

        assert_eq!(request.source_text(), "Ana is 30.");
        assert_eq!(request.additional_context(), None);
        assert_eq!(request.fields().len(), 2);
    }

    #[test]
    fn test_missing_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = PieceInput::from_json(r#"{"input_file_path": "absent.txt"}"#).unwrap();

        assert!(matches!(
            input.into_request(dir.path()),
            Err(CliError::ReadFile { .. })
        ));
    }

    #[test]
    fn test_output_document_shape() {
        let record = json!({"name": "Ana", "age": 30}).as_object().cloned().unwrap();
        let output = PieceOutput::new(ExtractionResult::new(vec![record]));

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({"output_data": [{"name": "Ana", "age": 30}]})
        );
    }
}
