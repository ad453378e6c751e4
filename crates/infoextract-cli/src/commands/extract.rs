//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::input::{default_extract_items, read_source, PieceOutput};
use crate::output::Formatter;
use infoextract_domain::{ExtractionRequest, LlmProvider};
use infoextract_extractor::Extractor;

/// Execute the extract command.
pub async fn execute_extract<L: LlmProvider>(
    args: ExtractArgs,
    extractor: &Extractor<L>,
    formatter: &Formatter,
) -> Result<PieceOutput> {
    let fields = if args.items.is_empty() {
        default_extract_items()
    } else {
        args.items
    };

    let source_text = read_source(&args.file)?;
    let request = ExtractionRequest::new(source_text, args.info, fields, args.model)?;

    super::extract_and_emit(extractor, &request, args.output.as_deref(), formatter).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use infoextract_domain::{FieldDescriptor, FieldKind, ModelSelector};
    use infoextract_extractor::ExtractorConfig;
    use infoextract_llm::MockProvider;
    use serde_json::json;
    use std::fs;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_extract_with_items() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "Lisbon has about 545000 people.").unwrap();

        let llm = Arc::new(MockProvider::new(
            r#"{"records": [{"city": "Lisbon", "population": "545000"}]}"#,
        ));
        let extractor = Extractor::with_shared_provider(Arc::clone(&llm), ExtractorConfig::default());
        let args = ExtractArgs {
            file,
            items: vec![
                FieldDescriptor::new("city", FieldKind::String, "").unwrap(),
                FieldDescriptor::new("population", FieldKind::Integer, "").unwrap(),
            ],
            model: ModelSelector::Gpt4,
            info: Some("Travel notes".to_string()),
            output: Some(dir.path().join("out.json")),
        };

        let output = execute_extract(args, &extractor, &Formatter::new(OutputFormat::Json, false))
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&output.output_data).unwrap(),
            json!([{"city": "Lisbon", "population": 545000}])
        );
        let prompt = llm.last_prompt().unwrap();
        assert_eq!(prompt.model, ModelSelector::Gpt4);
        assert!(prompt.input.contains("Travel notes"));
    }

    #[tokio::test]
    async fn test_extract_defaults_to_person_fields() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("memo.txt");
        fs::write(&file, "Ana is 30.").unwrap();

        let llm = Arc::new(MockProvider::default());
        let extractor = Extractor::with_shared_provider(Arc::clone(&llm), ExtractorConfig::default());
        let args = ExtractArgs {
            file,
            items: vec![],
            model: ModelSelector::default(),
            info: None,
            output: Some(dir.path().join("out.json")),
        };

        execute_extract(args, &extractor, &Formatter::new(OutputFormat::Quiet, false))
            .await
            .unwrap();

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.instructions.contains("- name (string): Name of the person."));
        assert!(prompt.instructions.contains("- age (integer): Age of the person."));
    }
}
