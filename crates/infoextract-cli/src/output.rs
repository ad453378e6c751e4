//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::input::PieceOutput;
use colored::*;
use infoextract_domain::{FieldDescriptor, ModelSelector};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extraction result.
    ///
    /// `fields` fixes the table columns and their order.
    pub fn format_output(&self, output: &PieceOutput, fields: &[FieldDescriptor]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
            OutputFormat::Table => Ok(self.format_records_table(output, fields)),
            OutputFormat::Quiet => Ok(output.output_data.len().to_string()),
        }
    }

    fn format_records_table(&self, output: &PieceOutput, fields: &[FieldDescriptor]) -> String {
        if output.output_data.is_empty() {
            return self.colorize("No records extracted.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(fields.iter().map(|f| f.name().to_string()));

        for record in output.output_data.iter() {
            builder.push_record(
                fields
                    .iter()
                    .map(|f| record.get(f.name()).map_or_else(|| "-".to_string(), cell)),
            );
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the list of supported models.
    pub fn format_models(&self, models: &[ModelSelector]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let ids: Vec<&str> = models.iter().map(|m| m.as_str()).collect();
                Ok(serde_json::to_string_pretty(&ids)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Model", "JSON mode", "Default"]);
                for model in models {
                    builder.push_record([
                        model.as_str(),
                        yes_no(model.supports_json_mode()),
                        yes_no(*model == ModelSelector::default()),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(models
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn emit(contents: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{}\n", contents))?;
        }
        None => println!("{}", contents),
    }
    Ok(())
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
