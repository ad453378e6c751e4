//! Parse model output into candidate records

use infoextract_domain::{CandidateRecord, UpstreamError};
use serde_json::Value;
use tracing::warn;

/// Parse a completion body into candidate records.
///
/// Accepted layouts:
/// - a JSON array of objects
/// - an object holding such an array under `"records"`
/// - a single bare object, read as one record
///
/// Markdown code fences are stripped first. Array entries that are not
/// objects are skipped. Anything else is [`UpstreamError::InvalidResponse`].
pub fn parse_candidates(response: &str) -> Result<Vec<CandidateRecord>, UpstreamError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(json_str)
        .map_err(|e| UpstreamError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    match json {
        Value::Array(items) => Ok(collect_objects(items)),
        Value::Object(mut obj) => match obj.remove("records") {
            Some(Value::Array(items)) => Ok(collect_objects(items)),
            Some(_) => Err(UpstreamError::InvalidResponse(
                "'records' is not an array".to_string(),
            )),
            None => Ok(vec![obj]),
        },
        other => Err(UpstreamError::InvalidResponse(format!(
            "Expected JSON array or object, got {}",
            kind_name(&other)
        ))),
    }
}

fn collect_objects(items: Vec<Value>) -> Vec<CandidateRecord> {
    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(obj) => records.push(obj),
            other => warn!("Skipping candidate {}: expected object, got {}", idx, kind_name(&other)),
        }
    }
    records
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<&str, UpstreamError> {
    let trimmed = response.trim();

    if !trimmed.starts_with("```") {
        return Ok(trimmed);
    }

    // Skip the opening fence line (```json or ```) and the closing fence
    let body = trimmed
        .split_once('\n')
        .map(|(_, rest)| rest)
        .ok_or_else(|| UpstreamError::InvalidResponse("Empty code block".to_string()))?;
    let body = body.trim_end();
    Ok(body.strip_suffix("```").unwrap_or(body).trim())
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
