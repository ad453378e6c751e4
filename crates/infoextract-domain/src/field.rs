//! Field module - what to extract, and how candidate values are narrowed

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Primitive kind of an extracted value
///
/// Each kind owns its coercion rule, so validation never has to inspect
/// type tags at runtime. `Array` carries no element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FieldKind {
    /// UTF-8 text
    #[default]
    String,

    /// Signed 64-bit integer
    Integer,

    /// Any finite JSON number
    Float,

    /// `true` / `false`
    Boolean,

    /// Any sequence, elements unchecked
    Array,
}

impl FieldKind {
    /// Every supported kind, in declaration order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::String,
        FieldKind::Integer,
        FieldKind::Float,
        FieldKind::Boolean,
        FieldKind::Array,
    ];

    /// Get the kind's wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
        }
    }

    /// Parse a kind from its tag (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "string" => Some(FieldKind::String),
            "integer" => Some(FieldKind::Integer),
            "float" => Some(FieldKind::Float),
            "boolean" => Some(FieldKind::Boolean),
            "array" => Some(FieldKind::Array),
            _ => None,
        }
    }

    /// JSON Schema `type` keyword for this kind
    pub fn json_schema_type(&self) -> &'static str {
        match self {
            FieldKind::Float => "number",
            other => other.as_str(),
        }
    }

    /// Check whether a value already has this kind, without coercion
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Float => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Array => value.is_array(),
        }
    }

    /// Narrow a candidate value to this kind.
    ///
    /// Values that already have the kind pass through unchanged. Strings are
    /// parsed into integers, floats and booleans only when the text is an
    /// unambiguous literal (`"42"`, `"3.14"`, `"TRUE"`). Everything else
    /// yields `None`, and the caller drops the field.
    pub fn coerce(&self, value: Value) -> Option<Value> {
        if self.accepts(&value) {
            return Some(value);
        }

        let Value::String(text) = value else {
            return None;
        };

        match self {
            FieldKind::Integer => text.parse::<i64>().ok().map(Value::from),
            FieldKind::Float => text
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number),
            FieldKind::Boolean => {
                if text.eq_ignore_ascii_case("true") {
                    Some(Value::Bool(true))
                } else if text.eq_ignore_ascii_case("false") {
                    Some(Value::Bool(false))
                } else {
                    None
                }
            }
            FieldKind::String | FieldKind::Array => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SchemaError::UnknownFieldType(s.to_string()))
    }
}

impl TryFrom<String> for FieldKind {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldKind> for &'static str {
    fn from(kind: FieldKind) -> Self {
        kind.as_str()
    }
}

/// One value the caller wants extracted
///
/// Immutable once constructed; identity is the `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldDescriptor")]
pub struct FieldDescriptor {
    name: String,
    #[serde(rename = "type")]
    kind: FieldKind,
    description: String,
}

/// Wire form of a descriptor, before the name is checked
#[derive(Deserialize)]
struct RawFieldDescriptor {
    name: String,
    #[serde(rename = "type", default)]
    kind: FieldKind,
    #[serde(default)]
    description: String,
}

impl FieldDescriptor {
    /// Create a new descriptor
    ///
    /// # Errors
    /// Returns [`SchemaError::EmptyFieldName`] if `name` is empty or blank
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        description: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }

        Ok(Self {
            name,
            kind,
            description: description.into(),
        })
    }

    /// Field name (the key in every output record)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared primitive kind
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Human-readable hint passed to the model
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl TryFrom<RawFieldDescriptor> for FieldDescriptor {
    type Error = SchemaError;

    fn try_from(raw: RawFieldDescriptor) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.kind, raw.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_creation() {
        let field = FieldDescriptor::new("age", FieldKind::Integer, "Age of the person.").unwrap();
        assert_eq!(field.name(), "age");
        assert_eq!(field.kind(), FieldKind::Integer);
        assert_eq!(field.description(), "Age of the person.");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            FieldDescriptor::new("", FieldKind::String, "x"),
            Err(SchemaError::EmptyFieldName)
        );
        assert_eq!(
            FieldDescriptor::new("   ", FieldKind::String, "x"),
            Err(SchemaError::EmptyFieldName)
        );
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("integer".parse::<FieldKind>(), Ok(FieldKind::Integer));
        assert_eq!("Boolean".parse::<FieldKind>(), Ok(FieldKind::Boolean));
        assert_eq!(
            "date".parse::<FieldKind>(),
            Err(SchemaError::UnknownFieldType("date".to_string()))
        );
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_json_schema_type() {
        assert_eq!(FieldKind::Float.json_schema_type(), "number");
        assert_eq!(FieldKind::Integer.json_schema_type(), "integer");
        assert_eq!(FieldKind::Array.json_schema_type(), "array");
    }

    #[test]
    fn test_descriptor_deserialize_defaults() {
        let field: FieldDescriptor = serde_json::from_str(r#"{"name": "city"}"#).unwrap();
        assert_eq!(field.kind(), FieldKind::String);
        assert_eq!(field.description(), "");
    }

    #[test]
    fn test_descriptor_deserialize_rejects_bad_input() {
        assert!(serde_json::from_str::<FieldDescriptor>(r#"{"name": ""}"#).is_err());
        assert!(
            serde_json::from_str::<FieldDescriptor>(r#"{"name": "x", "type": "date"}"#).is_err()
        );
    }

    #[test]
    fn test_descriptor_serializes_type_tag() {
        let field = FieldDescriptor::new("score", FieldKind::Float, "").unwrap();
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value, json!({"name": "score", "type": "float", "description": ""}));
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(FieldKind::Integer.coerce(json!(30)), Some(json!(30)));
        assert_eq!(FieldKind::Integer.coerce(json!("42")), Some(json!(42)));
        assert_eq!(FieldKind::Integer.coerce(json!("-7")), Some(json!(-7)));
        assert_eq!(FieldKind::Integer.coerce(json!("forty-two")), None);
        assert_eq!(FieldKind::Integer.coerce(json!("3.5")), None);
        assert_eq!(FieldKind::Integer.coerce(json!(3.5)), None);
        assert_eq!(FieldKind::Integer.coerce(json!(true)), None);
        assert_eq!(FieldKind::Integer.coerce(Value::Null), None);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(FieldKind::Float.coerce(json!(3.14)), Some(json!(3.14)));
        assert_eq!(FieldKind::Float.coerce(json!(2)), Some(json!(2)));
        assert_eq!(FieldKind::Float.coerce(json!("3.14")), Some(json!(3.14)));
        assert_eq!(FieldKind::Float.coerce(json!("NaN")), None);
        assert_eq!(FieldKind::Float.coerce(json!("inf")), None);
        assert_eq!(FieldKind::Float.coerce(json!("about 3")), None);
    }

    #[test]
    fn test_coerce_boolean() {
        assert_eq!(FieldKind::Boolean.coerce(json!(false)), Some(json!(false)));
        assert_eq!(FieldKind::Boolean.coerce(json!("TRUE")), Some(json!(true)));
        assert_eq!(FieldKind::Boolean.coerce(json!("False")), Some(json!(false)));
        assert_eq!(FieldKind::Boolean.coerce(json!("yes")), None);
        assert_eq!(FieldKind::Boolean.coerce(json!(1)), None);
    }

    #[test]
    fn test_coerce_string_and_array() {
        assert_eq!(FieldKind::String.coerce(json!("Ana")), Some(json!("Ana")));
        assert_eq!(FieldKind::String.coerce(json!(42)), None);
        assert_eq!(FieldKind::Array.coerce(json!([1, "a", null])), Some(json!([1, "a", null])));
        assert_eq!(FieldKind::Array.coerce(json!("[1, 2]")), None);
        assert_eq!(FieldKind::Array.coerce(json!({"a": 1})), None);
    }
}
