//! Extraction shape - the runtime validation structure built from descriptors

use crate::error::SchemaError;
use crate::field::{FieldDescriptor, FieldKind};
use serde_json::{json, Map, Value};
use std::collections::HashSet;

/// Ordered `name → kind` mapping used to validate candidate records
///
/// Only [`ExtractionShape::build`] creates one, so every shape is non-empty
/// and free of duplicate names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionShape {
    fields: Vec<FieldDescriptor>,
}

impl ExtractionShape {
    /// Build a shape from an ordered list of descriptors.
    ///
    /// This never substitutes a default field set: an empty list is an error.
    ///
    /// # Errors
    /// - [`SchemaError::NoFields`] if `fields` is empty
    /// - [`SchemaError::DuplicateField`] on the first repeated name
    pub fn build(fields: &[FieldDescriptor]) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::NoFields);
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in fields {
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateField(field.name().to_string()));
            }
        }

        Ok(Self {
            fields: fields.to_vec(),
        })
    }

    /// Declared kind of a field, or `None` if the name was not requested
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .map(FieldDescriptor::kind)
    }

    /// Check whether a field name was requested
    pub fn contains(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDescriptor::name)
    }

    /// Descriptors in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Number of requested fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the shape as a JSON Schema for structured-output hints.
    ///
    /// Records are wrapped in `{"records": [...]}` because JSON-mode models
    /// must answer with an object. No property is `required`: models may
    /// leave out what the text does not mention.
    pub fn json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut property = Map::new();
            property.insert(
                "type".to_string(),
                Value::from(field.kind().json_schema_type()),
            );
            if !field.description().is_empty() {
                property.insert(
                    "description".to_string(),
                    Value::from(field.description()),
                );
            }
            properties.insert(field.name().to_string(), Value::Object(property));
        }

        json!({
            "type": "object",
            "properties": {
                "records": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": properties,
                    },
                },
            },
            "required": ["records"],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor::new(name, kind, "").unwrap()
    }

    #[test]
    fn test_build_shape() {
        let shape = ExtractionShape::build(&[
            field("name", FieldKind::String),
            field("age", FieldKind::Integer),
        ])
        .unwrap();

        assert_eq!(shape.len(), 2);
        assert_eq!(shape.names().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(shape.kind_of("name"), Some(FieldKind::String));
        assert_eq!(shape.kind_of("age"), Some(FieldKind::Integer));
        assert_eq!(shape.kind_of("extra"), None);
        assert!(!shape.contains("extra"));
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(ExtractionShape::build(&[]), Err(SchemaError::NoFields));
    }

    #[test]
    fn test_duplicate_name_rejected_regardless_of_kind() {
        let result = ExtractionShape::build(&[
            field("age", FieldKind::Integer),
            FieldDescriptor::new("age", FieldKind::String, "different").unwrap(),
        ]);
        assert_eq!(result, Err(SchemaError::DuplicateField("age".to_string())));
    }

    #[test]
    fn test_json_schema() {
        let shape = ExtractionShape::build(&[
            FieldDescriptor::new("score", FieldKind::Float, "Match score").unwrap(),
            field("tags", FieldKind::Array),
        ])
        .unwrap();

        let schema = shape.json_schema();
        let props = &schema["properties"]["records"]["items"]["properties"];
        assert_eq!(props["score"]["type"], "number");
        assert_eq!(props["score"]["description"], "Match score");
        assert_eq!(props["tags"]["type"], "array");
        assert!(props["tags"].get("description").is_none());
    }
}
