//! Schema errors raised while describing an extraction

use thiserror::Error;

/// Caller-data problems detected before any upstream call is made.
///
/// None of these are retriable: the same input will always fail the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field descriptor was given an empty (or blank) name
    #[error("Field name cannot be empty")]
    EmptyFieldName,

    /// No fields were requested
    #[error("At least one field must be requested")]
    NoFields,

    /// Two descriptors share a name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// Type tag outside of string|integer|float|boolean|array
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// Model identifier outside of the supported set
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),
}
