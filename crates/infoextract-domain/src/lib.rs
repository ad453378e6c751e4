//! Infoextract Domain Layer
//!
//! Core data model for schema-driven information extraction. This crate
//! describes *what* a caller wants pulled out of a text and *how* loosely
//! typed model output is checked against that declaration. It performs no
//! I/O; the LLM collaborator is only described here as a trait.
//!
//! ## Key Concepts
//!
//! - **Field Descriptor**: name, primitive kind and description of one value to extract
//! - **Extraction Shape**: the validated, ordered set of descriptors (`name → kind`)
//! - **Candidate Record**: a loosely typed record returned by the model
//! - **Coercion**: best-effort narrowing of a candidate value to its declared kind
//!
//! ## Example
//!
//! ```
//! use infoextract_domain::{ExtractionShape, FieldDescriptor, FieldKind};
//! use serde_json::json;
//!
//! let fields = vec![
//!     FieldDescriptor::new("name", FieldKind::String, "Name of the person.").unwrap(),
//!     FieldDescriptor::new("age", FieldKind::Integer, "Age of the person.").unwrap(),
//! ];
//! let shape = ExtractionShape::build(&fields).unwrap();
//!
//! assert_eq!(shape.kind_of("age"), Some(FieldKind::Integer));
//! assert_eq!(FieldKind::Integer.coerce(json!("42")), Some(json!(42)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod model;
pub mod record;
pub mod request;
pub mod secret;
pub mod shape;
pub mod traits;

// Re-exports for convenience
pub use error::SchemaError;
pub use field::{FieldDescriptor, FieldKind};
pub use model::ModelSelector;
pub use record::{CandidateRecord, ExtractionResult, Record};
pub use request::ExtractionRequest;
pub use secret::ApiKey;
pub use shape::ExtractionShape;
pub use traits::{LlmProvider, PromptSpec, UpstreamError};
