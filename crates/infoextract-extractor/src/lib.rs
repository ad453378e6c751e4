//! Infoextract Extractor
//!
//! Pulls caller-declared fields out of unstructured text with an LLM and
//! returns only values that match their declared kind.
//!
//! # Architecture
//!
//! ```text
//! FieldDescriptors → ExtractionShape → ExtractionInvoker → LLM → ResultValidator → ExtractionResult
//! ```
//!
//! # Key Features
//!
//! - **Dynamic schemas**: fields and their kinds are data, not Rust types
//! - **Bounded upstream call**: one attempt, cancelled after the configured timeout
//! - **Lenient validation**: unknown keys and uncoercible values are dropped, never fatal
//! - **Order preservation**: the n-th candidate becomes the n-th record
//!
//! # Example Usage
//!
//! ```no_run
//! use infoextract_domain::{ExtractionRequest, FieldDescriptor, FieldKind, ModelSelector};
//! use infoextract_extractor::{Extractor, ExtractorConfig};
//! use infoextract_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"[{"name": "Ana", "age": "30"}]"#);
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let request = ExtractionRequest::new(
//!     "Ana is 30 years old.",
//!     None,
//!     vec![
//!         FieldDescriptor::new("name", FieldKind::String, "Name of the person.")?,
//!         FieldDescriptor::new("age", FieldKind::Integer, "Age of the person.")?,
//!     ],
//!     ModelSelector::default(),
//! )?;
//!
//! let result = extractor.extract(&request).await?;
//! println!("Extracted {} records", result.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod invoker;
mod prompt;
mod validator;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use invoker::ExtractionInvoker;
pub use prompt::PromptBuilder;
pub use validator::{validate_records, ResultValidator};
