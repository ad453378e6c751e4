//! Error types for the Extractor

use infoextract_domain::{SchemaError, UpstreamError};
use thiserror::Error;

/// Errors that can occur during extraction
///
/// Upstream variants keep the collaborator's error as their source.
/// Per-record coercion failures are not errors; they show up as absent fields.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Empty or duplicate fields, unknown type tag or unsupported model
    #[error("Invalid schema: {0}")]
    InvalidSchema(#[from] SchemaError),

    /// Network or transport failure
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] UpstreamError),

    /// Provider backpressure
    #[error("Upstream rate limited: {0}")]
    UpstreamRateLimited(#[source] UpstreamError),

    /// Bad or missing API key
    #[error("Upstream authentication failed: {0}")]
    UpstreamAuth(#[source] UpstreamError),

    /// Upstream call exceeded the configured timeout
    #[error("Upstream timed out: {0}")]
    UpstreamTimeout(#[source] UpstreamError),

    /// Provider answer could not be read as candidate records
    #[error("Upstream returned an invalid response: {0}")]
    UpstreamInvalidResponse(#[source] UpstreamError),

    /// Source text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),
}

impl ExtractorError {
    /// Whether a caller-side retry policy may try again.
    ///
    /// Schema, auth and length problems are never retriable.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            ExtractorError::UpstreamUnavailable(_)
                | ExtractorError::UpstreamRateLimited(_)
                | ExtractorError::UpstreamTimeout(_)
        )
    }
}

impl From<UpstreamError> for ExtractorError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Unavailable(_) => ExtractorError::UpstreamUnavailable(e),
            UpstreamError::RateLimited(_) => ExtractorError::UpstreamRateLimited(e),
            UpstreamError::Auth(_) => ExtractorError::UpstreamAuth(e),
            UpstreamError::Timeout(_) => ExtractorError::UpstreamTimeout(e),
            UpstreamError::InvalidResponse(_) => ExtractorError::UpstreamInvalidResponse(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_upstream_mapping_keeps_source() {
        let err = ExtractorError::from(UpstreamError::RateLimited("HTTP 429".into()));
        assert!(matches!(err, ExtractorError::UpstreamRateLimited(_)));
        assert!(err.is_retriable());

        let source = err.source().expect("source attached");
        assert!(source.to_string().contains("HTTP 429"));
    }

    #[test]
    fn test_retriable_classification() {
        assert!(ExtractorError::from(UpstreamError::Unavailable("x".into())).is_retriable());
        assert!(ExtractorError::from(UpstreamError::Timeout("x".into())).is_retriable());
        assert!(!ExtractorError::from(UpstreamError::Auth("x".into())).is_retriable());
        assert!(!ExtractorError::from(UpstreamError::InvalidResponse("x".into())).is_retriable());
        assert!(!ExtractorError::from(SchemaError::NoFields).is_retriable());
        assert!(!ExtractorError::TextTooLong(10, 5).is_retriable());
    }
}
