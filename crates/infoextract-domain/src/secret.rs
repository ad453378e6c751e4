//! Provider API key, kept out of requests and logs

use std::fmt;

/// API key for the LLM provider
///
/// Supplied out-of-band by the host. `Debug` is redacted and there is no
/// `Display`, so the key cannot leak through `tracing` fields or error text.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for the `Authorization` header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty or blank
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
