use std::fmt;

use super::LlmError;

/// Gemini API key. Never printed; use [`ApiKey::expose`] at the request site.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank values.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Read the key from `var`. Unset and blank are both treated as missing.
    pub fn from_env(var: &str) -> Result<Self, LlmError> {
        std::env::var(var)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| LlmError::MissingApiKey {
                var: var.to_string(),
            })
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}
