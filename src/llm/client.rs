use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::generator::TextGenerator;

use super::credential::ApiKey;
use super::response::{api_error_message, extract_text};
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("API key not found: environment variable {var} is unset or empty")]
    MissingApiKey { var: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Malformed response from model: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Prompt blocked by the model ({0})")]
    Blocked(String),
    #[error("Empty response from model")]
    EmptyResponse,
}

/// Handle to one Gemini model. Holds no per-call state, so a single
/// instance can serve any number of independent requests.
pub struct GeminiClient {
    api_key: ApiKey,
    model: String,
    url: String,
    generation: GenerationConfig,
    client: Client,
}

impl GeminiClient {
    /// Read the API key from the configured env var and build the client.
    /// Fails with `MissingApiKey` before any network activity.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, LlmError> {
        let api_key = ApiKey::from_env(&config.api_key_env)?;
        Self::new(api_key, config)
    }

    pub fn new(api_key: ApiKey, config: &GeminiConfig) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if config.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        }
        let client = builder.build()?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            url: config.generate_content_url(),
            generation: GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
                candidate_count: 1,
            },
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// Send `prompt` verbatim and return the model's text.
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    pub async fn generate_content(&self, prompt: &str) -> Result<String, LlmError> {
        let start = Instant::now();
        let body = GenerateContentRequest::from_prompt(prompt, self.generation.clone());

        let resp = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", self.api_key.expose())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        if !(200..300).contains(&status) {
            tracing::debug!(status, "Gemini request rejected");
            return Err(LlmError::Api {
                status,
                body: api_error_message(&text),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        let generated = extract_text(&parsed)?;

        tracing::debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            response_len = generated.len(),
            "Gemini request completed"
        );
        Ok(generated)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError> {
        GeminiClient::generate_content(self, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[test]
    fn test_from_config_missing_key() {
        let config = GeminiConfig {
            api_key_env: "PLANGEN_CLIENT_TEST_UNSET_KEY".into(),
            ..GeminiConfig::default()
        };
        let err = GeminiClient::from_config(&config).err().unwrap();
        assert!(matches!(err, LlmError::MissingApiKey { .. }));
        assert!(err.to_string().contains("PLANGEN_CLIENT_TEST_UNSET_KEY"));
    }

    #[test]
    fn test_from_config_with_key() {
        let config = GeminiConfig {
            api_key_env: "PLANGEN_CLIENT_TEST_SET_KEY".into(),
            ..GeminiConfig::default()
        };
        unsafe { std::env::set_var("PLANGEN_CLIENT_TEST_SET_KEY", "test-key") };
        let result = GeminiClient::from_config(&config);
        unsafe { std::env::remove_var("PLANGEN_CLIENT_TEST_SET_KEY") };
        let client = result.unwrap();
        assert_eq!(client.model(), "gemini-2.5-flash-lite");
    }

    #[test]
    fn test_endpoint_uses_model() {
        let config = GeminiConfig {
            model: "gemini-2.0-flash-lite".into(),
            ..GeminiConfig::default()
        };
        let client = GeminiClient::new(test_key(), &config).unwrap();
        assert!(client
            .endpoint()
            .ends_with("/models/gemini-2.0-flash-lite:generateContent"));
    }

    #[test]
    fn test_zero_timeout_builds() {
        let config = GeminiConfig {
            timeout_ms: 0,
            ..GeminiConfig::default()
        };
        assert!(GeminiClient::new(test_key(), &config).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = LlmError::Api {
            status: 429,
            body: "RESOURCE_EXHAUSTED: Quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (429): RESOURCE_EXHAUSTED: Quota exceeded"
        );
        assert_eq!(
            LlmError::Blocked("SAFETY".into()).to_string(),
            "Prompt blocked by the model (SAFETY)"
        );
    }
}
