use async_trait::async_trait;

use crate::config::GeminiConfig;
use crate::llm::{GeminiClient, LlmError};

/// Anything that turns a prompt into text. Implemented by [`GeminiClient`];
/// tests substitute their own.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Prompt-in, text-out front door over a model handle.
pub struct ResponseGenerator<G = GeminiClient> {
    model: G,
}

impl ResponseGenerator<GeminiClient> {
    /// Validate the credential and build a generator backed by Gemini.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, LlmError> {
        Ok(Self::new(GeminiClient::from_config(config)?))
    }
}

impl<G: TextGenerator> ResponseGenerator<G> {
    pub fn new(model: G) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &G {
        &self.model
    }

    /// Forward `prompt` and return the outcome as-is.
    pub async fn try_generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.model.generate_content(prompt).await
    }

    /// Forward `prompt` and return the generated text, or `None` if the call
    /// failed for any reason. Failures are logged, never propagated.
    pub async fn generate_response(&self, prompt: &str) -> Option<String> {
        match self.try_generate(prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::error!("Error generating response: {e}");
                None
            }
        }
    }
}
