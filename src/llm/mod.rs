mod client;
mod credential;
mod response;
mod types;

pub use client::{GeminiClient, LlmError};
pub use credential::ApiKey;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback,
};
