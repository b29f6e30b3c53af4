pub mod cli;
pub mod config;
pub mod generator;
pub mod llm;
pub mod logging;

pub use generator::{ResponseGenerator, TextGenerator};
pub use llm::{ApiKey, GeminiClient, LlmError};

#[cfg(test)]
pub(crate) mod test_helpers;
