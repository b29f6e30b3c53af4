#![allow(dead_code)]

use plangen::config::GeminiConfig;
use plangen::{ApiKey, GeminiClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-2.5-flash-lite";

pub fn generate_content_path() -> String {
    format!("/v1beta/models/{TEST_MODEL}:generateContent")
}

pub fn config_for(server: &MockServer) -> GeminiConfig {
    GeminiConfig {
        base_url: Some(format!("{}/v1beta", server.uri())),
        model: TEST_MODEL.into(),
        timeout_ms: 2_000,
        ..GeminiConfig::default()
    }
}

pub fn client_for(server: &MockServer) -> GeminiClient {
    client_with(config_for(server))
}

pub fn client_with(config: GeminiConfig) -> GeminiClient {
    GeminiClient::new(ApiKey::new(TEST_API_KEY).unwrap(), &config).unwrap()
}

pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 2, "totalTokenCount": 6},
        "modelVersion": TEST_MODEL
    })
}

pub fn error_response(code: u16, status: &str, message: &str) -> Value {
    json!({"error": {"code": code, "message": message, "status": status}})
}
