use super::types::{ApiErrorEnvelope, GenerateContentResponse};
use super::LlmError;

/// Longest raw error body kept when the API does not send a structured error.
const ERROR_PREVIEW_CHARS: usize = 500;

/// Pull the generated text out of a `generateContent` response.
///
/// Text parts of the first candidate are concatenated in order. A response
/// with no candidates is either a blocked prompt (when `promptFeedback`
/// carries a reason) or an empty response.
pub(crate) fn extract_text(response: &GenerateContentResponse) -> Result<String, LlmError> {
    let Some(candidate) = response.candidates.first() else {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(LlmError::Blocked(reason));
        }
        return Err(LlmError::EmptyResponse);
    };

    let texts: Vec<&str> = candidate
        .content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();

    if texts.is_empty() {
        return match candidate.finish_reason.as_deref() {
            Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                Err(LlmError::Blocked(reason.to_string()))
            }
            _ => Err(LlmError::EmptyResponse),
        };
    }

    Ok(texts.concat())
}

/// Human-readable message for a non-2xx body: the structured `error.message`
/// when present, else a bounded preview of the raw body.
pub(crate) fn api_error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        let error = envelope.error;
        if !error.message.is_empty() {
            return match error.status {
                Some(status) => format!("{status}: {}", error.message),
                None => error.message,
            };
        }
    }
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
