use super::{post_json, RemoteError};
use crate::config::{ServiceConfig, CHAT_FUNCTION};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatRequest<'a> {
    prompt: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    answer: Option<String>,
    error: Option<String>,
}

/// Send a finished prompt to the hosted chat function and return its answer.
/// `language` is the display name of the response language, e.g. "English".
pub async fn ask_ai(config: &ServiceConfig, prompt: &str, language: &str) -> Result<String, RemoteError> {
    if prompt.trim().is_empty() {
        return Err(RemoteError::Validation("Prompt cannot be empty".to_string()));
    }

    let response: ChatResponse = post_json(config, CHAT_FUNCTION, &ChatRequest { prompt, language }, None).await?;
    match (response.answer, response.error) {
        (Some(answer), _) => Ok(answer),
        (None, Some(error)) => Err(RemoteError::InvalidResponse(error)),
        (None, None) => Err(RemoteError::InvalidResponse("Response has no answer".to_string())),
    }
}
