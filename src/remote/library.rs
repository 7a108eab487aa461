use super::{post_json, RemoteError};
use crate::config::{ServiceConfig, DEFAULT_INSIGHT_MODE, DEFAULT_SAVED_LANGUAGE, SAVE_FUNCTION};
use serde::{Deserialize, Serialize};

/// A prompt to store in the signed-in user's library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavePromptRequest {
    pub prompt: String,
    pub language: Option<String>,
    pub insight_mode: Option<String>,
    pub quality_score: Option<u8>,
}

impl SavePromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Fill in the stored defaults for an unset language or insight mode.
    pub fn with_defaults(mut self) -> Self {
        self.language.get_or_insert_with(|| DEFAULT_SAVED_LANGUAGE.to_string());
        self.insight_mode.get_or_insert_with(|| DEFAULT_INSIGHT_MODE.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedPrompt {
    pub prompt_id: String,
    pub message: String,
}

#[derive(Deserialize)]
struct SaveResponse {
    #[serde(default)]
    success: bool,
    prompt_id: Option<serde_json::Value>,
    message: Option<String>,
    error: Option<String>,
}

/// Save a prompt for the user identified by `access_token`.
pub async fn save_prompt(
    config: &ServiceConfig,
    access_token: &str,
    request: &SavePromptRequest,
) -> Result<SavedPrompt, RemoteError> {
    if access_token.trim().is_empty() {
        return Err(RemoteError::Validation("An access token is required".to_string()));
    }
    if request.prompt.trim().is_empty() {
        return Err(RemoteError::Validation("Prompt cannot be empty".to_string()));
    }

    let body = request.clone().with_defaults();
    let response: SaveResponse = post_json(config, SAVE_FUNCTION, &body, Some(access_token)).await?;

    if !response.success {
        let reason = response.error.unwrap_or_else(|| "Save was not acknowledged".to_string());
        return Err(RemoteError::InvalidResponse(reason));
    }
    let prompt_id = match response.prompt_id {
        Some(serde_json::Value::String(id)) => id,
        Some(other) => other.to_string(),
        None => return Err(RemoteError::InvalidResponse("Response has no prompt_id".to_string())),
    };

    log::info!("[REMOTE] Saved prompt {}", prompt_id);
    Ok(SavedPrompt {
        prompt_id,
        message: response.message.unwrap_or_default(),
    })
}
