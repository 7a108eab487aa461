//! Hosted function clients: text correction, chat test calls and the
//! prompt library.
//!
//! Every call is a single JSON POST to `{base}/functions/v1/{name}` with
//! no retry. Callers that have a local equivalent fall back to it.

mod chat;
mod library;
mod polish;

pub use chat::ask_ai;
pub use library::{save_prompt, SavePromptRequest, SavedPrompt};
pub use polish::polish_with_service;

use crate::config::ServiceConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Remote functions are not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// POST `body` to a named function and decode the JSON reply.
///
/// `bearer` overrides the anonymous key in the `Authorization` header,
/// for calls made on behalf of a signed-in user.
async fn post_json<B, R>(
    config: &ServiceConfig,
    function: &str,
    body: &B,
    bearer: Option<&str>,
) -> Result<R, RemoteError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let url = config
        .function_url(function)
        .ok_or(RemoteError::NotConfigured)?;

    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| RemoteError::Network(format!("Failed to create HTTP client: {}", e)))?;

    let mut request = client
        .post(&url)
        .header("content-type", "application/json")
        .json(body);
    if let Some(key) = &config.anon_key {
        request = request.header("apikey", key);
    }
    if let Some(token) = bearer.or(config.anon_key.as_deref()) {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    let start = Instant::now();
    let response = request.send().await.map_err(|e| {
        log::error!("[REMOTE] {} request failed: {}", function, e);
        RemoteError::Network(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::error!("[REMOTE] {} returned {}: {}", function, status, body);
        return Err(RemoteError::Status {
            status: status.as_u16(),
            body,
        });
    }
    log::info!(
        "[REMOTE] {} responded in {}ms",
        function,
        start.elapsed().as_millis()
    );

    response
        .json()
        .await
        .map_err(|e| RemoteError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::ServiceConfig;
    use std::time::Duration;

    /// Points at a closed local port so every request fails fast.
    pub fn unreachable_config() -> ServiceConfig {
        ServiceConfig {
            functions_url: Some("http://127.0.0.1:9".to_string()),
            anon_key: Some("test-anon-key".to_string()),
            timeout: Duration::from_secs(2),
        }
    }
}
