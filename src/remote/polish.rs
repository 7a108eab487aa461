use super::post_json;
use crate::config::{ServiceConfig, POLISH_FUNCTION};
use crate::polish::{polish_text, PolishResult};
use crate::rules::Script;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct PolishRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PolishResponse {
    polished: String,
}

/// Polish through the hosted correction service, falling back to the
/// local polisher. Only English-bucket text is sent out.
pub async fn polish_with_service(
    config: &ServiceConfig,
    text: &str,
    ui_language: Option<&str>,
) -> PolishResult {
    let local = polish_text(text, ui_language);
    let input = text.trim();
    if local.script != Script::English || input.is_empty() || !config.is_enabled() {
        return local;
    }

    match post_json::<_, PolishResponse>(config, POLISH_FUNCTION, &PolishRequest { text: input }, None).await {
        Ok(response) if !response.polished.trim().is_empty() => {
            let polished = response.polished.trim().to_string();
            let was_polished = polished != input;
            log::debug!("[REMOTE] Service polish changed={}", was_polished);
            PolishResult {
                polished,
                was_polished,
                script: local.script,
            }
        }
        Ok(_) => {
            log::warn!("[REMOTE] Polish service returned empty text, using local result");
            local
        }
        Err(e) => {
            log::warn!("[REMOTE] Polish service failed, using local result: {}", e);
            local
        }
    }
}
