//! "Open in" links for the chat assistants a prompt can be sent to.

use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiPlatform {
    ChatGpt,
    Claude,
    Gemini,
    Perplexity,
    You,
}

impl AiPlatform {
    pub const ALL: [AiPlatform; 5] = [
        AiPlatform::ChatGpt,
        AiPlatform::Claude,
        AiPlatform::Gemini,
        AiPlatform::Perplexity,
        AiPlatform::You,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chatgpt" | "openai" => Some(AiPlatform::ChatGpt),
            "claude" => Some(AiPlatform::Claude),
            "gemini" => Some(AiPlatform::Gemini),
            "perplexity" => Some(AiPlatform::Perplexity),
            "you" | "you.com" => Some(AiPlatform::You),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AiPlatform::ChatGpt => "ChatGPT",
            AiPlatform::Claude => "Claude",
            AiPlatform::Gemini => "Gemini",
            AiPlatform::Perplexity => "Perplexity",
            AiPlatform::You => "You.com",
        }
    }

    /// Search endpoint taking the prompt as `q`. Claude has none; the
    /// prompt is copied to the clipboard instead.
    fn base_url(self) -> Option<&'static str> {
        match self {
            AiPlatform::ChatGpt => Some("https://chat.openai.com/"),
            AiPlatform::Gemini => Some("https://gemini.google.com/app"),
            AiPlatform::Perplexity => Some("https://www.perplexity.ai/search"),
            AiPlatform::You => Some("https://you.com/search"),
            AiPlatform::Claude => None,
        }
    }
}

/// Link that opens `platform` with the prompt pre-filled, or `None` for
/// copy-only platforms.
pub fn share_url(platform: AiPlatform, prompt: &str) -> Option<Url> {
    let base = platform.base_url()?;
    match Url::parse_with_params(base, &[("q", prompt)]) {
        Ok(url) => Some(url),
        Err(e) => {
            log::error!("[SHARE] Bad base URL for {}: {}", platform.name(), e);
            None
        }
    }
}
