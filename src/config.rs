//! Remote service settings and shared constants.

use std::time::Duration;

/// Default timeout for remote function calls in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Function endpoint names under `{base}/functions/v1/`
pub const POLISH_FUNCTION: &str = "polish-text";
pub const CHAT_FUNCTION: &str = "ask-openai";
pub const SAVE_FUNCTION: &str = "save-prompt";

/// Defaults applied to saved prompts that omit them
pub const DEFAULT_SAVED_LANGUAGE: &str = "en";
pub const DEFAULT_INSIGHT_MODE: &str = "clarity";

pub const ENV_FUNCTIONS_URL: &str = "PROMPT_SENSEI_FUNCTIONS_URL";
pub const ENV_ANON_KEY: &str = "PROMPT_SENSEI_ANON_KEY";
pub const ENV_TIMEOUT_SECS: &str = "PROMPT_SENSEI_TIMEOUT_SECS";

/// Where the hosted functions live. `functions_url = None` disables every
/// remote call; callers fall back to local behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub functions_url: Option<String>,
    pub anon_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            functions_url: None,
            anon_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Read settings from the process environment, loading `.env` first.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("[CONFIG] No .env loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let functions_url = get(ENV_FUNCTIONS_URL).map(|url| url.trim_end_matches('/').to_string());
        let anon_key = get(ENV_ANON_KEY);
        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "[CONFIG] Invalid {}={:?}, using {}s",
                    ENV_TIMEOUT_SECS,
                    raw,
                    DEFAULT_TIMEOUT_SECS
                );
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };

        match &functions_url {
            Some(url) => log::info!("[CONFIG] Remote functions at {}", url),
            None => log::info!("[CONFIG] No {} set, remote features disabled", ENV_FUNCTIONS_URL),
        }

        Self {
            functions_url,
            anon_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.functions_url.is_some()
    }

    /// Full URL of a named function, if remote calls are enabled.
    pub fn function_url(&self, name: &str) -> Option<String> {
        self.functions_url
            .as_ref()
            .map(|base| format!("{}/functions/v1/{}", base, name))
    }
}
