//! UI locales and response languages.
//!
//! The UI locale picks which phrase dictionary the composer reads from.
//! The response language is what the AI is told to answer in; `auto`
//! resolves to the language of the UI locale.

use serde::{Deserialize, Serialize};

/// UI locale, parsed from a code such as `"en"`, `"ru-RU"` or `"zh_CN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
    Es,
    Fr,
    De,
    Zh,
    Ja,
    Ar,
}

impl Locale {
    /// Parse a locale code. Unknown or missing codes fall back to English.
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code else {
            return Locale::En;
        };
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match primary.as_str() {
            "ru" => Locale::Ru,
            "es" => Locale::Es,
            "fr" => Locale::Fr,
            "de" => Locale::De,
            "zh" => Locale::Zh,
            "ja" => Locale::Ja,
            "ar" => Locale::Ar,
            _ => Locale::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
            Locale::Ar => "ar",
        }
    }

    /// Language a response defaults to when the user picked `auto`.
    pub fn default_language(self) -> Language {
        match self {
            Locale::En => Language::English,
            Locale::Ru => Language::Russian,
            Locale::Es => Language::Spanish,
            Locale::Fr => Language::French,
            Locale::De => Language::German,
            Locale::Zh => Language::Chinese,
            Locale::Ja => Language::Japanese,
            Locale::Ar => Language::Arabic,
        }
    }
}

/// A concrete response language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Russian,
    Chinese,
    Japanese,
    Arabic,
}

impl Language {
    /// English display name, used by templated directives and explanations.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Arabic => "Arabic",
        }
    }

    /// ISO 639-1 code, as stored with saved prompts.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Russian => "ru",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Arabic => "ar",
        }
    }
}

/// The wizard's language answer: a fixed language or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLanguage {
    Fixed(Language),
    Auto,
}

impl ResponseLanguage {
    pub fn parse(value: &str) -> Option<Self> {
        let language = match value.trim().to_ascii_lowercase().as_str() {
            "auto" => return Some(ResponseLanguage::Auto),
            "english" => Language::English,
            "spanish" => Language::Spanish,
            "french" => Language::French,
            "german" => Language::German,
            "russian" => Language::Russian,
            "chinese" => Language::Chinese,
            "japanese" => Language::Japanese,
            _ => return None,
        };
        Some(ResponseLanguage::Fixed(language))
    }
}

/// Resolve the target language; unset and `auto` follow the UI locale.
pub fn resolve_language(answer: Option<ResponseLanguage>, locale: Locale) -> Language {
    match answer {
        Some(ResponseLanguage::Fixed(language)) => language,
        Some(ResponseLanguage::Auto) | None => locale.default_language(),
    }
}
