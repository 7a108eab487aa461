//! Composer explanation: an ordered list of message keys with parameters.
//!
//! The composer never writes prose. Each applied step pushes an
//! `ExplanationItem`; rendering goes through a `Localizer`, with
//! `EnglishCatalog` filling in anything a localizer does not know.

use serde::Serialize;
use std::fmt;

pub mod keys {
    pub const INTRO: &str = "explanation.intro";
    pub const OUTRO: &str = "explanation.outro";
    pub const POLISHED: &str = "explanation.polished";
    pub const PERSONA_DETECTED: &str = "explanation.persona.detected";
    pub const PERSONA_EXPERT: &str = "explanation.persona.expert";
    pub const PERSONA_TONE: &str = "explanation.persona.tone";
    pub const QUESTION: &str = "explanation.question";
    pub const AUDIENCE: &str = "explanation.audience";
    pub const FORMAT: &str = "explanation.format";
    pub const TONE: &str = "explanation.tone";
    pub const DEPTH: &str = "explanation.depth";
    pub const DEPTH_CODE: &str = "explanation.depth.code";
    pub const INSIGHT: &str = "explanation.insight";
    pub const LANGUAGE: &str = "explanation.language";
    pub const CLARITY: &str = "explanation.clarity";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationItem {
    pub key: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl ExplanationItem {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub items: Vec<ExplanationItem>,
}

/// Message lookup for one UI language. `None` means "not translated".
pub trait Localizer {
    fn translate(&self, key: &str, params: &[(&'static str, String)]) -> Option<String>;
}

impl Explanation {
    pub fn push(&mut self, item: ExplanationItem) {
        self.items.push(item);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|item| item.key == key)
    }

    /// Intro, one bullet per item, outro.
    pub fn render(&self, localizer: &dyn Localizer) -> String {
        let mut out = lookup(localizer, keys::INTRO, &[]);
        out.push_str("\n\n");
        for item in &self.items {
            out.push_str("• ");
            out.push_str(&lookup(localizer, item.key, &item.params));
            out.push_str("\n\n");
        }
        out.push_str(&lookup(localizer, keys::OUTRO, &[]));
        out
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&EnglishCatalog))
    }
}

fn lookup(localizer: &dyn Localizer, key: &str, params: &[(&'static str, String)]) -> String {
    localizer
        .translate(key, params)
        .or_else(|| EnglishCatalog.translate(key, params))
        .unwrap_or_else(|| key.to_string())
}

/// Built-in English messages.
pub struct EnglishCatalog;

impl Localizer for EnglishCatalog {
    fn translate(&self, key: &str, params: &[(&'static str, String)]) -> Option<String> {
        let template = match key {
            keys::INTRO => "This prompt was optimized with several key elements:",
            keys::OUTRO => "These elements work together to give you more relevant, well-structured responses that match your specific needs.",
            keys::POLISHED => "**Polished Input**: I cleaned up spelling, spacing, and punctuation in your question before using it.",
            keys::PERSONA_DETECTED => "**Role Definition**: Your question is about {domain}, so I cast the AI as a specialist in that field.",
            keys::PERSONA_EXPERT => "**Expert Role**: You asked for a {tone} tone with deeper analysis, so I set the AI up as a recognized expert.",
            keys::PERSONA_TONE => "**Role Definition**: I set up the AI with a specific persona ({tone}) to keep a consistent voice throughout the response.",
            keys::QUESTION => "**Clear Intent**: Your core question is stated directly and clearly.",
            keys::AUDIENCE => "**Audience Context**: I specified that this is for {audience}, which helps the AI tailor the complexity and tone.",
            keys::FORMAT => "**Format Specification**: I requested {format} to match your preference.",
            keys::TONE => "**Tone Guidance**: I added specific instructions to maintain a {tone} approach throughout the response.",
            keys::DEPTH => "**DeepSearch**: I asked for a broad, research-based analysis instead of a surface-level answer.",
            keys::DEPTH_CODE => "**DeepSearch**: I asked the AI to cover edge cases, performance, and implementation pitfalls.",
            keys::INSIGHT => "**Deep Insight**: I asked the AI to compare perspectives and back its reasoning with real examples.",
            keys::LANGUAGE => "**Response Language**: I instructed the AI to answer in {language}.",
            keys::CLARITY => "**Beginner Clarity**: I asked for a step-by-step explanation in plain language.",
            _ => return None,
        };

        let mut text = template.to_string();
        for (name, value) in params {
            text = text.replace(&format!("{{{name}}}"), english_value(name, value));
        }
        Some(text)
    }
}

fn english_value<'a>(name: &str, value: &'a str) -> &'a str {
    match (name, value) {
        ("audience", "myself") => "personal use",
        ("audience", "client") => "a client",
        ("audience", "manager") => "management",
        ("audience", "code") => "code generation",
        ("audience", "other") => "a general audience",
        ("format", "bullet") => "bullet points",
        ("format", "steps") => "a step-by-step format",
        ("format", "paragraph") => "paragraph format",
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shouting;

    impl Localizer for Shouting {
        fn translate(&self, key: &str, _params: &[(&'static str, String)]) -> Option<String> {
            (key == keys::QUESTION).then(|| "CLEAR QUESTION".to_string())
        }
    }

    fn sample() -> Explanation {
        let mut explanation = Explanation::default();
        explanation.push(ExplanationItem::new(keys::QUESTION));
        explanation.push(ExplanationItem::new(keys::AUDIENCE).param("audience", "client"));
        explanation
    }

    #[test]
    fn english_rendering_substitutes_params() {
        let text = sample().to_string();
        assert!(text.starts_with("This prompt was optimized"));
        assert!(text.contains("• **Audience Context**: I specified that this is for a client,"));
        assert!(text.ends_with("match your specific needs."));
    }

    #[test]
    fn custom_localizer_falls_back_to_english() {
        let text = sample().render(&Shouting);
        assert!(text.contains("• CLEAR QUESTION"));
        assert!(text.contains("**Audience Context**"));
    }

    #[test]
    fn unknown_key_renders_as_key() {
        let mut explanation = Explanation::default();
        explanation.push(ExplanationItem::new("explanation.unknown"));
        assert!(explanation.to_string().contains("• explanation.unknown"));
    }
}
