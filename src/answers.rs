//! The wizard's answer set.
//!
//! The frontend hands over a loose bag of strings (`RawAnswers`). It is
//! converted once, here, into `Answers` with typed optional fields, so the
//! composer and scorer never string-match option values themselves.

use crate::language::ResponseLanguage;
use serde::{Deserialize, Serialize};

/// Answer bag as the frontend sends it. Every field is a plain string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnswers {
    #[serde(alias = "question")]
    pub question_raw: Option<String>,
    #[serde(alias = "audience")]
    pub target_audience: Option<String>,
    pub tone: Option<String>,
    pub format: Option<String>,
    #[serde(alias = "complexity")]
    pub generation_mode: Option<String>,
    pub depth: Option<String>,
    pub insight_mode: Option<String>,
    pub polish_input: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Myself,
    Client,
    Manager,
    Code,
    Other,
}

impl Audience {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "myself" => Some(Audience::Myself),
            "client" => Some(Audience::Client),
            "manager" => Some(Audience::Manager),
            "code" => Some(Audience::Code),
            "other" => Some(Audience::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Myself => "myself",
            Audience::Client => "client",
            Audience::Manager => "manager",
            Audience::Code => "code",
            Audience::Other => "other",
        }
    }
}

/// Response tone. The four wizard options, or any free-form label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Friendly,
    Expert,
    Short,
    Creative,
    Custom(String),
}

const BEGINNER_TAGS: &[&str] = &["beginner", "novice", "newbie"];
const PROFESSIONAL_TAGS: &[&str] = &["professional", "analytical", "expert", "academic"];

impl Tone {
    /// Never fails: unknown labels are kept as `Tone::Custom`.
    pub fn parse(value: &str) -> Self {
        let label = value.trim();
        match label.to_ascii_lowercase().as_str() {
            "friendly" => Tone::Friendly,
            "expert" => Tone::Expert,
            "short" => Tone::Short,
            "creative" => Tone::Creative,
            _ => Tone::Custom(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Expert => "expert",
            Tone::Short => "short",
            Tone::Creative => "creative",
            Tone::Custom(label) => label,
        }
    }

    /// Beginner-tagged tones suppress persona injection.
    pub fn is_beginner(&self) -> bool {
        match self {
            Tone::Custom(label) => mentions_any(label, BEGINNER_TAGS),
            _ => false,
        }
    }

    /// Professional or analytical tones qualify for the expert-role preamble.
    pub fn is_professional(&self) -> bool {
        match self {
            Tone::Expert => true,
            Tone::Custom(label) => mentions_any(label, PROFESSIONAL_TAGS),
            _ => false,
        }
    }
}

fn mentions_any(label: &str, tags: &[&str]) -> bool {
    let lower = label.to_lowercase();
    tags.iter().any(|tag| lower.contains(tag))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Bullet,
    Steps,
    Paragraph,
}

impl Format {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bullet" => Some(Format::Bullet),
            "steps" => Some(Format::Steps),
            "paragraph" => Some(Format::Paragraph),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Bullet => "bullet",
            Format::Steps => "steps",
            Format::Paragraph => "paragraph",
        }
    }
}

/// `optimize` adds persona, audience and tone segments; `simple` skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Optimize,
    Simple,
}

impl GenerationMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "optimize" => Some(GenerationMode::Optimize),
            "simple" => Some(GenerationMode::Simple),
            _ => None,
        }
    }
}

/// Shared by the `depth` and `insightMode` answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Deep,
    Simple,
}

impl Depth {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deep" => Some(Depth::Deep),
            "simple" => Some(Depth::Simple),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Depth::Deep => "deep",
            Depth::Simple => "simple",
        }
    }
}

/// Validated answer set. Read-only input to composer and scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub question: String,
    pub audience: Option<Audience>,
    pub tone: Option<Tone>,
    pub format: Option<Format>,
    pub mode: Option<GenerationMode>,
    pub depth: Option<Depth>,
    pub insight: Option<Depth>,
    pub polish_input: Option<bool>,
    pub language: Option<ResponseLanguage>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Unknown value '{value}' for answer '{field}'")]
    UnknownOption { field: &'static str, value: String },
}

impl Answers {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Default::default()
        }
    }

    /// Lenient conversion: unrecognized option values become `None`.
    pub fn from_raw(raw: &RawAnswers) -> Self {
        let mut rejected = Vec::new();
        let answers = Self::convert(raw, &mut rejected);
        for err in &rejected {
            log::warn!("[ANSWERS] Ignoring option: {}", err);
        }
        answers
    }

    /// Strict conversion: the first unrecognized option value is an error.
    pub fn parse_strict(raw: &RawAnswers) -> Result<Self, AnswerError> {
        let mut rejected = Vec::new();
        let answers = Self::convert(raw, &mut rejected);
        match rejected.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(answers),
        }
    }

    fn convert(raw: &RawAnswers, rejected: &mut Vec<AnswerError>) -> Self {
        Self {
            question: raw.question_raw.clone().unwrap_or_default(),
            audience: parse_field(&raw.target_audience, "targetAudience", Audience::parse, rejected),
            tone: non_blank(&raw.tone).map(Tone::parse),
            format: parse_field(&raw.format, "format", Format::parse, rejected),
            mode: parse_field(&raw.generation_mode, "generationMode", GenerationMode::parse, rejected),
            depth: parse_field(&raw.depth, "depth", Depth::parse, rejected),
            insight: parse_field(&raw.insight_mode, "insightMode", Depth::parse, rejected),
            polish_input: parse_field(&raw.polish_input, "polishInput", parse_flag, rejected),
            language: parse_field(&raw.language, "language", ResponseLanguage::parse, rejected),
        }
    }

    pub fn is_optimize(&self) -> bool {
        self.mode == Some(GenerationMode::Optimize)
    }

    pub fn is_beginner(&self) -> bool {
        self.tone.as_ref().is_some_and(Tone::is_beginner)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_field<T>(
    value: &Option<String>,
    field: &'static str,
    parse: impl Fn(&str) -> Option<T>,
    rejected: &mut Vec<AnswerError>,
) -> Option<T> {
    let value = non_blank(value)?;
    let parsed = parse(value);
    if parsed.is_none() {
        rejected.push(AnswerError::UnknownOption {
            field,
            value: value.to_string(),
        });
    }
    parsed
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
