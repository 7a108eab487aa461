//! Prompt composer.
//!
//! Builds the final prompt from an answer set as an ordered list of
//! sentences: role preamble, question, audience, format, tone, depth,
//! insight, response language and the beginner clarity suffix. Each
//! sentence comes from the UI locale's phrase dictionary.

pub mod explain;
mod phrases;

use crate::answers::{Answers, Audience, Depth};
use crate::language::{resolve_language, Language, Locale};
use crate::persona::detect_persona;
use crate::polish::polish_text;
use explain::{keys, Explanation, ExplanationItem};
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolishInfo {
    pub original: String,
    pub polished: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedPrompt {
    pub prompt: String,
    pub explanation: Explanation,
    pub polish_info: Option<PolishInfo>,
}

/// Full stops and question marks, including the full-width and Arabic
/// forms the polisher emits.
const SENTENCE_END: &[char] = &['.', '?', '。', '？', '؟'];

/// Questions that already cast the AI (or the asker) as an expert.
static SELF_DECLARED_EXPERTISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(act as|you are|as|i am|i'm) an? (expert|specialist|professional)\b|\bкак эксперт|\bты\s*—?\s*эксперт|\bвыступи в роли эксперта|\bcomo (un )?experto\b|\beres (un )?experto\b",
    )
    .unwrap()
});

/// Compose the final prompt. `ui_language` is a locale code such as `"ru"`;
/// unknown or missing codes use the English dictionary.
pub fn compose_prompt(answers: &Answers, ui_language: Option<&str>) -> ComposedPrompt {
    let locale = Locale::from_code(ui_language);
    let language = resolve_language(answers.language, locale);
    let code_audience = answers.audience == Some(Audience::Code);

    let mut segments: Vec<Cow<'static, str>> = Vec::new();
    let mut explanation = Explanation::default();

    // 1. Input polish, on by default for non-English responses
    let polish_enabled = answers
        .polish_input
        .unwrap_or(language != Language::English);
    let mut polish_info = None;
    let mut question = answers.question.clone();
    if polish_enabled {
        let result = polish_text(&answers.question, ui_language);
        if result.was_polished {
            polish_info = Some(PolishInfo {
                original: answers.question.clone(),
                polished: result.polished.clone(),
            });
            explanation.push(ExplanationItem::new(keys::POLISHED));
            question = result.polished;
        }
    }

    // 2. Role preamble
    let mut expert_role = false;
    if answers.is_optimize() && !answers.is_beginner() {
        if let Some(persona) = detect_persona(&question) {
            segments.push(persona.preamble.into());
            explanation.push(
                ExplanationItem::new(keys::PERSONA_DETECTED).param("domain", persona.domain.as_str()),
            );
        } else if wants_expert_role(answers, &question) {
            segments.push(phrases::expert_role(locale).into());
            expert_role = true;
            let tone = answers.tone.as_ref().map(|t| t.label()).unwrap_or_default();
            explanation.push(ExplanationItem::new(keys::PERSONA_EXPERT).param("tone", tone));
        } else if let Some(tone) = &answers.tone {
            if let Some(sentence) = phrases::tone_persona(locale, tone) {
                segments.push(sentence.into());
                explanation.push(ExplanationItem::new(keys::PERSONA_TONE).param("tone", tone.label()));
            }
        }
    }

    // 3. The question itself
    let mut core = question.trim().to_string();
    if !core.ends_with(SENTENCE_END) {
        core.push('.');
    }
    segments.push(core.into());
    explanation.push(ExplanationItem::new(keys::QUESTION));

    // 4. Audience
    if let Some(audience) = answers.audience.filter(|_| answers.is_optimize()) {
        segments.push(phrases::audience_sentence(locale, audience).into());
        explanation.push(ExplanationItem::new(keys::AUDIENCE).param("audience", audience.as_str()));
    }

    // 5. Format, in every mode
    if let Some(format) = answers.format {
        segments.push(phrases::format_sentence(locale, format, code_audience).into());
        explanation.push(ExplanationItem::new(keys::FORMAT).param("format", format.as_str()));
    }

    // 6. Tone refinement
    if answers.is_optimize() {
        if let Some(tone) = &answers.tone {
            if let Some(sentence) = phrases::tone_refinement(locale, tone) {
                segments.push(sentence.into());
                explanation.push(ExplanationItem::new(keys::TONE).param("tone", tone.label()));
            }
        }
    }

    // 7. Depth
    if answers.depth == Some(Depth::Deep) {
        segments.push(phrases::depth_sentence(locale, code_audience).into());
        let key = if code_audience { keys::DEPTH_CODE } else { keys::DEPTH };
        explanation.push(ExplanationItem::new(key));
    }

    // 8. Insight
    if answers.insight == Some(Depth::Deep) {
        segments.push(phrases::insight_sentence(locale).into());
        explanation.push(ExplanationItem::new(keys::INSIGHT));
    }

    // 9. Response language
    segments.push(phrases::language_directive(language));
    explanation.push(ExplanationItem::new(keys::LANGUAGE).param("language", language.name()));

    // 10. Clarity suffix
    if expert_role || (answers.is_beginner() && polish_enabled) {
        segments.push(phrases::clarity_suffix(locale).into());
        explanation.push(ExplanationItem::new(keys::CLARITY));
    }

    let prompt = segments.join(" ");
    log::info!(
        "[COMPOSE] locale={} language={} segments={} polished={}",
        locale.code(),
        language.code(),
        segments.len(),
        polish_info.is_some()
    );

    ComposedPrompt {
        prompt,
        explanation,
        polish_info,
    }
}

/// Professional tone plus deep depth or insight, unless the question
/// already declares expertise.
fn wants_expert_role(answers: &Answers, question: &str) -> bool {
    let professional = answers.tone.as_ref().is_some_and(|t| t.is_professional());
    let deep = answers.depth == Some(Depth::Deep) || answers.insight == Some(Depth::Deep);
    professional && deep && !SELF_DECLARED_EXPERTISE.is_match(question)
}
