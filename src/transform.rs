//! Quick transform: a single-pass cleanup for the "just fix my question"
//! path, without the wizard answers.

use regex::Regex;
use std::sync::LazyLock;

static REDUNDANT_PUNCTUATION: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\?{2,}").unwrap(), "?"),
        (Regex::new(r"!{2,}").unwrap(), "!"),
        (Regex::new(r"\.{3,}").unwrap(), "..."),
        (Regex::new(r"\s+").unwrap(), " "),
    ]
});

/// Inputs too vague to send as-is, matched against the lowercased text.
static VAGUE_INPUTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"^(tell me something|say something|anything)\.?$").unwrap(),
            "Provide an interesting and informative explanation about a topic of your choice.",
        ),
        (
            Regex::new(r"^(help|help me)\.?$").unwrap(),
            "Provide helpful guidance and assistance on a topic you'd like to learn about.",
        ),
        (
            Regex::new(r"^what\??\.?$").unwrap(),
            "Explain a concept or topic in detail.",
        ),
        (
            Regex::new(r"^how\??\.?$").unwrap(),
            "Provide step-by-step instructions or explanation for a process.",
        ),
        (
            Regex::new(r"^why\??\.?$").unwrap(),
            "Explain the reasons and background behind a concept or phenomenon.",
        ),
        (
            Regex::new(r"^(explain|explain something)\.?$").unwrap(),
            "Provide a detailed explanation about a topic of interest.",
        ),
    ]
});

static TRAILING_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+$").unwrap());

const QUESTION_STARTERS: &[&str] = &["What", "Why", "How", "When", "Where", "Who"];
const DETAIL_WORDS: &[&str] = &["detailed", "explain", "describe", "comprehensive", "step-by-step"];
const CLARITY_SUFFIX: &str = "Be clear and detailed in your response.";

const QUALITY_INDICATORS: &[&str] = &[
    "detailed",
    "comprehensive",
    "explain",
    "describe",
    "analyze",
    "including",
    "such as",
    "for example",
    "step-by-step",
    "background",
    "context",
    "examples",
    "implications",
    "considerations",
];

/// Clean up a raw prompt. Blank input yields an empty string.
pub fn transform_prompt(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut text = trimmed.to_string();
    for (pattern, replacement) in REDUNDANT_PUNCTUATION.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    let text = capitalize_ascii_start(text);
    let text = enrich_vague_input(text);
    let text = add_missing_question_mark(text);
    add_clarity_suffix(text)
}

fn capitalize_ascii_start(mut text: String) -> String {
    if let Some(first) = text.get(..1) {
        if first.as_bytes()[0].is_ascii_lowercase() {
            let upper = first.to_ascii_uppercase();
            text.replace_range(..1, &upper);
        }
    }
    text
}

fn enrich_vague_input(text: String) -> String {
    let lower = text.trim().to_lowercase();
    VAGUE_INPUTS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map(|(_, replacement)| replacement.to_string())
        .unwrap_or(text)
}

fn add_missing_question_mark(mut text: String) -> String {
    if QUESTION_STARTERS.iter().any(|s| text.starts_with(s)) {
        if text.ends_with('.') {
            text.pop();
            text.push('?');
        } else if !text.ends_with('?') {
            text.push('?');
        }
    }
    text
}

fn add_clarity_suffix(text: String) -> String {
    let length = text.chars().count();
    if length > 100 || DETAIL_WORDS.iter().any(|w| text.contains(w)) {
        return text;
    }

    let lower = text.to_lowercase();
    let simple_question = length < 50
        && (text.contains('?')
            || ["what", "how", "why", "who", "when", "where"]
                .iter()
                .any(|s| lower.starts_with(s)));
    if !simple_question {
        return text;
    }

    let core = TRAILING_PUNCTUATION.replace(&text, "");
    format!("{core}? {CLARITY_SUFFIX}")
}

/// Rough quality check: long prompts pass, short ones need two indicators.
pub fn is_high_quality_prompt(prompt: &str) -> bool {
    let length = prompt.chars().count();
    if length < 20 {
        return false;
    }

    let lower = prompt.to_lowercase();
    let indicators = QUALITY_INDICATORS
        .iter()
        .filter(|indicator| lower.contains(*indicator))
        .count();
    indicators >= 2 || length > 80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(transform_prompt(""), "");
        assert_eq!(transform_prompt("   \n"), "");
    }

    #[test]
    fn simple_question_gets_clarity_suffix() {
        assert_eq!(
            transform_prompt("   what is AI???   "),
            "What is AI? Be clear and detailed in your response."
        );
        assert_eq!(
            transform_prompt("What is marketing"),
            "What is marketing? Be clear and detailed in your response."
        );
    }

    #[test]
    fn vague_input_is_replaced() {
        assert_eq!(
            transform_prompt("tell me something"),
            "Provide an interesting and informative explanation about a topic of your choice."
        );
        assert_eq!(
            transform_prompt("how?"),
            "Provide step-by-step instructions or explanation for a process."
        );
        assert_eq!(transform_prompt("what"), "Explain a concept or topic in detail.");
    }

    #[test]
    fn detailed_prompt_is_left_alone() {
        let prompt = "Explain the impact of climate change on global agriculture in a detailed and structured way.";
        assert_eq!(transform_prompt(prompt), prompt);
    }

    #[test]
    fn statement_becomes_question_for_starters() {
        assert_eq!(
            transform_prompt("Where can I find the best coffee in Lisbon for a long afternoon of reading."),
            "Where can I find the best coffee in Lisbon for a long afternoon of reading?"
        );
    }

    #[test]
    fn collapses_whitespace_and_ellipses() {
        assert_eq!(
            transform_prompt("I was thinking.....   maybe we could plan a team offsite somewhere warm"),
            "I was thinking... maybe we could plan a team offsite somewhere warm"
        );
    }

    #[test]
    fn quality_check() {
        assert!(!is_high_quality_prompt("Hi"));
        assert!(is_high_quality_prompt(
            "Explain the history and cultural impact of jazz music, including key figures and movements."
        ));
        assert!(is_high_quality_prompt(
            "Provide a comprehensive explanation and include examples."
        ));
        assert!(!is_high_quality_prompt("Tell me about the moon please."));
    }
}
