//! End-to-end wizard flows: raw answers in, composed prompt and score out.

use prompt_sensei_lib::answers::{Answers, RawAnswers};
use prompt_sensei_lib::compose::explain::keys;
use prompt_sensei_lib::score::{Tier, SUGGEST_PERSONA};
use prompt_sensei_lib::share::{share_url, AiPlatform};
use prompt_sensei_lib::{compose_prompt, score_prompt};

fn answers(json: &str) -> Answers {
    let raw: RawAnswers = serde_json::from_str(json).unwrap();
    Answers::parse_strict(&raw).unwrap()
}

// ── Composition ─────────────────────────────────────────────────────

#[test]
fn etsy_pricing_question_scores_great() {
    let answers = answers(
        r#"{
            "questionRaw": "How do I price my Etsy shop items?",
            "targetAudience": "client",
            "tone": "expert",
            "format": "bullet",
            "generationMode": "optimize",
            "language": "english"
        }"#,
    );
    let composed = compose_prompt(&answers, Some("en"));

    assert!(composed
        .prompt
        .starts_with("You are an experienced e-commerce strategist"));
    assert!(composed.prompt.contains("How do I price my Etsy shop items?"));
    assert!(composed.prompt.contains("bullet list"));
    assert!(composed.polish_info.is_none());

    let score = score_prompt(&composed.prompt, &answers);
    assert_eq!(score.score, 10);
    assert_eq!(score.tier, Tier::Great);
    assert!(score.suggestions.is_empty());
}

#[test]
fn simple_mode_keeps_question_format_and_language() {
    let answers = answers(
        r#"{
            "question": "Summarize the meeting",
            "audience": "manager",
            "tone": "friendly",
            "format": "steps",
            "complexity": "simple",
            "language": "english"
        }"#,
    );
    let composed = compose_prompt(&answers, Some("en"));
    assert_eq!(
        composed.prompt,
        "Summarize the meeting. Please provide a step-by-step response with numbered instructions. \
         Please respond in clear, fluent English."
    );
    assert!(!composed.explanation.contains(keys::AUDIENCE));

    let score = score_prompt(&composed.prompt, &answers);
    assert_eq!(score.breakdown.length, 1);
    assert_eq!(score.breakdown.persona, 0);
    assert_eq!(score.breakdown.format, 2);
    assert_eq!(score.breakdown.specificity, 2);
    assert_eq!(score.breakdown.structure, 1);
    assert_eq!(score.score, 6);
    assert_eq!(score.tier, Tier::Good);
    assert!(!score.suggestions.contains(&SUGGEST_PERSONA));
    assert!(score.suggestions.is_empty());
}

#[test]
fn deep_code_request_uses_implementation_variants() {
    let answers = answers(
        r#"{
            "questionRaw": "Write a function that merges two sorted lists in Rust",
            "targetAudience": "code",
            "tone": "expert",
            "format": "steps",
            "generationMode": "optimize",
            "depth": "deep",
            "language": "english"
        }"#,
    );
    let composed = compose_prompt(&answers, None);

    assert!(composed.prompt.starts_with("You are a senior software engineer"));
    assert!(composed.prompt.contains("code snippet for each step"));
    assert!(composed.prompt.contains("edge cases, performance"));
    assert!(composed.explanation.contains(keys::DEPTH_CODE));

    let score = score_prompt(&composed.prompt, &answers);
    assert_eq!(score.breakdown.structure, 2);
    assert_eq!(score.tier, Tier::Great);
}

#[test]
fn russian_ui_polishes_and_answers_in_russian() {
    let answers = answers(
        r#"{
            "questionRaw": "чо делать щас",
            "generationMode": "optimize",
            "language": "auto"
        }"#,
    );
    let composed = compose_prompt(&answers, Some("ru"));

    let info = composed.polish_info.as_ref().unwrap();
    assert_eq!(info.original, "чо делать щас");
    assert_eq!(info.polished, "Что делать сейчас?");
    assert!(composed.prompt.starts_with("Что делать сейчас?"));
    assert!(composed.prompt.contains("на русском языке"));
    assert!(composed.explanation.contains(keys::POLISHED));
}

#[test]
fn lenient_parsing_drops_unknown_options() {
    let raw: RawAnswers = serde_json::from_str(
        r#"{"questionRaw": "Plan a trip", "format": "haiku", "generationMode": "optimize"}"#,
    )
    .unwrap();
    assert!(Answers::parse_strict(&raw).is_err());

    let answers = Answers::from_raw(&raw);
    assert_eq!(answers.format, None);
    let prompt = compose_prompt(&answers, None).prompt;
    assert!(!prompt.contains("Please provide"));
}

#[test]
fn composition_is_deterministic() {
    let answers = answers(
        r#"{
            "questionRaw": "how can i grow my newsletter",
            "tone": "creative",
            "insightMode": "deep",
            "polishInput": "true",
            "generationMode": "optimize"
        }"#,
    );
    let first = compose_prompt(&answers, Some("es"));
    let second = compose_prompt(&answers, Some("es"));
    assert_eq!(first, second);
    assert_eq!(score_prompt(&first.prompt, &answers), score_prompt(&second.prompt, &answers));
}

#[test]
fn chinese_question_is_polished_once() {
    let answers = answers(
        r#"{"questionRaw": "什么是人工智能", "tone": "friendly", "generationMode": "optimize"}"#,
    );
    let composed = compose_prompt(&answers, Some("zh"));
    assert!(composed.prompt.contains("什么是人工智能？ "));
    assert!(!composed.prompt.contains("？."));
}

#[test]
fn spanish_ui_still_repairs_english_text() {
    let answers = answers(
        r#"{"questionRaw": "i dont know what im doing", "polishInput": "true", "generationMode": "optimize"}"#,
    );
    let composed = compose_prompt(&answers, Some("es"));
    assert_eq!(
        composed.polish_info.unwrap().polished,
        "I don't know what I'm doing."
    );
}

// ── Explanation & sharing ───────────────────────────────────────────

#[test]
fn explanation_reads_as_bullets() {
    let answers = answers(
        r#"{"questionRaw": "Tell me about tides", "tone": "friendly", "format": "paragraph", "generationMode": "optimize"}"#,
    );
    let text = compose_prompt(&answers, None).explanation.to_string();
    assert!(text.starts_with("This prompt was optimized with several key elements:"));
    assert!(text.contains("• **Format Specification**: I requested paragraph format"));
    assert!(text.contains("• **Response Language**: I instructed the AI to answer in English."));
}

#[test]
fn composed_prompt_can_be_shared() {
    let composed = compose_prompt(&Answers::new("What is AI?"), None);
    let url = share_url(AiPlatform::Gemini, &composed.prompt).unwrap();
    assert!(url.as_str().starts_with("https://gemini.google.com/app?q="));
    let (_, value) = url.query_pairs().next().unwrap();
    assert_eq!(value, composed.prompt);
}
