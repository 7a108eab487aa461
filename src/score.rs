//! Prompt quality scoring.
//!
//! An independent pass over the finished prompt: five 0–2 sub-scores read
//! from the marker sets in `rules`, plus a one-point bonus when the user
//! asked for input polishing.

use crate::answers::{Answers, Depth, GenerationMode};
use crate::rules::{self, MarkerSet, Script};
use regex::Regex;
use serde::Serialize;

pub const MAX_SCORE: u8 = 10;

pub const SUGGEST_LENGTH: &str = "Try being more specific about your goal or requirements";
pub const SUGGEST_PERSONA: &str = "Enable 'Make it smarter' for automatic expert role detection";
pub const SUGGEST_FORMAT: &str = "Add format specification like bullet points or step-by-step";
pub const SUGGEST_SPECIFICITY: &str = "Add specific requests like 'include examples' or 'explain how'";
pub const SUGGEST_STRUCTURE: &str = "Consider specifying your audience or enabling DeepSearch mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Poor,
    Good,
    Great,
}

impl Tier {
    pub fn for_score(score: u8) -> Self {
        match score {
            8.. => Tier::Great,
            5..=7 => Tier::Good,
            _ => Tier::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub length: u8,
    pub persona: u8,
    pub format: u8,
    pub specificity: u8,
    pub structure: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        self.length + self.persona + self.format + self.specificity + self.structure
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: Tier,
    pub suggestions: Vec<&'static str>,
    pub breakdown: ScoreBreakdown,
}

/// Score a finished prompt against the answers that produced it.
pub fn score_prompt(prompt: &str, answers: &Answers) -> ScoreResult {
    let script = rules::detect_script(prompt);
    let has = |pick: fn(&MarkerSet) -> &Regex| has_marker(prompt, script, pick);
    let beginner = answers.is_beginner();

    let mut breakdown = ScoreBreakdown::default();
    let mut suggestions = Vec::new();

    let length = prompt.chars().count();
    if length > 150 {
        breakdown.length = 2;
    } else if length > 50 {
        breakdown.length = 1;
    } else {
        suggestions.push(SUGGEST_LENGTH);
    }

    if has(|m| &m.persona) {
        breakdown.persona = 2;
    } else if answers.is_optimize() && !beginner {
        suggestions.push(SUGGEST_PERSONA);
    }

    if has(|m| &m.format) {
        breakdown.format = 2;
    } else {
        suggestions.push(SUGGEST_FORMAT);
    }

    if has(|m| &m.specificity) {
        breakdown.specificity = 2;
    } else {
        suggestions.push(SUGGEST_SPECIFICITY);
    }

    if has(|m| &m.structure) || answers.depth == Some(Depth::Deep) {
        breakdown.structure = 2;
    } else if answers.mode == Some(GenerationMode::Simple) || (beginner && has(|m| &m.beginner)) {
        breakdown.structure = 1;
    } else {
        suggestions.push(SUGGEST_STRUCTURE);
    }

    let bonus = u8::from(answers.polish_input == Some(true));
    let score = (breakdown.total() + bonus).min(MAX_SCORE);
    let tier = Tier::for_score(score);

    log::debug!(
        "[SCORE] script={:?} score={} tier={:?} breakdown={:?}",
        script,
        score,
        tier,
        breakdown
    );

    ScoreResult {
        score,
        tier,
        suggestions,
        breakdown,
    }
}

/// Markers of the prompt's own script, always widened with the English set
/// since composed prompts mix native sentences with English scaffolding.
fn has_marker(prompt: &str, script: Script, pick: fn(&MarkerSet) -> &Regex) -> bool {
    let native = pick(&rules::rules_for(script).markers).is_match(prompt);
    native
        || (script != Script::English
            && pick(&rules::rules_for(Script::English).markers).is_match(prompt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Tone;

    const RICH: &str = "You are an expert analyst. Please provide a detailed bullet list for my client \
        explaining how the quarterly numbers changed, and include examples from each region so \
        the story is easy to follow.";

    #[test]
    fn length_thresholds_are_exact() {
        let answers = Answers::default();
        assert_eq!(score_prompt(&"x".repeat(151), &answers).breakdown.length, 2);
        assert_eq!(score_prompt(&"x".repeat(150), &answers).breakdown.length, 1);
        assert_eq!(score_prompt(&"x".repeat(100), &answers).breakdown.length, 1);
        assert_eq!(score_prompt(&"x".repeat(51), &answers).breakdown.length, 1);
        assert_eq!(score_prompt(&"x".repeat(40), &answers).breakdown.length, 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::for_score(10), Tier::Great);
        assert_eq!(Tier::for_score(8), Tier::Great);
        assert_eq!(Tier::for_score(7), Tier::Good);
        assert_eq!(Tier::for_score(5), Tier::Good);
        assert_eq!(Tier::for_score(4), Tier::Poor);
        assert_eq!(Tier::for_score(0), Tier::Poor);
    }

    #[test]
    fn rich_prompt_scores_full_marks() {
        assert!(RICH.chars().count() > 150);
        let result = score_prompt(RICH, &Answers::default());
        assert_eq!(
            result.breakdown,
            ScoreBreakdown {
                length: 2,
                persona: 2,
                format: 2,
                specificity: 2,
                structure: 2,
            }
        );
        assert_eq!(result.score, 10);
        assert_eq!(result.tier, Tier::Great);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn polish_bonus_is_clamped() {
        let answers = Answers {
            polish_input: Some(true),
            ..Answers::default()
        };
        assert_eq!(score_prompt(RICH, &answers).score, MAX_SCORE);

        let bare = score_prompt("hello there", &answers);
        assert_eq!(bare.breakdown.total(), 0);
        assert_eq!(bare.score, 1);
    }

    #[test]
    fn bare_prompt_collects_every_suggestion() {
        let answers = Answers {
            mode: Some(GenerationMode::Optimize),
            ..Answers::default()
        };
        let result = score_prompt("hello there", &answers);
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, Tier::Poor);
        assert_eq!(
            result.suggestions,
            vec![
                SUGGEST_LENGTH,
                SUGGEST_PERSONA,
                SUGGEST_FORMAT,
                SUGGEST_SPECIFICITY,
                SUGGEST_STRUCTURE,
            ]
        );
    }

    #[test]
    fn beginner_tone_hides_persona_suggestion_and_earns_structure() {
        let answers = Answers {
            tone: Some(Tone::Custom("beginner".into())),
            ..Answers::default()
        };
        let result = score_prompt("Explain step by step how tides work.", &answers);
        assert!(!result.suggestions.contains(&SUGGEST_PERSONA));
        assert_eq!(result.breakdown.structure, 1);
    }

    #[test]
    fn persona_suggestion_only_in_optimize_mode() {
        let prompt = "Summarize the meeting. Please provide a step-by-step response.";
        let simple = Answers {
            mode: Some(GenerationMode::Simple),
            ..Answers::default()
        };
        let result = score_prompt(prompt, &simple);
        assert_eq!(result.breakdown.persona, 0);
        assert!(result.suggestions.is_empty());

        assert!(!score_prompt(prompt, &Answers::default())
            .suggestions
            .contains(&SUGGEST_PERSONA));
    }

    #[test]
    fn lowercase_role_words_do_not_count() {
        let result = score_prompt("Tell me who you are and what you do", &Answers::default());
        assert_eq!(result.breakdown.persona, 0);
        assert_eq!(result.breakdown.format, 0);
    }

    #[test]
    fn simple_mode_and_deep_depth_feed_structure() {
        let simple = Answers {
            mode: Some(GenerationMode::Simple),
            ..Answers::default()
        };
        assert_eq!(score_prompt("hello there", &simple).breakdown.structure, 1);

        let deep = Answers {
            depth: Some(Depth::Deep),
            ..Answers::default()
        };
        assert_eq!(score_prompt("hello there", &deep).breakdown.structure, 2);
    }

    #[test]
    fn native_markers_are_recognized() {
        let result = score_prompt(
            "Ты — эксперт. Дай подробный ответ в виде списка для клиента.",
            &Answers::default(),
        );
        assert_eq!(result.breakdown.persona, 2);
        assert_eq!(result.breakdown.format, 2);
        assert_eq!(result.breakdown.specificity, 2);
        assert_eq!(result.breakdown.structure, 2);
    }

    #[test]
    fn english_scaffolding_counts_in_native_prompts() {
        let result = score_prompt(
            "什么是人工智能？ Please provide a bullet list.",
            &Answers::default(),
        );
        assert_eq!(result.breakdown.format, 2);
        assert_eq!(result.breakdown.specificity, 2);
    }
}
