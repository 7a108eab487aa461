//! Local text polishing: whitespace, typos, capitalization and terminal
//! punctuation, with the fix list chosen by the text's script.
//!
//! Pure and offline. `remote::polish_with_service` wraps it for English
//! text when a correction service is configured.

use crate::rules::{self, Script};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolishResult {
    pub polished: String,
    pub was_polished: bool,
    pub script: Script,
}

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Interrogative sentence starters. Word-based languages need a word
/// boundary after the starter; CJK and kana starters are plain prefixes.
static QUESTION_STARTERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // English
        Regex::new(r"(?i)^(what|why|how|when|where|who|which)\b").unwrap(),
        // Russian
        Regex::new(r"(?i)^(что|почему|зачем|как|когда|где|кто|какой|какая|какие|сколько|можно ли)\b").unwrap(),
        // Spanish
        Regex::new(r"(?i)^(¿|qué\b|por qué\b|cómo\b|cuándo\b|dónde\b|quién\b|cuál\b|cuánto\b)").unwrap(),
        // French
        Regex::new(r"(?i)^(pourquoi|comment|quand|où|qui|quel|quelle|quels|quelles|qu'est-ce|est-ce que)\b").unwrap(),
        // German
        Regex::new(r"(?i)^(was|warum|wieso|weshalb|wie|wann|wo|wer|welche|welcher|welches)\b").unwrap(),
        // Arabic
        Regex::new(r"^(ما|ماذا|لماذا|كيف|متى|أين|من|هل)\b").unwrap(),
        // Hebrew
        Regex::new(r"^(מה|למה|איך|מתי|איפה|מי|האם)\b").unwrap(),
        // Chinese and Japanese
        Regex::new(r"^(什么|为什么|怎么|怎样|如何|哪|谁|是否|なぜ|どう|何|いつ|どこ|誰)").unwrap(),
    ]
});

const TERMINAL_MARKS: &[char] = &['.', '!', '?', '。', '！', '？', '؟'];
const QUESTION_MARKS: &[char] = &['?', '？', '؟'];

/// Polish free text. Empty or whitespace-only input is returned unchanged.
///
/// `was_polished` is raised by every step that changed the string, even if
/// a later step undid the change.
pub fn polish_text(text: &str, ui_language: Option<&str>) -> PolishResult {
    let detected = rules::detect_script(text);
    if text.trim().is_empty() {
        return PolishResult {
            polished: text.to_string(),
            was_polished: false,
            script: detected,
        };
    }

    let mut changed = false;

    // 1. Whitespace
    let mut polished = WHITESPACE.replace_all(text, " ").trim().to_string();
    changed |= polished != text;

    // 2. Script, from the characters alone
    let script = rules::detect_script(&polished);

    // 3. Script fixes, in table order
    for (pattern, replacement) in &rules::rules_for(script).fixes {
        let next = pattern.replace_all(&polished, *replacement);
        if next != polished {
            polished = next.into_owned();
            changed = true;
        }
    }

    // 4. Capitalization
    if let Some(capitalized) = capitalize_first_letter(&polished) {
        polished = capitalized;
        changed = true;
    }

    // 5. Terminal punctuation
    if !polished.is_empty() && !polished.ends_with(TERMINAL_MARKS) {
        let (question, statement) = script.terminators();
        let mark = if looks_like_question(&polished) {
            question
        } else {
            statement
        };
        polished.push_str(mark);
        changed = true;
    }

    log::debug!(
        "[POLISH] ui={:?} script={:?} changed={} ({} -> {} chars)",
        ui_language,
        script,
        changed,
        text.chars().count(),
        polished.chars().count()
    );

    PolishResult {
        polished,
        was_polished: changed,
        script,
    }
}

/// Uppercase the first alphabetic character when it is a lowercase Latin
/// or Cyrillic letter. Returns `None` when nothing changes.
fn capitalize_first_letter(text: &str) -> Option<String> {
    let (index, first) = text.char_indices().find(|(_, c)| c.is_alphabetic())?;
    if !first.is_lowercase() || !is_latin_or_cyrillic(first) {
        return None;
    }

    let mut capitalized = String::with_capacity(text.len());
    capitalized.push_str(&text[..index]);
    capitalized.extend(first.to_uppercase());
    capitalized.push_str(&text[index + first.len_utf8()..]);
    Some(capitalized)
}

fn is_latin_or_cyrillic(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{00C0}'..='\u{024F}').contains(&c)
        || ('\u{0400}'..='\u{04FF}').contains(&c)
}

fn looks_like_question(text: &str) -> bool {
    text.contains(QUESTION_MARKS) || QUESTION_STARTERS.iter().any(|re| re.is_match(text))
}
