//! Per-script rule table, shared by the polisher and the scorer.
//!
//! Every writing system has one entry: an ordered list of
//! `(pattern, replacement)` fixes applied by `polish`, and the marker sets
//! `score` looks for in a finished prompt. Both callers classify text with
//! the same `detect_script`, so a string always lands in the same bucket.

mod table;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Writing-system bucket. Variant order is the detection precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Script {
    Cyrillic,
    Han,
    Arabic,
    Hebrew,
    Kana,
    LatinAccented,
    German,
    English,
}

const LATIN_ACCENT_CHARS: &str = "àâçéèêëîïôûùÿñáíóúœ¿¡ÀÂÇÉÈÊËÎÏÔÛÙŸÑÁÍÓÚŒ";
const GERMAN_UMLAUT_CHARS: &str = "äöüßÄÖÜẞ";

/// Detection order. The first family present anywhere in the text wins.
const DETECTION_ORDER: [(Script, fn(char) -> bool); 7] = [
    (Script::Cyrillic, is_cyrillic),
    (Script::Han, is_han),
    (Script::Arabic, is_arabic),
    (Script::Hebrew, is_hebrew),
    (Script::Kana, is_kana),
    (Script::LatinAccented, is_latin_accented),
    (Script::German, is_german_umlaut),
];

fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

fn is_hebrew(c: char) -> bool {
    ('\u{0590}'..='\u{05FF}').contains(&c)
}

fn is_kana(c: char) -> bool {
    ('\u{3040}'..='\u{30FF}').contains(&c)
}

fn is_latin_accented(c: char) -> bool {
    LATIN_ACCENT_CHARS.contains(c)
}

fn is_german_umlaut(c: char) -> bool {
    GERMAN_UMLAUT_CHARS.contains(c)
}

/// Classify text into exactly one script bucket; plain text is English.
pub fn detect_script(text: &str) -> Script {
    DETECTION_ORDER
        .iter()
        .find(|(_, in_family)| text.chars().any(in_family))
        .map(|(script, _)| *script)
        .unwrap_or(Script::English)
}

impl Script {
    /// Terminal marks appended by the polisher: (question, statement).
    pub fn terminators(self) -> (&'static str, &'static str) {
        match self {
            Script::Han | Script::Kana => ("？", "。"),
            Script::Arabic => ("؟", "."),
            _ => ("?", "."),
        }
    }
}

/// Markers the scorer looks for, one pattern per scoring dimension.
pub struct MarkerSet {
    pub persona: Regex,
    pub format: Regex,
    pub specificity: Regex,
    pub structure: Regex,
    pub beginner: Regex,
}

pub struct ScriptRules {
    pub script: Script,
    pub fixes: Vec<(Regex, &'static str)>,
    pub markers: MarkerSet,
}

/// Rule entry for a script.
pub fn rules_for(script: Script) -> &'static ScriptRules {
    match script {
        Script::Cyrillic => &table::CYRILLIC,
        Script::Han => &table::HAN,
        Script::Arabic => &table::ARABIC,
        Script::Hebrew => &table::HEBREW,
        Script::Kana => &table::KANA,
        Script::LatinAccented => &table::LATIN_ACCENTED,
        Script::German => &table::GERMAN,
        Script::English => &table::ENGLISH,
    }
}
