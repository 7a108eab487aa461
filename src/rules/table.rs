//! Static rule entries, one per script.
//!
//! Fix lists run top to bottom. Marker patterns are matched against the
//! whole finished prompt.

use super::{MarkerSet, Script, ScriptRules};
use regex::Regex;
use std::sync::LazyLock;

fn fixes(pairs: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    pairs
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

fn marker(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

pub(super) static ENGLISH: LazyLock<ScriptRules> = LazyLock::new(|| ScriptRules {
    script: Script::English,
    fixes: fixes(&[
        (r"\bi\b", "I"),
        (r"(?i)\bim\b", "I'm"),
        (r"(?i)\bdont\b", "don't"),
        (r"(?i)\bcant\b", "can't"),
        (r"(?i)\bwont\b", "won't"),
        (r"(?i)\bisnt\b", "isn't"),
        (r"(?i)\barent\b", "aren't"),
        (r"(?i)\bdoesnt\b", "doesn't"),
        (r"(?i)\bdidnt\b", "didn't"),
        (r"(?i)\bwasnt\b", "wasn't"),
        (r"(?i)\bcouldnt\b", "couldn't"),
        (r"(?i)\bshouldnt\b", "shouldn't"),
        (r"(?i)\bwouldnt\b", "wouldn't"),
        (r"(?i)\bsaj\b", "say"),
        (r"(?i)\bteh\b", "the"),
        (r"(?i)\brecieve\b", "receive"),
        (r"(?i)\bdefinately\b", "definitely"),
        (r"(?i)\bseperate\b", "separate"),
        (r"(?i)\bwich\b", "which"),
        (r"(?i)\bbecuase\b", "because"),
        (r"(?i)\buntill\b", "until"),
        (r"(?i)\bto do not\b", "not to"),
        (r"(?i)\bwow can i\b", "How can I"),
        (r"\?{2,}", "?"),
        (r"!{2,}", "!"),
        (r"\s+([?!.,;:])", "$1"),
    ]),
    markers: MarkerSet {
        persona: marker(r"Act as|You are|expert|assistant"),
        format: marker(r"bullet|step|list|paragraph"),
        specificity: marker(
            r"(?i)specific|detailed|examples|include|please provide|explain how|show me",
        ),
        structure: marker(r"audience|client|manager"),
        beginner: marker(r"(?i)beginner|step by step|simple, clear"),
    },
});

pub(super) static CYRILLIC: LazyLock<ScriptRules> = LazyLock::new(|| ScriptRules {
    script: Script::Cyrillic,
    fixes: fixes(&[
        (r"(?i)\bщас\b", "сейчас"),
        (r"(?i)\bчо\b", "что"),
        (r"(?i)\bчё\b", "что"),
        (r"(?i)\bшо\b", "что"),
        (r"(?i)\bпожалуйсто\b", "пожалуйста"),
        (r"(?i)\bзделать\b", "сделать"),
        (r"(?i)\bвообщем\b", "в общем"),
        (r"(?i)\bтоесть\b", "то есть"),
        (r"(?i)\bкакбудто\b", "как будто"),
        (r"(?i)\bизвените\b", "извините"),
        (r"\?{2,}", "?"),
        (r"!{2,}", "!"),
        (r"\s+([?!.,;:])", "$1"),
        (r"([,;:])(\p{Cyrillic})", "$1 $2"),
    ]),
    markers: MarkerSet {
        persona: marker(r"(?i)\bты\s+—|\bвы\s+—|выступи в роли|представь, что ты|эксперт|ассистент|специалист"),
        format: marker(r"(?i)списк|шаг|абзац|пункт"),
        specificity: marker(r"(?i)конкретн|подробн|пример|включи"),
        structure: marker(r"(?i)аудитори|клиент|руководств|контекст"),
        beginner: marker(r"(?i)новичк|начинающ|простым языком|пошагово"),
    },
});

pub(super) static HAN: LazyLock<ScriptRules> = LazyLock::new(|| ScriptRules {
    script: Script::Han,
    fixes: fixes(&[
        (r"\s*([，。！？、；：])\s*", "$1"),
        (r"(\p{Han})\s*\?", "$1？"),
        (r"(\p{Han})\s*!", "$1！"),
        (r"(\p{Han})\s*,\s*", "$1，"),
        (r"？{2,}", "？"),
        (r"！{2,}", "！"),
        (r"。{2,}", "。"),
    ]),
    markers: MarkerSet {
        persona: marker(r"你是|扮演|专家|助手|あなたは|専門家"),
        format: marker(r"列表|要点|步骤|段落|箇条書き|ステップ"),
        specificity: marker(r"具体|详细|例子|示例|詳しく"),
        structure: marker(r"受众|客户|经理|管理层|背景|顧客|上司"),
        beginner: marker(r"初学者|新手|简单易懂|初心者|わかりやすく"),
    },
});

pub(super) static ARABIC: LazyLock<ScriptRules> = LazyLock::new(|| ScriptRules {
    script: Script::Arabic,
    fixes: fixes(&[
        (r",", "،"),
        (r"\?", "؟"),
        (r"؟{2,}", "؟"),
        (r"!{2,}", "!"),
        (r"\s+([،؛؟.!])", "$1"),
    ]),
    markers: MarkerSet {
        persona: marker(r"أنت|خبير|مساعد|بصفتك"),
        format: marker(r"نقاط|خطوات|فقرة|قائمة"),
        specificity: marker(r"محدد|مفصل|أمثلة|مثال"),
        structure: marker(r"الجمهور|العميل|المدير|السياق"),
        beginner: marker(r"مبتدئ|بسيطة|خطوة بخطوة"),
    },
});

pub(super) static HEBREW: LazyLock<ScriptRules> = LazyLock::new(|| ScriptRules {
    script: Script::Hebrew,
    fixes: fixes(&[
        (r"\?{2,}", "?"),
        (r"!{2,}", "!"),
        (r"\s+([?!.,;:])", "$1"),
    ]),
    markers: MarkerSet {
        persona: marker(r"אתה|מומחה|עוזר"),
        format: marker(r"רשימה|שלבים|פסקה|נקודות"),
        specificity: marker(r"ספציפי|מפורט|דוגמ"),
        structure: marker(r"קהל|לקוח|מנהל|הקשר"),
        beginner: marker(r"מתחיל|פשוטה|שלב אחר שלב"),
    },
});

pub(super) static KANA: LazyLock<ScriptRules> = LazyLock::new(|| ScriptRules {
    script: Script::Kana,
    fixes: fixes(&[
        (r"\s*([、。！？「」])\s*", "$1"),
        (r"([\p{Hiragana}\p{Katakana}])\s*\?", "$1？"),
        (r"([\p{Hiragana}\p{Katakana}])\s*!", "$1！"),
        (r"([\p{Hiragana}\p{Katakana}])\s*,\s*", "$1、"),
        (r"？{2,}", "？"),
        (r"！{2,}", "！"),
        (r"。{2,}", "。"),
    ]),
    markers: MarkerSet {
        persona: marker(r"あなたは|専門家|アシスタント|として"),
        format: marker(r"箇条書き|ステップ|段落|手順"),
        specificity: marker(r"具体的|詳しく|例"),
        structure: marker(r"顧客|上司|対象|背景"),
        beginner: marker(r"初心者|わかりやすく"),
    },
});

pub(super) static LATIN_ACCENTED: LazyLock<ScriptRules> = LazyLock::new(|| ScriptRules {
    script: Script::LatinAccented,
    fixes: fixes(&[
        (r"(?i)\bxq\b", "porque"),
        (r"(?i)\bpq\b", "porque"),
        (r"(?i)\btb\b", "también"),
        (r"(?i)\bxfa\b", "por favor"),
        (r"(?i)\bporfa\b", "por favor"),
        (r"(?i)\bstp\b", "s'il te plaît"),
        (r"(?i)\bsvp\b", "s'il vous plaît"),
        (r"(?i)\bpk\b", "pourquoi"),
        (r"(?i)\bsa va\b", "ça va"),
        (r"\?{2,}", "?"),
        (r"!{2,}", "!"),
        (r"¿{2,}", "¿"),
        (r"¿\s+", "¿"),
        (r"¡\s+", "¡"),
        (r"\s+([,.])", "$1"),
        (r"(¿[^?]*?)\s+\?", "$1?"),
        (r"(¡[^!]*?)\s+!", "$1!"),
    ]),
    markers: MarkerSet {
        persona: marker(r"(?i)\beres\b|actúa como|experto|experta|asistente|vous êtes|\btu es\b|agis comme|expert|assistant"),
        format: marker(r"(?i)viñetas|lista|pasos|párrafo|liste|puces|étape|paragraphe"),
        specificity: marker(r"(?i)específic|detallad|ejemplo|incluye|précis|détaillé|exemple|inclu"),
        structure: marker(r"(?i)audiencia|público|cliente|gerente|gerencia|directiv|contexto|client|\bpublic\b|responsable|direction|contexte"),
        beginner: marker(r"(?i)principiante|débutant|paso a paso|étape par étape|sencill"),
    },
});

pub(super) static GERMAN: LazyLock<ScriptRules> = LazyLock::new(|| ScriptRules {
    script: Script::German,
    fixes: fixes(&[
        (r"(?i)\bnich\b", "nicht"),
        (r"(?i)\bwiso\b", "wieso"),
        (r"(?i)\bvieleicht\b", "vielleicht"),
        (r"(?i)\bgarnicht\b", "gar nicht"),
        (r"(?i)\bausserdem\b", "außerdem"),
        (r"(?i)\bwiederrum\b", "wiederum"),
        (r"\?{2,}", "?"),
        (r"!{2,}", "!"),
        (r"\s+([?!.,;:])", "$1"),
    ]),
    markers: MarkerSet {
        persona: marker(r"(?i)du bist|sie sind|agiere als|experte|expertin|assistent"),
        format: marker(r"(?i)aufzählung|liste|schritt|absatz|stichpunkt"),
        specificity: marker(r"(?i)konkret|detailliert|beispiel|spezifisch"),
        structure: marker(r"(?i)zielgruppe|kunde|vorgesetzte|management|publikum|kontext"),
        beginner: marker(r"(?i)anfänger|schritt für schritt|einfache"),
    },
});

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(rules: &ScriptRules, text: &str) -> String {
        rules
            .fixes
            .iter()
            .fold(text.to_string(), |acc, (pattern, replacement)| {
                pattern.replace_all(&acc, *replacement).into_owned()
            })
    }

    #[test]
    fn english_repairs_contractions_and_typos() {
        assert_eq!(
            apply(&ENGLISH, "i dont think teh plan will work"),
            "I don't think the plan will work"
        );
        assert_eq!(apply(&ENGLISH, "wow can i start???"), "How can I start?");
    }

    #[test]
    fn english_removes_space_before_punctuation() {
        assert_eq!(apply(&ENGLISH, "Is it ready ?"), "Is it ready?");
    }

    #[test]
    fn cyrillic_fixes_colloquial_spelling() {
        assert_eq!(apply(&CYRILLIC, "чо делать щас"), "что делать сейчас");
        assert_eq!(apply(&CYRILLIC, "привет ,мир"), "привет, мир");
    }

    #[test]
    fn han_uses_full_width_punctuation() {
        assert_eq!(apply(&HAN, "什么是人工智能 ?"), "什么是人工智能？");
        assert_eq!(apply(&HAN, "你好 ， 世界"), "你好，世界");
    }

    #[test]
    fn arabic_uses_arabic_question_mark() {
        assert_eq!(apply(&ARABIC, "ما هو هذا ?"), "ما هو هذا؟");
    }

    #[test]
    fn latin_accented_fixes_inverted_marks() {
        assert_eq!(apply(&LATIN_ACCENTED, "¿ cómo estás ??"), "¿cómo estás?");
        assert_eq!(apply(&LATIN_ACCENTED, "¡ qué bien !!"), "¡qué bien!");
    }

    #[test]
    fn french_keeps_space_before_question_mark() {
        assert_eq!(apply(&LATIN_ACCENTED, "Ça va , merci ?"), "Ça va, merci ?");
    }

    #[test]
    fn markers_match_localized_phrases() {
        assert!(ENGLISH.markers.persona.is_match("You are an expert consultant"));
        assert!(CYRILLIC.markers.format.is_match("Оформи ответ в виде списка"));
        assert!(GERMAN.markers.structure.is_match("für einen Kunden"));
        assert!(!ENGLISH.markers.format.is_match("Tell me a joke"));
    }

    #[test]
    fn english_markers_are_case_sensitive() {
        let text = "Tell me who you are and List it for my Audience";
        assert!(!ENGLISH.markers.persona.is_match(text));
        assert!(!ENGLISH.markers.format.is_match(text));
        assert!(!ENGLISH.markers.structure.is_match(text));
        assert!(ENGLISH.markers.specificity.is_match("Please Include EXAMPLES"));
    }
}
