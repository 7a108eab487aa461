//! Keyword-based persona detection.
//!
//! Groups are checked in a fixed order; the first group with a keyword in
//! the question decides the expert-role preamble. A question about
//! "marketing my startup" is a marketing question, not a business one.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonaDomain {
    ECommerce,
    Finance,
    Marketing,
    Software,
    Career,
    Health,
    Business,
}

impl PersonaDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonaDomain::ECommerce => "e-commerce",
            PersonaDomain::Finance => "finance",
            PersonaDomain::Marketing => "marketing",
            PersonaDomain::Software => "software",
            PersonaDomain::Career => "career",
            PersonaDomain::Health => "health",
            PersonaDomain::Business => "business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub domain: PersonaDomain,
    pub preamble: &'static str,
}

static PERSONA_RULES: LazyLock<Vec<(Regex, Persona)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"\b(etsy|shopify|ebay|amazon seller|e-?commerce|online (store|shop)|dropshipping|product listings?)\b").unwrap(),
            Persona {
                domain: PersonaDomain::ECommerce,
                preamble: "You are an experienced e-commerce strategist who helps online sellers price, list, and grow their stores.",
            },
        ),
        (
            Regex::new(r"\b(invest\w*|stocks?|budget\w*|tax(es)?|crypto\w*|loans?|mortgage|retirement|savings|financ\w*)\b").unwrap(),
            Persona {
                domain: PersonaDomain::Finance,
                preamble: "You are a certified financial advisor with practical experience in personal and business finance.",
            },
        ),
        (
            Regex::new(r"\b(marketing|seo|social media|brand\w*|advertis\w*|campaigns?|newsletter|copywriting)\b").unwrap(),
            Persona {
                domain: PersonaDomain::Marketing,
                preamble: "You are a senior marketing strategist skilled in branding, content, and growth campaigns.",
            },
        ),
        (
            Regex::new(r"\b(code|coding|programming|software|javascript|typescript|python|rust|java|sql|api|database|debug\w*|bugs?|algorithm)\b").unwrap(),
            Persona {
                domain: PersonaDomain::Software,
                preamble: "You are a senior software engineer who writes clean, well-tested code and explains technical trade-offs clearly.",
            },
        ),
        (
            Regex::new(r"\b(resume|cv|cover letter|job interview|interview|career|promotion|salary|linkedin|hiring)\b").unwrap(),
            Persona {
                domain: PersonaDomain::Career,
                preamble: "You are a seasoned career coach and recruiter who knows what hiring managers look for.",
            },
        ),
        (
            Regex::new(r"\b(health\w*|diet|workout|fitness|nutrition|sleep|weight loss|symptoms?|exercise)\b").unwrap(),
            Persona {
                domain: PersonaDomain::Health,
                preamble: "You are a knowledgeable health and wellness coach who gives evidence-based, safe guidance.",
            },
        ),
        (
            Regex::new(r"\b(business|startup|entrepreneur\w*|pitch|revenue|customers?|small company|strategy)\b").unwrap(),
            Persona {
                domain: PersonaDomain::Business,
                preamble: "You are an experienced business consultant who helps founders make sound strategic decisions.",
            },
        ),
    ]
});

/// Return the preamble of the first keyword group found in the question.
pub fn detect_persona(question: &str) -> Option<Persona> {
    let lower = question.to_lowercase();
    let persona = PERSONA_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map(|(_, persona)| *persona);

    if let Some(persona) = persona {
        log::debug!("[PERSONA] Matched domain: {}", persona.domain.as_str());
    }
    persona
}
