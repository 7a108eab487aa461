//! Localized sentence dictionaries for the composer.
//!
//! Lookups go through `localized`, which falls back to English when a
//! locale has no entry for a key. Custom tones have no entry anywhere.

use crate::answers::{Audience, Format, Tone};
use crate::language::{Language, Locale};
use std::borrow::Cow;

fn localized<T>(locale: Locale, lookup: impl Fn(Locale) -> Option<T>) -> Option<T> {
    lookup(locale).or_else(|| lookup(Locale::En))
}

pub fn tone_persona(locale: Locale, tone: &Tone) -> Option<&'static str> {
    localized(locale, |l| match (l, tone) {
        (Locale::En, Tone::Friendly) => Some("You are a helpful and friendly assistant who explains things clearly."),
        (Locale::En, Tone::Expert) => Some("You are an expert consultant with deep knowledge in your field."),
        (Locale::En, Tone::Creative) => Some("You are a creative and innovative assistant who thinks outside the box."),
        (Locale::En, Tone::Short) => Some("You are a concise assistant who gets straight to the point."),
        (Locale::Ru, Tone::Friendly) => Some("Ты — доброжелательный и отзывчивый ассистент, который понятно всё объясняет."),
        (Locale::Ru, Tone::Expert) => Some("Ты — эксперт-консультант с глубокими знаниями в своей области."),
        (Locale::Ru, Tone::Creative) => Some("Ты — креативный ассистент, который мыслит нестандартно."),
        (Locale::Ru, Tone::Short) => Some("Ты — лаконичный ассистент, который сразу переходит к сути."),
        (Locale::Es, Tone::Friendly) => Some("Eres un asistente amable y servicial que explica las cosas con claridad."),
        (Locale::Es, Tone::Expert) => Some("Eres un consultor experto con un profundo conocimiento de tu campo."),
        (Locale::Es, Tone::Creative) => Some("Eres un asistente creativo e innovador que piensa de forma original."),
        (Locale::Es, Tone::Short) => Some("Eres un asistente conciso que va directo al grano."),
        (Locale::Fr, Tone::Friendly) => Some("Tu es un assistant aimable et serviable qui explique les choses clairement."),
        (Locale::Fr, Tone::Expert) => Some("Tu es un consultant expert doté d'une connaissance approfondie de ton domaine."),
        (Locale::Fr, Tone::Creative) => Some("Tu es un assistant créatif et innovant qui sort des sentiers battus."),
        (Locale::Fr, Tone::Short) => Some("Tu es un assistant concis qui va droit au but."),
        (Locale::De, Tone::Friendly) => Some("Du bist ein freundlicher, hilfsbereiter Assistent, der Dinge verständlich erklärt."),
        (Locale::De, Tone::Expert) => Some("Du bist ein erfahrener Fachberater mit fundiertem Wissen über dein Gebiet."),
        (Locale::De, Tone::Creative) => Some("Du bist ein kreativer Assistent, der über den Tellerrand hinausdenkt."),
        (Locale::De, Tone::Short) => Some("Du bist ein prägnanter Assistent, der direkt auf den Punkt kommt."),
        _ => None,
    })
}

pub fn expert_role(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Ты — признанный эксперт в этой области с глубокими знаниями, основанными на исследованиях.",
        Locale::Es => "Eres un experto reconocido en este campo, con un conocimiento profundo y respaldado por la investigación.",
        _ => "You are a recognized expert in this field with deep, research-backed knowledge.",
    }
}

pub fn audience_sentence(locale: Locale, audience: Audience) -> &'static str {
    let sentence = localized(locale, |l| match (l, audience) {
        (Locale::En, Audience::Client) => Some("This response will be shared with a client, so please ensure it's professional and polished."),
        (Locale::En, Audience::Manager) => Some("This is for a presentation to management, so please focus on key insights and actionable recommendations."),
        (Locale::En, Audience::Myself) => Some("This is for my personal understanding, so feel free to include detailed explanations and context."),
        (Locale::En, Audience::Code) => Some("The audience is a developer, so please return clean, well-commented code with brief technical explanations."),
        (Locale::En, Audience::Other) => Some("Please make the response accessible to a general audience."),
        (Locale::Ru, Audience::Client) => Some("Ответ будет передан клиенту, поэтому он должен быть профессиональным и отточенным."),
        (Locale::Ru, Audience::Manager) => Some("Это для презентации руководству, поэтому сосредоточься на ключевых выводах и практических рекомендациях."),
        (Locale::Ru, Audience::Myself) => Some("Это для моего личного понимания, поэтому можно включить подробные объяснения и контекст."),
        (Locale::Ru, Audience::Code) => Some("Аудитория — разработчик, поэтому верни чистый, хорошо прокомментированный код с краткими техническими пояснениями."),
        (Locale::Ru, Audience::Other) => Some("Сделай ответ понятным для широкой аудитории."),
        (Locale::Es, Audience::Client) => Some("Esta respuesta se compartirá con un cliente, así que asegúrate de que sea profesional y esté bien pulida."),
        (Locale::Es, Audience::Manager) => Some("Es para una presentación ante la gerencia, así que céntrate en las ideas clave y en recomendaciones prácticas."),
        (Locale::Es, Audience::Myself) => Some("Es para mi comprensión personal, así que puedes incluir explicaciones detalladas y contexto."),
        (Locale::Es, Audience::Code) => Some("La audiencia es un desarrollador, así que devuelve código limpio y bien comentado con breves explicaciones técnicas."),
        (Locale::Es, Audience::Other) => Some("Haz que la respuesta sea accesible para un público general."),
        (Locale::Fr, Audience::Client) => Some("Cette réponse sera partagée avec un client, elle doit donc être professionnelle et soignée."),
        (Locale::Fr, Audience::Manager) => Some("C'est pour une présentation à la direction, concentre-toi donc sur les points clés et des recommandations concrètes."),
        (Locale::Fr, Audience::Myself) => Some("C'est pour ma compréhension personnelle, tu peux donc inclure des explications détaillées et du contexte."),
        (Locale::Fr, Audience::Code) => Some("Le public est un développeur, renvoie donc un code propre et bien commenté avec de brèves explications techniques."),
        (Locale::Fr, Audience::Other) => Some("Rends la réponse accessible à un large public."),
        (Locale::De, Audience::Client) => Some("Diese Antwort ist für einen Kunden bestimmt, sie sollte also professionell und ausgefeilt sein."),
        (Locale::De, Audience::Manager) => Some("Dies ist für eine Präsentation vor dem Management, konzentriere dich also auf zentrale Erkenntnisse und umsetzbare Empfehlungen."),
        (Locale::De, Audience::Myself) => Some("Dies ist für mein persönliches Verständnis, du kannst also ausführliche Erklärungen und Kontext einbeziehen."),
        (Locale::De, Audience::Code) => Some("Die Zielgruppe ist ein Entwickler, gib also sauberen, gut kommentierten Code mit kurzen technischen Erklärungen zurück."),
        (Locale::De, Audience::Other) => Some("Formuliere die Antwort für ein allgemeines Publikum verständlich."),
        _ => None,
    });
    sentence.unwrap_or_default()
}

/// `code` selects the implementation-focused variant of the steps format.
pub fn format_sentence(locale: Locale, format: Format, code: bool) -> &'static str {
    let sentence = localized(locale, |l| match (l, format, code) {
        (Locale::En, Format::Bullet, _) => Some("Please format your response as a clear bullet list with key points."),
        (Locale::En, Format::Steps, false) => Some("Please provide a step-by-step response with numbered instructions."),
        (Locale::En, Format::Steps, true) => Some("Please provide step-by-step implementation instructions with numbered steps and a code snippet for each step."),
        (Locale::En, Format::Paragraph, _) => Some("Please provide a detailed response in paragraph format."),
        (Locale::Ru, Format::Bullet, _) => Some("Оформи ответ в виде понятного маркированного списка с ключевыми пунктами."),
        (Locale::Ru, Format::Steps, false) => Some("Дай пошаговый ответ с пронумерованными инструкциями."),
        (Locale::Ru, Format::Steps, true) => Some("Дай пошаговые инструкции по реализации с пронумерованными шагами и фрагментом кода для каждого шага."),
        (Locale::Ru, Format::Paragraph, _) => Some("Дай подробный ответ в виде связных абзацев."),
        (Locale::Es, Format::Bullet, _) => Some("Formatea tu respuesta como una lista clara de viñetas con los puntos clave."),
        (Locale::Es, Format::Steps, false) => Some("Ofrece una respuesta paso a paso con instrucciones numeradas."),
        (Locale::Es, Format::Steps, true) => Some("Ofrece instrucciones de implementación paso a paso, con pasos numerados y un fragmento de código para cada paso."),
        (Locale::Es, Format::Paragraph, _) => Some("Ofrece una respuesta detallada en formato de párrafos."),
        (Locale::Fr, Format::Bullet, _) => Some("Présente ta réponse sous forme de liste à puces claire avec les points clés."),
        (Locale::Fr, Format::Steps, false) => Some("Donne une réponse étape par étape avec des instructions numérotées."),
        (Locale::Fr, Format::Steps, true) => Some("Donne des instructions d'implémentation étape par étape, avec des étapes numérotées et un extrait de code pour chaque étape."),
        (Locale::Fr, Format::Paragraph, _) => Some("Donne une réponse détaillée sous forme de paragraphes."),
        (Locale::De, Format::Bullet, _) => Some("Formatiere deine Antwort als übersichtliche Aufzählung mit den wichtigsten Punkten."),
        (Locale::De, Format::Steps, false) => Some("Gib eine Schritt-für-Schritt-Antwort mit nummerierten Anweisungen."),
        (Locale::De, Format::Steps, true) => Some("Gib Schritt-für-Schritt-Anweisungen zur Implementierung mit nummerierten Schritten und einem Codebeispiel für jeden Schritt."),
        (Locale::De, Format::Paragraph, _) => Some("Gib eine ausführliche Antwort in Absatzform."),
        _ => None,
    });
    sentence.unwrap_or_default()
}

pub fn tone_refinement(locale: Locale, tone: &Tone) -> Option<&'static str> {
    localized(locale, |l| match (l, tone) {
        (Locale::En, Tone::Short) => Some("Keep the response concise and avoid unnecessary details."),
        (Locale::En, Tone::Creative) => Some("Feel free to include creative examples and innovative approaches."),
        (Locale::En, Tone::Expert) => Some("Include relevant technical details and professional insights."),
        (Locale::En, Tone::Friendly) => Some("Use a warm, conversational tone that's easy to understand."),
        (Locale::Ru, Tone::Short) => Some("Отвечай кратко и избегай лишних деталей."),
        (Locale::Ru, Tone::Creative) => Some("Смело используй креативные примеры и нестандартные подходы."),
        (Locale::Ru, Tone::Expert) => Some("Добавь важные технические детали и профессиональные наблюдения."),
        (Locale::Ru, Tone::Friendly) => Some("Используй тёплый, разговорный тон, который легко понять."),
        (Locale::Es, Tone::Short) => Some("Mantén la respuesta concisa y evita detalles innecesarios."),
        (Locale::Es, Tone::Creative) => Some("Siéntete libre de incluir ejemplos creativos y enfoques innovadores."),
        (Locale::Es, Tone::Expert) => Some("Incluye detalles técnicos relevantes y perspectivas profesionales."),
        (Locale::Es, Tone::Friendly) => Some("Usa un tono cálido y cercano que sea fácil de entender."),
        (Locale::Fr, Tone::Short) => Some("Reste concis et évite les détails inutiles."),
        (Locale::Fr, Tone::Creative) => Some("N'hésite pas à inclure des exemples créatifs et des approches innovantes."),
        (Locale::Fr, Tone::Expert) => Some("Inclus les détails techniques pertinents et des analyses professionnelles."),
        (Locale::Fr, Tone::Friendly) => Some("Adopte un ton chaleureux et conversationnel, facile à comprendre."),
        (Locale::De, Tone::Short) => Some("Halte die Antwort knapp und vermeide unnötige Details."),
        (Locale::De, Tone::Creative) => Some("Nutze gerne kreative Beispiele und innovative Ansätze."),
        (Locale::De, Tone::Expert) => Some("Füge relevante technische Details und fachliche Einblicke hinzu."),
        (Locale::De, Tone::Friendly) => Some("Verwende einen warmen, lockeren Ton, der leicht verständlich ist."),
        _ => None,
    })
}

/// Deep-analysis sentence. `code` swaps in the edge-case/performance variant.
pub fn depth_sentence(locale: Locale, code: bool) -> &'static str {
    match (locale, code) {
        (Locale::Ru, false) => "Не ограничивайся поверхностным ответом: рассмотри тему широко, сравни источники и тенденции и дай выводы, основанные на исследованиях.",
        (Locale::Ru, true) => "Тщательно проанализируй задачу, учитывая граничные случаи, производительность и возможные подводные камни реализации.",
        (Locale::Es, false) => "Ve más allá de una respuesta superficial: explora el tema a fondo, compara fuentes y tendencias relevantes y ofrece ideas basadas en la investigación.",
        (Locale::Es, true) => "Analiza el problema a fondo, cubriendo casos límite, consideraciones de rendimiento y posibles errores en la implementación.",
        (_, false) => "Go beyond a surface-level answer: explore the topic broadly, compare relevant sources and trends, and provide research-based insights.",
        (_, true) => "Analyze the problem thoroughly, covering edge cases, performance considerations, and potential pitfalls in the implementation.",
    }
}

pub fn insight_sentence(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Сравни разные точки зрения, объясни ход своих рассуждений и подкрепи ключевые мысли реальными примерами.",
        Locale::Es => "Compara diferentes perspectivas, explica tu razonamiento y respalda los puntos clave con ejemplos reales.",
        _ => "Compare different perspectives, explain your reasoning, and support key points with real-world examples.",
    }
}

/// Response-language instruction, written in the target language itself.
/// Languages without a native sentence get a templated English one.
pub fn language_directive(language: Language) -> Cow<'static, str> {
    let native = match language {
        Language::English => "Please respond in clear, fluent English.",
        Language::Spanish => "Responde exclusivamente en español, con la fluidez de un hablante nativo. Traduce la intención de la pregunta, no solo sus palabras.",
        Language::French => "Réponds exclusivement en français, avec l'aisance d'un locuteur natif. Traduis l'intention de la question, pas seulement ses mots.",
        Language::German => "Antworte ausschließlich auf Deutsch, so flüssig wie ein Muttersprachler. Übertrage die Absicht der Frage, nicht nur ihre Wörter.",
        Language::Russian => "Отвечай исключительно на русском языке, свободно, как носитель языка. Передавай смысл вопроса, а не только его слова.",
        Language::Chinese => "请仅使用中文回答，达到母语水平的流畅度。请翻译问题的意图，而不仅仅是字面意思。",
        Language::Japanese => "必ず日本語で、ネイティブレベルの自然な文章で回答してください。質問の言葉だけでなく、意図を汲み取って訳してください。",
        Language::Arabic => {
            return Cow::Owned(format!(
                "Respond exclusively in {}, with native-level fluency. Translate the intent of the question, not just its words.",
                language.name()
            ))
        }
    };
    Cow::Borrowed(native)
}

pub fn clarity_suffix(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Объясняй пошагово, простым языком, понятным новичку, и поясняй все технические термины.",
        Locale::Es => "Explica paso a paso, con un lenguaje sencillo y claro que un principiante pueda seguir, y define los términos técnicos.",
        Locale::Fr => "Explique étape par étape, dans un langage simple et clair qu'un débutant peut suivre, et définis les termes techniques.",
        Locale::De => "Erkläre Schritt für Schritt in einfacher, klarer Sprache, der ein Anfänger folgen kann, und definiere Fachbegriffe.",
        Locale::Zh => "请一步一步地用简单易懂的语言解释，让初学者也能理解，并解释所有技术术语。",
        _ => "Explain step by step in simple, clear language that a beginner can follow, and define any technical terms.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_locale_entries_fall_back_to_english() {
        assert_eq!(
            tone_persona(Locale::Zh, &Tone::Short),
            tone_persona(Locale::En, &Tone::Short)
        );
        assert_eq!(
            audience_sentence(Locale::Ar, Audience::Client),
            audience_sentence(Locale::En, Audience::Client)
        );
        assert_eq!(depth_sentence(Locale::Fr, false), depth_sentence(Locale::En, false));
    }

    #[test]
    fn custom_tone_has_no_sentences() {
        let tone = Tone::Custom("sarcastic".into());
        assert_eq!(tone_persona(Locale::En, &tone), None);
        assert_eq!(tone_refinement(Locale::Ru, &tone), None);
    }

    #[test]
    fn localized_entries_are_used() {
        assert!(tone_persona(Locale::Ru, &Tone::Expert).unwrap().starts_with("Ты —"));
        assert!(format_sentence(Locale::Es, Format::Bullet, false).contains("viñetas"));
    }

    #[test]
    fn unsupported_language_gets_templated_directive() {
        assert_eq!(
            language_directive(Language::Arabic),
            "Respond exclusively in Arabic, with native-level fluency. Translate the intent of the question, not just its words."
        );
        assert!(language_directive(Language::Spanish).starts_with("Responde exclusivamente en español"));
    }
}
