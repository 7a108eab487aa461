//! Hand-written reference rewrites of typical beginner questions, used to
//! check that the quick transform and the scorer rank them sensibly.

use prompt_sensei_lib::answers::Answers;
use prompt_sensei_lib::{is_high_quality_prompt, score_prompt, transform_prompt};

const CLARITY_SUFFIX: &str = "Be clear and detailed in your response.";

const GOLDEN: &[(&str, &str)] = &[
    (
        "Who is a policeman?",
        "Provide a comprehensive and detailed explanation of the role of a policeman, including their primary responsibilities, typical duties, required skills, and the impact of their work on society. Incorporate historical context about the evolution of the police profession, examples of modern policing practices, and any relevant challenges or ethical considerations they face in their role.",
    ),
    (
        "What is artificial intelligence?",
        "Explain what artificial intelligence is, including its historical background, core principles, key subfields (such as machine learning and natural language processing), and real-world applications. Address common misconceptions and ethical concerns as well.",
    ),
    (
        "Tell me about the Moon.",
        "Provide an informative overview of the Moon, covering its formation, physical characteristics, phases, gravitational influence on Earth, and its role in human culture and space exploration.",
    ),
    (
        "What does a nurse do?",
        "Describe the role of a nurse, detailing their primary responsibilities, essential skills, work environments, and contributions to patient care. Include variations such as registered nurses, nurse practitioners, and their educational paths.",
    ),
    (
        "How do airplanes fly?",
        "Explain the science behind how airplanes achieve flight, including the four forces of flight (lift, thrust, drag, and weight), the role of wings and engines, and how control surfaces manage direction and stability.",
    ),
    (
        "What is a healthy diet?",
        "Outline the components of a healthy diet, including recommended food groups, portion balance, essential nutrients, and common misconceptions. Mention variations by age, activity level, and cultural context.",
    ),
    (
        "How to start coding?",
        "Provide a beginner-friendly guide on how to start learning programming, including selecting a first language, setting up a development environment, learning resources, and realistic project ideas.",
    ),
    (
        "Why do we dream?",
        "Summarize leading scientific theories on why humans dream, including neurological, psychological, and evolutionary perspectives. Include examples from sleep studies and mention unanswered questions in the field.",
    ),
    (
        "What is global warming?",
        "Define global warming and explain its causes, effects, scientific evidence, and implications for the planet. Include major sources of emissions, international agreements, and actions individuals can take to reduce impact.",
    ),
    (
        "What is ChatGPT?",
        "Describe what ChatGPT is, how it works (including large language models and neural networks), its use cases, benefits, limitations, and ethical considerations in AI-generated content.",
    ),
];

#[test]
fn short_questions_get_clarity_suffix() {
    for (input, _) in GOLDEN {
        let transformed = transform_prompt(input);
        if input.ends_with('?') {
            let expected = format!("{} {}", input, CLARITY_SUFFIX);
            assert_eq!(transformed, expected, "input: {}", input);
        } else {
            assert_eq!(transformed, *input, "statements are left alone: {}", input);
        }
    }
}

#[test]
fn reference_rewrites_are_high_quality() {
    for (input, golden) in GOLDEN {
        assert!(is_high_quality_prompt(golden), "golden for {:?}", input);
        assert!(!is_high_quality_prompt(input), "raw input {:?}", input);
    }
}

#[test]
fn reference_rewrites_outscore_raw_questions() {
    let answers = Answers::default();
    for (input, golden) in GOLDEN {
        let raw = score_prompt(input, &answers);
        let rewritten = score_prompt(golden, &answers);
        assert_eq!(raw.breakdown.length, 0, "input: {}", input);
        assert_eq!(rewritten.breakdown.length, 2, "golden for {}", input);
        assert!(rewritten.score > raw.score, "golden for {}", input);
    }
}
