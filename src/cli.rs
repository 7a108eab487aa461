//! Command-line shell over the library.
//!
//! Usage:
//!   prompt-sensei [options] <question...>            Compose and score
//!   prompt-sensei --quick <question...>              Quick transform only
//!   prompt-sensei --remote-polish --ask <question...>  Polish remotely, then ask

use crate::answers::{AnswerError, Answers, RawAnswers};
use crate::compose::{compose_prompt, ComposedPrompt};
use crate::config::ServiceConfig;
use crate::language::{resolve_language, Locale};
use crate::remote::{self, RemoteError};
use crate::score::{score_prompt, ScoreResult};
use crate::share::{share_url, AiPlatform};
use crate::transform::{is_high_quality_prompt, transform_prompt};
use serde::Serialize;

pub const USAGE: &str = "\
Usage: prompt-sensei [options] <question...>

Options:
  --ui <code>            UI locale: en, ru, es, fr, de, zh, ja, ar
  --audience <value>     myself | client | manager | code | other
  --tone <value>         friendly | expert | short | creative | any label
  --format <value>       bullet | steps | paragraph
  --mode <value>         optimize | simple (default: optimize)
  --depth <value>        deep | simple
  --insight <value>      deep | simple
  --language <value>     english | spanish | french | german | russian |
                         chinese | japanese | auto
  --polish, --no-polish  Force input polishing on or off
  --quick                Quick transform instead of full composition
  --remote-polish        Polish through the hosted service first
  --ask                  Send the composed prompt to the chat function
  --share <platform>     Print an open-in link (chatgpt, gemini, perplexity, you)
  --json                 Machine-readable output";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown option: {0}")]
    UnknownFlag(String),

    #[error("No question given")]
    MissingQuestion,

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error(transparent)]
    Answer(#[from] AnswerError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct Options {
    pub raw: RawAnswers,
    pub ui: Option<String>,
    pub quick: bool,
    pub remote_polish: bool,
    pub ask: bool,
    pub share: Option<AiPlatform>,
    pub json: bool,
}

impl Options {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut options = Options {
            raw: RawAnswers {
                generation_mode: Some("optimize".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut words = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| args.next().ok_or_else(|| CliError::MissingValue(flag.to_string()));
            match arg.as_str() {
                "--ui" => options.ui = Some(value(&arg)?),
                "--audience" => options.raw.target_audience = Some(value(&arg)?),
                "--tone" => options.raw.tone = Some(value(&arg)?),
                "--format" => options.raw.format = Some(value(&arg)?),
                "--mode" => options.raw.generation_mode = Some(value(&arg)?),
                "--depth" => options.raw.depth = Some(value(&arg)?),
                "--insight" => options.raw.insight_mode = Some(value(&arg)?),
                "--language" => options.raw.language = Some(value(&arg)?),
                "--polish" => options.raw.polish_input = Some("true".to_string()),
                "--no-polish" => options.raw.polish_input = Some("false".to_string()),
                "--quick" => options.quick = true,
                "--remote-polish" => options.remote_polish = true,
                "--ask" => options.ask = true,
                "--json" => options.json = true,
                "--share" => {
                    let name = value(&arg)?;
                    let platform = AiPlatform::parse(&name).ok_or(CliError::UnknownPlatform(name))?;
                    options.share = Some(platform);
                }
                flag if flag.starts_with("--") => return Err(CliError::UnknownFlag(arg)),
                _ => words.push(arg),
            }
        }

        if words.is_empty() {
            return Err(CliError::MissingQuestion);
        }
        options.raw.question_raw = Some(words.join(" "));
        Ok(options)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    #[serde(flatten)]
    composed: ComposedPrompt,
    explanation_text: String,
    score: ScoreResult,
    share_url: Option<String>,
    answer: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuickReport {
    prompt: String,
    high_quality: bool,
}

pub async fn execute(options: Options) -> Result<(), CliError> {
    let ui = options.ui.as_deref();
    let mut answers = Answers::parse_strict(&options.raw)?;

    if options.quick {
        let prompt = transform_prompt(&answers.question);
        let high_quality = is_high_quality_prompt(&prompt);
        if options.json {
            println!("{}", serde_json::to_string_pretty(&QuickReport { prompt, high_quality })?);
        } else {
            println!("{}", prompt);
            println!();
            println!("High quality: {}", if high_quality { "yes" } else { "no" });
        }
        return Ok(());
    }

    let config = ServiceConfig::from_env();
    if options.remote_polish {
        let result = remote::polish_with_service(&config, &answers.question, ui).await;
        answers.question = result.polished;
    }

    let composed = compose_prompt(&answers, ui);
    let score = score_prompt(&composed.prompt, &answers);
    let share = options
        .share
        .and_then(|platform| share_url(platform, &composed.prompt))
        .map(|url| url.to_string());

    let answer = if options.ask {
        let language = resolve_language(answers.language, Locale::from_code(ui));
        Some(remote::ask_ai(&config, &composed.prompt, language.name()).await?)
    } else {
        None
    };

    if options.json {
        let report = Report {
            explanation_text: composed.explanation.to_string(),
            composed,
            score,
            share_url: share,
            answer,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", composed.prompt);
    println!();
    if let Some(info) = &composed.polish_info {
        println!("Polished input: {:?} -> {:?}", info.original, info.polished);
        println!();
    }
    println!("Quality: {}/10 ({:?})", score.score, score.tier);
    for suggestion in &score.suggestions {
        println!("  - {}", suggestion);
    }
    println!();
    println!("{}", composed.explanation);
    if let Some(url) = share {
        println!();
        println!("Open: {}", url);
    }
    if let Some(answer) = answer {
        println!();
        println!("{}", answer);
    }
    Ok(())
}
