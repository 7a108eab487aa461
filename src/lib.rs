//! Prompt Sensei: prompt polishing, composition and scoring.
//!
//! The library wires together:
//! - Script-aware text polishing (polish.rs, rules/)
//! - Keyword persona detection (persona.rs)
//! - Prompt composition from wizard answers (compose/)
//! - Heuristic quality scoring (score.rs)
//! - Quick transform and share links (transform.rs, share.rs)
//! - Hosted function clients (remote/, config.rs)
//!
//! Everything outside `remote` is synchronous and pure.

pub mod answers;
pub mod compose;
pub mod config;
pub mod language;
pub mod persona;
pub mod polish;
pub mod remote;
pub mod rules;
pub mod score;
pub mod share;
pub mod transform;

mod cli;

pub use answers::{AnswerError, Answers, RawAnswers};
pub use compose::{compose_prompt, ComposedPrompt};
pub use polish::{polish_text, PolishResult};
pub use score::{score_prompt, ScoreResult};
pub use transform::{is_high_quality_prompt, transform_prompt};

/// Entry point for the `prompt-sensei` binary.
pub fn run() {
    env_logger::init();

    let options = match cli::Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(cli::execute(options)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
