//! Running a quiz at the terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use quiz_core::config::load_config_from;
use quiz_core::engine::QuizEngine;
use quiz_core::model::{Problem, QuizOutcome};
use quiz_core::parser::ProblemReader;
use quiz_core::stdin::LineAnswers;
use quiz_core::traits::QuizReporter;

/// Console reporter: prompts and the summary go to stdout.
struct ConsoleReporter;

impl QuizReporter for ConsoleReporter {
    fn on_problem(&self, _number: usize, problem: &Problem) {
        let mut stdout = io::stdout().lock();
        let written =
            write!(stdout, "\nProblem: {} = ", problem.prompt).and_then(|_| stdout.flush());
        if let Err(e) = written {
            tracing::warn!("failed to write prompt: {e}");
        }
    }

    fn on_answer(&self, number: usize, _problem: &Problem, given: &str, correct: bool) {
        tracing::debug!(number, given, correct, "answer checked");
    }

    fn on_finish(&self, outcome: &QuizOutcome) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "\n{}", outcome.score) {
            tracing::warn!("failed to write summary: {e}");
        }
    }
}

/// Command-line values that take precedence over the config file.
pub struct Overrides {
    pub csv: Option<PathBuf>,
    pub time_limit_secs: Option<u64>,
    pub no_timer: bool,
    pub config: Option<PathBuf>,
}

pub async fn execute(overrides: Overrides) -> Result<()> {
    let mut config = load_config_from(overrides.config.as_deref())?;
    if let Some(csv) = overrides.csv {
        config.csv = csv;
    }
    if let Some(limit) = overrides.time_limit_secs {
        config.time_limit_secs = limit;
    }
    if overrides.no_timer {
        config.timed = false;
    }
    tracing::debug!(?config, "resolved configuration");

    let problems = ProblemReader::open(&config.csv)?;

    let mut engine = QuizEngine::new(LineAnswers::stdin(), config.engine_config());
    let outcome = engine.run(problems, &ConsoleReporter).await?;
    tracing::info!(finish = %outcome.finish, "quiz ended");

    Ok(())
}
