//! Quiz engine.
//!
//! Presents problems one at a time and races each answer against a single
//! deadline that is armed when the run starts.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

use crate::error::QuizError;
use crate::model::{Finish, Problem, QuizOutcome, Score};
use crate::traits::{AnswerSource, QuizReporter};

/// Configuration for the quiz engine.
#[derive(Debug, Clone, Default)]
pub struct QuizEngineConfig {
    /// Total time budget for the run. `None` runs untimed.
    pub time_limit: Option<Duration>,
}

impl QuizEngineConfig {
    pub fn timed(limit: Duration) -> Self {
        Self {
            time_limit: Some(limit),
        }
    }

    pub fn untimed() -> Self {
        Self { time_limit: None }
    }
}

/// Drives one quiz session.
pub struct QuizEngine<A> {
    answers: A,
    config: QuizEngineConfig,
}

impl<A: AnswerSource> QuizEngine<A> {
    pub fn new(answers: A, config: QuizEngineConfig) -> Self {
        Self { answers, config }
    }

    /// The answer source, e.g. to inspect a scripted source after a run.
    pub fn answers(&self) -> &A {
        &self.answers
    }

    /// Run the quiz over `problems` in order.
    ///
    /// The first problem error aborts the run without an outcome. A timeout
    /// is not an error: it ends the run with [`Finish::TimedOut`] and the
    /// problem that was open does not count as attempted.
    pub async fn run<I>(
        &mut self,
        problems: I,
        reporter: &dyn QuizReporter,
    ) -> Result<QuizOutcome, QuizError>
    where
        I: IntoIterator<Item = Result<Problem, QuizError>>,
    {
        // A limit past the end of the clock never fires.
        let deadline = self
            .config
            .time_limit
            .and_then(|limit| Instant::now().checked_add(limit));
        let timer = async move {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => std::future::pending().await,
            }
        };
        tokio::pin!(timer);

        let mut score = Score::default();

        for (index, problem) in problems.into_iter().enumerate() {
            let problem = problem?;
            let number = index + 1;
            reporter.on_problem(number, &problem);

            let expired = deadline.is_some_and(|at| Instant::now() >= at);
            let given = if expired {
                None
            } else {
                tokio::select! {
                    biased;
                    _ = &mut timer => None,
                    answer = self.answers.next_answer() => Some(answer?),
                }
            };
            let Some(given) = given else {
                tracing::info!(
                    open_problem = number,
                    correct = score.correct,
                    attempted = score.attempted,
                    "time limit reached"
                );
                return Ok(conclude(score, Finish::TimedOut, reporter));
            };

            let correct = problem.is_correct(&given);
            score.record(correct);
            tracing::debug!(number, correct, "problem resolved");
            reporter.on_answer(number, &problem, &given, correct);
        }

        tracing::info!(
            correct = score.correct,
            attempted = score.attempted,
            "quiz complete"
        );
        Ok(conclude(score, Finish::Completed, reporter))
    }
}

fn conclude(score: Score, finish: Finish, reporter: &dyn QuizReporter) -> QuizOutcome {
    let outcome = QuizOutcome { score, finish };
    reporter.on_finish(&outcome);
    outcome
}
