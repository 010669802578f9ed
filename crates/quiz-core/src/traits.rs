//! Seams between the quiz engine and the outside world.

use async_trait::async_trait;

use crate::error::QuizError;
use crate::model::{Problem, QuizOutcome};

/// Where operator answers come from.
///
/// The engine asks for one answer per problem and may drop the returned
/// future before it resolves (when the time limit wins the race).
/// Implementations must tolerate that: an abandoned answer is never
/// delivered to a later problem.
#[async_trait]
pub trait AnswerSource: Send {
    /// Collect the answer to the problem currently on screen.
    async fn next_answer(&mut self) -> Result<String, QuizError>;
}

/// Observer for quiz progress.
pub trait QuizReporter: Send + Sync {
    /// A problem is about to wait for an answer. `number` starts at 1.
    fn on_problem(&self, number: usize, problem: &Problem);
    /// A problem was resolved with an answer.
    fn on_answer(&self, number: usize, problem: &Problem, given: &str, correct: bool);
    /// The run ended normally or on timeout.
    fn on_finish(&self, outcome: &QuizOutcome);
}

/// No-op reporter.
pub struct NoopReporter;

impl QuizReporter for NoopReporter {
    fn on_problem(&self, _: usize, _: &Problem) {}
    fn on_answer(&self, _: usize, _: &Problem, _: &str, _: bool) {}
    fn on_finish(&self, _: &QuizOutcome) {}
}
