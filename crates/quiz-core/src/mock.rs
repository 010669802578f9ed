//! Scripted answer source for testing.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::QuizError;
use crate::traits::AnswerSource;

/// Replays a fixed sequence of answers without touching the terminal.
///
/// Each answer can carry a think time, simulated with tokio's timer so tests
/// running on a paused clock stay deterministic. When the script runs out the
/// source never answers again.
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    script: VecDeque<(Duration, String)>,
    requested: usize,
}

impl ScriptedAnswers {
    /// Answers given instantly, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: answers
                .into_iter()
                .map(|a| (Duration::ZERO, a.into()))
                .collect(),
            requested: 0,
        }
    }

    /// Answers that each arrive after their own delay.
    pub fn with_delays<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = (Duration, S)>,
        S: Into<String>,
    {
        Self {
            script: answers.into_iter().map(|(d, a)| (d, a.into())).collect(),
            requested: 0,
        }
    }

    /// Number of answers the engine has asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Answers not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_answer(&mut self) -> Result<String, QuizError> {
        self.requested += 1;
        let Some((delay, answer)) = self.script.pop_front() else {
            return std::future::pending().await;
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(answer)
    }
}
