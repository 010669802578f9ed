//! Core data model types for quiz.
//!
//! A quiz is a stream of [`Problem`]s; a run produces a [`QuizOutcome`].

use std::fmt;

/// One question read from a records file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Text shown to the operator, used verbatim.
    pub prompt: String,
    /// Expected answer, already trimmed of surrounding whitespace.
    pub answer: String,
}

impl Problem {
    pub fn new(prompt: impl Into<String>, answer: impl AsRef<str>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.as_ref().trim().to_string(),
        }
    }

    /// Exact comparison against an operator answer.
    pub fn is_correct(&self, given: &str) -> bool {
        given == self.answer
    }
}

/// Running tally for one quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Problems answered correctly.
    pub correct: usize,
    /// Problems presented and resolved with an answer.
    pub attempted: usize,
}

impl Score {
    /// Record one resolved problem.
    pub fn record(&mut self, correct: bool) {
        self.attempted += 1;
        if correct {
            self.correct += 1;
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}", self.correct, self.attempted)
    }
}

/// How a quiz run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Every record in the file was presented.
    Completed,
    /// The time limit elapsed while a problem was open.
    TimedOut,
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finish::Completed => write!(f, "completed"),
            Finish::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Final result of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: Score,
    pub finish: Finish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_trims_answer_only() {
        let p = Problem::new(" 2+2 ", " 4 ");
        assert_eq!(p.prompt, " 2+2 ");
        assert_eq!(p.answer, "4");
        assert!(p.is_correct("4"));
        assert!(!p.is_correct(" 4"));
    }

    #[test]
    fn score_counts_attempts_and_hits() {
        let mut score = Score::default();
        score.record(true);
        score.record(false);
        score.record(true);
        assert_eq!(score.attempted, 3);
        assert_eq!(score.correct, 2);
    }

    #[test]
    fn score_summary_line() {
        let score = Score {
            correct: 7,
            attempted: 12,
        };
        assert_eq!(score.to_string(), "You scored 7 out of 12");
        assert_eq!(Score::default().to_string(), "You scored 0 out of 0");
    }
}
