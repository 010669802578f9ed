//! Quiz error types.
//!
//! Every variant is fatal to the run. The CLI downcasts to [`QuizError`] to
//! pick an exit status without string matching.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a quiz run.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The records file could not be opened.
    #[error("failed to open problems file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be read or has fewer than two fields.
    #[error("malformed record on line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    /// Reading operator input failed.
    #[error("failed to read answer: {0}")]
    Input(#[source] io::Error),

    /// The background reader went away without delivering an answer.
    #[error("answer reader stopped before delivering a line")]
    HandoffClosed,
}

impl QuizError {
    /// Process exit status for this error. `2` is left to clap usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuizError::Open { .. } => 1,
            QuizError::Malformed { .. } => 4,
            QuizError::Input(_) | QuizError::HandoffClosed => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_path() {
        let err = QuizError::Open {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.csv"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let malformed = QuizError::Malformed {
            line: 3,
            reason: "expected at least 2 fields, found 1".into(),
        };
        let input = QuizError::Input(io::Error::other("closed"));
        assert_eq!(malformed.exit_code(), 4);
        assert_eq!(input.exit_code(), 3);
        assert_eq!(QuizError::HandoffClosed.exit_code(), 3);
    }
}
