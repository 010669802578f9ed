//! Line-based answer source backed by a blocking reader.
//!
//! Each answer is collected on its own detached thread and handed back over a
//! one-shot channel. If the engine stops listening, the thread finishes its
//! read and the send fails quietly.

use std::io::{self, BufRead, BufReader, Stdin};
use std::sync::{Arc, Mutex};
use std::thread;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::QuizError;
use crate::traits::AnswerSource;

/// Reads one line per answer from a shared reader.
pub struct LineAnswers<R> {
    reader: Arc<Mutex<R>>,
}

impl LineAnswers<BufReader<Stdin>> {
    /// Answers typed at the terminal.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R> LineAnswers<R>
where
    R: BufRead + Send + 'static,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Arc::new(Mutex::new(reader)),
        }
    }

    fn spawn_reader(&self, tx: oneshot::Sender<io::Result<String>>) -> io::Result<()> {
        let reader = Arc::clone(&self.reader);
        thread::Builder::new()
            .name("answer-reader".into())
            .spawn(move || {
                let result = read_answer(&*reader);
                if tx.send(result).is_err() {
                    tracing::debug!("answer arrived after the quiz stopped listening");
                }
            })?;
        Ok(())
    }
}

#[async_trait]
impl<R> AnswerSource for LineAnswers<R>
where
    R: BufRead + Send + 'static,
{
    async fn next_answer(&mut self) -> Result<String, QuizError> {
        let (tx, rx) = oneshot::channel();
        self.spawn_reader(tx).map_err(QuizError::Input)?;
        rx.await
            .map_err(|_| QuizError::HandoffClosed)?
            .map_err(QuizError::Input)
    }
}

fn read_answer<R: BufRead>(reader: &Mutex<R>) -> io::Result<String> {
    let mut guard = reader
        .lock()
        .map_err(|_| io::Error::other("answer reader lock poisoned"))?;
    let mut line = String::new();
    // End of input reads as an empty answer.
    guard.read_line(&mut line)?;
    Ok(first_token(&line).to_string())
}

/// The first whitespace-delimited word of a line, or `""` for a blank line.
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}
