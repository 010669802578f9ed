//! CSV record parser.
//!
//! Reads `prompt,answer` rows lazily so that a malformed row is only hit once
//! every row before it has been asked.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::QuizError;
use crate::model::Problem;

/// Streaming reader of [`Problem`]s from comma-separated rows.
///
/// Rows have no header. Every row must hold at least two fields and all rows
/// must hold the same number of fields as the first one.
pub struct ProblemReader<R> {
    inner: csv::Reader<R>,
    record: StringRecord,
    failed: bool,
}

impl ProblemReader<File> {
    /// Open a records file.
    pub fn open(path: &Path) -> Result<Self, QuizError> {
        let file = File::open(path).map_err(|source| QuizError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened problems file");
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ProblemReader<R> {
    pub fn from_reader(rdr: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(rdr);
        Self {
            inner,
            record: StringRecord::new(),
            failed: false,
        }
    }

    /// Read the next problem, `Ok(None)` at end of input.
    pub fn next_problem(&mut self) -> Result<Option<Problem>, QuizError> {
        let more = self
            .inner
            .read_record(&mut self.record)
            .map_err(malformed)?;
        if !more {
            return Ok(None);
        }
        parse_record(&self.record).map(Some)
    }
}

impl<R: Read> Iterator for ProblemReader<R> {
    type Item = Result<Problem, QuizError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_problem().transpose();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Turn one CSV row into a problem.
pub fn parse_record(record: &StringRecord) -> Result<Problem, QuizError> {
    match (record.get(0), record.get(1)) {
        (Some(prompt), Some(answer)) => Ok(Problem::new(prompt, answer)),
        _ => Err(QuizError::Malformed {
            line: record.position().map(|p| p.line()).unwrap_or(0),
            reason: format!("expected at least 2 fields, found {}", record.len()),
        }),
    }
}

fn malformed(err: csv::Error) -> QuizError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    QuizError::Malformed {
        line,
        reason: err.to_string(),
    }
}
