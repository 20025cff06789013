//! Record store over a line-delimited question/answer source.
//!
//! # Format
//! ```text
//! -Capital of France?
//! +Paris
//!
//! -Name three colors
//! +{red, green, blue}
//! ```
//!
//! The store indexes the offset of every question line once, so random
//! positioning always lands on a real record boundary.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::error::{DrillError, Result};
use crate::types::Record;

/// First character of a question line.
pub const QUESTION_DELIMITER: char = '-';
/// First character of an answer line.
pub const ANSWER_DELIMITER: char = '+';

/// How the cursor is moved before a batch is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Continue at the next boundary at or after the cursor.
    Sequential,
    /// Jump to a boundary chosen uniformly at random.
    Random,
}

#[derive(Debug, Clone, Copy)]
struct Boundary {
    offset: u64,
    line: usize,
}

/// Cursor over a seekable question/answer source.
#[derive(Debug)]
pub struct RecordStore<R> {
    reader: R,
    boundaries: Vec<Boundary>,
    offset: u64,
    /// 1-based number of the next line to be read.
    line: usize,
}

impl RecordStore<BufReader<File>> {
    /// Open and index a source file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead + Seek> RecordStore<R> {
    /// Index record boundaries and leave the cursor at the start.
    pub fn new(reader: R) -> Result<Self> {
        let mut store = Self {
            reader,
            boundaries: Vec::new(),
            offset: 0,
            line: 1,
        };
        store.index()?;
        Ok(store)
    }

    /// Number of question lines in the source.
    pub fn count(&self) -> usize {
        self.boundaries.len()
    }

    /// Rewind the cursor to the start of the source.
    pub fn reset(&mut self) -> Result<()> {
        self.seek_to(0, 1)
    }

    /// Move the cursor to a record boundary.
    ///
    /// Returns the boundary index the cursor now sits on, or `None` in
    /// sequential mode when no boundary remains after the cursor.
    pub fn reposition<G: Rng>(&mut self, mode: Positioning, rng: &mut G) -> Result<Option<usize>> {
        if self.boundaries.is_empty() {
            return Err(DrillError::EmptySource);
        }

        let index = match mode {
            Positioning::Sequential => {
                let offset = self.offset;
                let next = self.boundaries.partition_point(|b| b.offset < offset);
                if next == self.boundaries.len() {
                    return Ok(None);
                }
                next
            }
            Positioning::Random => rng.gen_range(0..self.boundaries.len()),
        };

        let Boundary { offset, line } = self.boundaries[index];
        self.seek_to(offset, line)?;
        debug!(index, offset, line, ?mode, "repositioned record cursor");
        Ok(Some(index))
    }

    /// Read the record at the cursor.
    ///
    /// Blank lines before the question and between question and answer are
    /// skipped. Returns `None` once the source is exhausted.
    pub fn read_pair(&mut self) -> Result<Option<Record>> {
        let Some((line_number, question)) = self.next_content_line()? else {
            return Ok(None);
        };
        let question = question
            .strip_prefix(QUESTION_DELIMITER)
            .ok_or_else(|| malformed(line_number, "question line must start with '-'"))?;

        let Some((answer_line, answer)) = self.next_content_line()? else {
            return Err(malformed(line_number, "question has no answer line"));
        };
        let answer = answer
            .strip_prefix(ANSWER_DELIMITER)
            .ok_or_else(|| malformed(answer_line, "answer line must start with '+'"))?;

        Ok(Some(Record {
            question: question.trim().to_string(),
            answer: answer.trim_end().to_string(),
            line_number,
        }))
    }

    fn index(&mut self) -> Result<()> {
        self.reset()?;

        let mut boundaries = Vec::new();
        loop {
            let (offset, line) = (self.offset, self.line);
            match self.next_line()? {
                None => break,
                Some(text) if text.starts_with(QUESTION_DELIMITER) => {
                    boundaries.push(Boundary { offset, line });
                }
                Some(_) => {}
            }
        }

        debug!(count = boundaries.len(), bytes = self.offset, "indexed record boundaries");
        self.boundaries = boundaries;
        self.reset()
    }

    fn seek_to(&mut self, offset: u64, line: usize) -> Result<()> {
        self.reader.seek(SeekFrom::Start(offset))?;
        self.offset = offset;
        self.line = line;
        Ok(())
    }

    fn next_content_line(&mut self) -> Result<Option<(usize, String)>> {
        loop {
            let line = self.line;
            match self.next_line()? {
                None => return Ok(None),
                Some(text) if text.trim().is_empty() => continue,
                Some(text) => return Ok(Some((line, text))),
            }
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self.reader.read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.offset += read as u64;
        self.line += 1;

        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}

fn malformed(line: usize, reason: &str) -> DrillError {
    DrillError::MalformedRecord {
        line,
        reason: reason.to_string(),
    }
}
