//! Interactive drill loop.
//!
//! Records are loaded in batches of `batch_size`. Each record's answer is
//! parsed once and drilled in token mode (retry until the match ratio
//! reaches the threshold) or list mode (claim every item). A batch shorter
//! than requested ends the pass; perpetual mode rewinds and starts again.

use std::io::{BufRead, Seek};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::console::Console;
use crate::error::{DrillError, Result};
use crate::grammar::{self, ParsedAnswer};
use crate::matching::{score_tokens, ListRound, ListVerdict};
use crate::store::{Positioning, RecordStore};
use crate::types::{Record, SessionPolicy};

/// Totals for one run of the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrillSummary {
    /// Completed passes over the source.
    pub passes: usize,
    /// Records answered to completion.
    pub records_drilled: usize,
    /// Records given up with `!!!` or left when input ended.
    pub records_abandoned: usize,
    /// Responses read from the console.
    pub attempts: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Resolved,
    Abandoned,
}

/// Drives a drill session over a record store and a console.
pub struct DrillEngine<'p, R, C> {
    store: RecordStore<R>,
    console: C,
    policy: &'p SessionPolicy,
    rng: StdRng,
    input_closed: bool,
    summary: DrillSummary,
}

impl<'p, R: BufRead + Seek, C: Console> DrillEngine<'p, R, C> {
    pub fn new(store: RecordStore<R>, console: C, policy: &'p SessionPolicy) -> Self {
        let rng = match policy.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            store,
            console,
            policy,
            rng,
            input_closed: false,
            summary: DrillSummary::default(),
        }
    }

    /// Run the drill until the source is exhausted (or, in perpetual mode,
    /// until input ends).
    pub fn run(&mut self) -> Result<DrillSummary> {
        if self.store.count() == 0 {
            return Err(DrillError::EmptySource);
        }
        self.store.reset()?;

        loop {
            self.drill_pass()?;
            self.summary.passes += 1;

            if !self.policy.perpetual {
                break;
            }
            if self.input_closed {
                info!(passes = self.summary.passes, "input ended, not starting another pass");
                break;
            }
            info!(passes = self.summary.passes, "source exhausted, restarting from the top");
            self.store.reset()?;
        }

        Ok(self.summary.clone())
    }

    /// Consume the engine, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    fn batch_size(&self) -> usize {
        self.policy.batch_size.max(1)
    }

    fn drill_pass(&mut self) -> Result<()> {
        loop {
            let batch = self.load_batch()?;
            for (record, answer) in &batch {
                self.process_record(record, answer)?;
            }

            // A short batch means the source ran out. Once input has ended
            // no further answers can arrive, so the pass ends here too.
            if batch.len() < self.batch_size() || self.input_closed {
                return Ok(());
            }
        }
    }

    /// Read up to a batch of records, parsing each answer up front so a
    /// malformed record stops the run before any of the batch is prompted.
    fn load_batch(&mut self) -> Result<Vec<(Record, ParsedAnswer)>> {
        if self.policy.randomize {
            self.store.reposition(Positioning::Random, &mut self.rng)?;
        }

        let requested = self.batch_size();
        let mut batch = Vec::new();
        while batch.len() < requested {
            let Some(record) = self.store.read_pair()? else {
                break;
            };
            let answer = grammar::parse(&record.answer).map_err(|e| e.at_line(record.line_number))?;
            batch.push((record, answer));
        }

        debug!(requested, loaded = batch.len(), "loaded batch");
        Ok(batch)
    }

    fn process_record(&mut self, record: &Record, answer: &ParsedAnswer) -> Result<()> {
        let outcome = match answer {
            ParsedAnswer::Token { words } => self.token_prompt(record, words)?,
            ParsedAnswer::List { items } => self.list_prompt(record, items)?,
        };

        match outcome {
            Outcome::Resolved => self.summary.records_drilled += 1,
            Outcome::Abandoned => {
                info!(line = record.line_number, "record abandoned");
                self.summary.records_abandoned += 1;
            }
        }
        Ok(())
    }

    fn token_prompt(&mut self, record: &Record, words: &[String]) -> Result<Outcome> {
        self.console.show(&format!("Q: {}", record.question))?;
        self.console.prompt("> ")?;

        loop {
            let Some(response) = self.next_response()? else {
                return Ok(Outcome::Abandoned);
            };

            let given = grammar::tokenize(&response);
            let result = score_tokens(given.as_slice(), words);
            let ratio = result.percentage()?;
            self.console.show(&format!(
                "{}/{} == {:.2}  {}",
                result.matches,
                result.total,
                ratio,
                record.answer.trim()
            ))?;

            if ratio >= self.policy.retry_threshold {
                return Ok(Outcome::Resolved);
            }
            self.console.show("Try again.")?;
            self.console.prompt("> ")?;
        }
    }

    fn list_prompt(&mut self, record: &Record, items: &[String]) -> Result<Outcome> {
        self.console.show(&format!("Q: {}", record.question))?;
        self.console.show("> [list input]")?;

        let mut round = ListRound::new(items);
        while !round.is_finished() {
            self.console.prompt("  -> ")?;
            let Some(response) = self.next_response()? else {
                return Ok(Outcome::Abandoned);
            };

            match round.respond(&response) {
                ListVerdict::Reveal => self.reveal(items)?,
                ListVerdict::GiveUp => {
                    self.reveal(items)?;
                    return Ok(Outcome::Abandoned);
                }
                verdict => self.console.show(&verdict.to_string())?,
            }
        }

        Ok(Outcome::Resolved)
    }

    fn reveal(&mut self, items: &[String]) -> Result<()> {
        for item in items {
            self.console.show(item)?;
        }
        Ok(())
    }

    fn next_response(&mut self) -> Result<Option<String>> {
        let response = self.console.read_response()?;
        match response {
            Some(_) => self.summary.attempts += 1,
            None => self.input_closed = true,
        }
        Ok(response)
    }
}
