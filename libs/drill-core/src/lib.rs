//! Core flashcard drill library used by the `sflash` command line tool.
//!
//! Provides:
//! - Record store with boundary indexing over a `-question` / `+answer` file
//! - Answer grammar (token-form and list-form answers)
//! - Answer matching (word overlap and list claiming)
//! - The interactive drill engine and its console contract

pub mod console;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod matching;
pub mod store;
pub mod types;

pub use console::{Console, TerminalConsole};
pub use engine::{DrillEngine, DrillSummary};
pub use error::{DrillError, ParseError, Result};
pub use grammar::{parse, tokenize, ParsedAnswer};
pub use matching::{score_tokens, ListRound, ListVerdict, MatchResult};
pub use store::{Positioning, RecordStore, ANSWER_DELIMITER, QUESTION_DELIMITER};
pub use types::{Record, SessionPolicy};
