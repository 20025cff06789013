//! Answer grammar for stored answers.
//!
//! # Format
//! ```text
//! +Paris                      token-form: compared as a bag of words
//! +{red, green, blue}         list-form: every item must be named once
//! ```
//!
//! The first non-space character decides the form. Token-form answers are
//! split on whitespace and on the record delimiters (`-`, `+`), with `,`,
//! `;` and `.` dropped entirely. List-form items are the literal text
//! between `,` separators up to the closing `}`, trimmed.

use crate::error::ParseError;
use crate::store::{ANSWER_DELIMITER, QUESTION_DELIMITER};

const LIST_OPEN: char = '{';
const LIST_CLOSE: char = '}';
const LIST_SEPARATOR: char = ',';

/// A stored answer decomposed for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAnswer {
    /// Normalized words, in answer order.
    Token { words: Vec<String> },
    /// Trimmed list items, in answer order.
    List { items: Vec<String> },
}

impl ParsedAnswer {
    /// Number of units the answer is scored against.
    pub fn len(&self) -> usize {
        match self {
            Self::Token { words } => words.len(),
            Self::List { items } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }
}

/// Classify and decompose a raw answer string.
pub fn parse(raw: &str) -> Result<ParsedAnswer, ParseError> {
    let body = raw.trim_start_matches(' ');

    let parsed = match body.strip_prefix(LIST_OPEN) {
        Some(rest) => ParsedAnswer::List {
            items: split_list(rest),
        },
        None => ParsedAnswer::Token {
            words: tokenize(body),
        },
    };

    if parsed.is_empty() {
        return Err(ParseError::EmptyAnswer);
    }
    Ok(parsed)
}

/// Split free text into normalized words.
///
/// Used for both the stored answer and the user's response so the two
/// sides are normalized identically.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();

    for ch in text.chars() {
        match ch {
            ',' | ';' | '.' => {}
            c if c.is_whitespace() || c == QUESTION_DELIMITER || c == ANSWER_DELIMITER => {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
            }
            c => word.push(c),
        }
    }
    if !word.is_empty() {
        words.push(word);
    }

    words
}

fn split_list(body: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut item = String::new();

    for ch in body.chars() {
        match ch {
            LIST_SEPARATOR => push_item(&mut items, &mut item),
            LIST_CLOSE => break,
            c => item.push(c),
        }
    }
    // An unterminated list is closed by the end of the line.
    push_item(&mut items, &mut item);

    items
}

fn push_item(items: &mut Vec<String>, item: &mut String) {
    let trimmed = item.trim();
    if !trimmed.is_empty() {
        items.push(trimmed.to_string());
    }
    item.clear();
}
