//! Answer matching for token-form and list-form answers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

/// Result of scoring a token-form response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Correct words found anywhere in the response.
    pub matches: usize,
    /// Words in the correct answer.
    pub total: usize,
}

impl MatchResult {
    /// Ratio of matched words, between 0.0 and 1.0.
    pub fn percentage(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(DrillError::UndefinedPercentage);
        }
        Ok(self.matches as f64 / self.total as f64)
    }
}

/// Score a response against the correct words.
///
/// Each correct word counts once if it appears anywhere in `given`.
/// Repeated correct words are counted independently, so a single given
/// word can satisfy several of them.
pub fn score_tokens<S: AsRef<str>>(given: &[S], correct: &[S]) -> MatchResult {
    let matches = correct
        .iter()
        .filter(|word| given.iter().any(|g| g.as_ref() == word.as_ref()))
        .count();

    MatchResult {
        matches,
        total: correct.len(),
    }
}

/// Outcome of one response in a list round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVerdict {
    /// `???`: reveal every item and keep going.
    Reveal,
    /// `!!!`: reveal every item and give up on the list.
    GiveUp,
    /// The response named an item not claimed before.
    Claimed,
    /// The response named an item that was already claimed.
    AlreadyClaimed,
    /// The response matched no item.
    Miss,
}

impl fmt::Display for ListVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Reveal | Self::GiveUp => "",
            Self::Claimed => "Correct",
            Self::AlreadyClaimed => "Already claimed",
            Self::Miss => "Try again",
        };
        f.write_str(text)
    }
}

/// Claim tracking for one list-form record.
#[derive(Debug, Clone)]
pub struct ListRound<'a> {
    items: &'a [String],
    claimed: Vec<bool>,
    finished: bool,
}

impl<'a> ListRound<'a> {
    pub const REVEAL: &'static str = "???";
    pub const GIVE_UP: &'static str = "!!!";

    pub fn new(items: &'a [String]) -> Self {
        Self {
            items,
            claimed: vec![false; items.len()],
            finished: items.is_empty(),
        }
    }

    /// Judge one response, claiming the item it names if possible.
    pub fn respond(&mut self, response: &str) -> ListVerdict {
        let response = response.trim();

        if response == Self::REVEAL {
            return ListVerdict::Reveal;
        }
        if response == Self::GIVE_UP {
            self.finished = true;
            return ListVerdict::GiveUp;
        }

        // Prefer an unclaimed item so duplicated items can each be claimed.
        let unclaimed = self
            .items
            .iter()
            .zip(&self.claimed)
            .position(|(item, claimed)| !claimed && item == response);

        match unclaimed {
            Some(idx) => {
                self.claimed[idx] = true;
                if self.claimed.iter().all(|c| *c) {
                    self.finished = true;
                }
                ListVerdict::Claimed
            }
            None if self.items.iter().any(|item| item == response) => {
                ListVerdict::AlreadyClaimed
            }
            None => ListVerdict::Miss,
        }
    }

    /// All items claimed, or the round was given up.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|c| **c).count()
    }
}
