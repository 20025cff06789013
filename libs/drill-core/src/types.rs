//! Core types shared by the store, the matcher and the engine.

use serde::{Deserialize, Serialize};

/// One question/answer pair read from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub question: String,
    pub answer: String,
    /// 1-based line of the question line.
    pub line_number: usize,
}

/// Run-wide drill policy, fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPolicy {
    /// Jump to a random record boundary before every batch.
    pub randomize: bool,
    /// Restart from the top after the source is exhausted.
    pub perpetual: bool,
    /// Records loaded per batch.
    pub batch_size: usize,
    /// Minimum token-mode match ratio before a record is resolved.
    pub retry_threshold: f64,
    /// Seed for random positioning; entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            randomize: false,
            perpetual: false,
            batch_size: 10,
            retry_threshold: 0.50,
            seed: None,
        }
    }
}
