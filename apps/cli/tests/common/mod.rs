//! Shared helpers for sflash integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const CAPITAL: &str = "-Capital of France?\n+Paris\n";
pub const COLORS: &str = "-Name three colors\n+{red, green, blue}\n";

/// Command for the sflash binary with a clean environment.
pub fn sflash() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sflash").unwrap();
    for var in [
        "SFLASH_RANDOMIZE",
        "SFLASH_PERPETUAL",
        "SFLASH_THRESHOLD",
        "SFLASH_BATCH_SIZE",
        "SFLASH_SEED",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Write a question file into a fresh temp directory.
pub fn question_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cards.txt");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Generate a source with `n` single-word token records.
pub fn numbered_source(n: usize) -> String {
    (1..=n)
        .map(|i| format!("-Question {i}?\n+answer{i}\n"))
        .collect::<Vec<_>>()
        .join("\n")
}
