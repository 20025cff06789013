//! Interactive drill over stdin/stdout.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use drill_core::{DrillEngine, DrillSummary, RecordStore, SessionPolicy, TerminalConsole};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    file: String,
    policy: &'a SessionPolicy,
    summary: DrillSummary,
}

/// Run the drill engine until the file (or input) is exhausted.
pub fn execute(file: &Path, policy: &SessionPolicy, json: bool) -> Result<()> {
    let store = RecordStore::open(file)
        .with_context(|| format!("failed to open question file: {}", file.display()))?;
    info!(records = store.count(), path = %file.display(), "loaded question file");

    let console = TerminalConsole::new(io::stdin().lock(), io::stdout().lock());
    let mut engine = DrillEngine::new(store, console, policy);
    let summary = engine
        .run()
        .with_context(|| format!("drill stopped: {}", file.display()))?;
    drop(engine);

    println!();
    if json {
        let report = RunReport {
            file: file.display().to_string(),
            policy,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Done: {} drilled, {} abandoned, {} answers over {} pass(es)",
            summary.records_drilled, summary.records_abandoned, summary.attempts, summary.passes
        );
    }
    Ok(())
}
