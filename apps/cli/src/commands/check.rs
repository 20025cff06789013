//! Validate a question file without drilling.

use std::path::Path;

use anyhow::{Context, Result};
use drill_core::{grammar, DrillError, RecordStore};

/// Read every record and parse every answer, reporting what was found.
pub fn execute(file: &Path) -> Result<()> {
    let mut store = RecordStore::open(file)
        .with_context(|| format!("failed to open question file: {}", file.display()))?;
    if store.count() == 0 {
        return Err(DrillError::EmptySource).with_context(|| file.display().to_string());
    }

    let (mut token, mut list) = (0usize, 0usize);
    while let Some(record) = store.read_pair()? {
        let answer = grammar::parse(&record.answer).map_err(|e| e.at_line(record.line_number))?;
        if answer.is_list() {
            list += 1;
        } else {
            token += 1;
        }
    }

    println!("{} records OK ({} token, {} list)", token + list, token, list);
    Ok(())
}
