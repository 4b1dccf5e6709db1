use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;

use crate::domain::wire::RawBookRecord;
use crate::infrastructure::client::ReadstatsClient;

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// JSON file holding an array of display-keyed book rows
    pub file: PathBuf,
}

pub async fn run(client: &ReadstatsClient, command: ImportCommand) -> Result<()> {
    let rows = read_rows(&command.file)?;
    let summary = client.books().import(&rows).await?;
    eprintln!(
        "Imported {} books from {}.",
        summary.imported,
        command.file.display()
    );
    Ok(())
}

/// Read an export file into rows ready to send.
///
/// Each row is normalised through the canonical record so that fallback
/// columns such as `type` or `Genre` survive re-serialisation.
pub fn read_rows(path: &std::path::Path) -> Result<Vec<RawBookRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let payload: Value = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let Value::Array(items) = payload else {
        bail!("{} must contain a JSON array", path.display());
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<RawBookRecord>(item) {
            Ok(row) => rows.push(RawBookRecord::from_record(&row.into_record())),
            Err(err) => tracing::warn!(index, error = %err, "skipping malformed row"),
        }
    }
    Ok(rows)
}
