//! Persisting fetched stories to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::errors::Result;
use crate::models::StoryRecord;

/// Writes `records` to `path` as a single JSON array, replacing any existing
/// file.
///
/// The file handle is owned by this function and dropped on every return
/// path, including when serialization fails midway.
pub fn write_records(path: impl AsRef<Path>, records: &[StoryRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
