//! CSV emitter
//!
//! Writes a fixed header row followed by one row per record. Field quoting is
//! the `csv` crate's default (RFC 4180: quote when a field contains a comma,
//! quote, or line break; double embedded quotes).

use crate::crawler::{Author, Quote};
use crate::output::traits::{CsvRecord, OutputResult};
use std::path::Path;

/// Separator used to flatten a quote's tags into one CSV field
pub const TAG_SEPARATOR: &str = ";";

impl CsvRecord for Quote {
    const HEADER: &'static [&'static str] = &["text", "author", "tags"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.text.clone(),
            self.author.clone(),
            self.tags.join(TAG_SEPARATOR),
        ]
    }
}

impl CsvRecord for Author {
    const HEADER: &'static [&'static str] =
        &["name", "born_date", "born_location", "description"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.born_date.clone(),
            self.born_location.clone(),
            self.description.clone(),
        ]
    }
}

/// Writes records to `path`, replacing any existing file
///
/// # Returns
///
/// * `Ok(usize)` - Number of data rows written (header excluded)
/// * `Err(OutputError)` - File could not be created or written
pub fn write_csv<R: CsvRecord>(path: &Path, records: &[R]) -> OutputResult<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(&mut writer, records)?;
    writer.flush()?;

    tracing::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(records.len())
}

/// Writes the header and records to an existing CSV writer
pub fn write_records<W: std::io::Write, R: CsvRecord>(
    writer: &mut csv::Writer<W>,
    records: &[R],
) -> OutputResult<()> {
    writer.write_record(R::HEADER)?;
    for record in records {
        writer.write_record(record.fields())?;
    }
    Ok(())
}
