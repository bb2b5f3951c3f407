//! CSV and JSON serialization of question/answer records
//!
//! Both writers are pure sinks: records are written exactly as given, in
//! order, with the header/keys `Q` and `A`.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::document::QaRecord;
use crate::ExportFormat;

/// Serialize records in the requested format
pub fn export_records(records: &[QaRecord], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => export_to_csv(records),
        ExportFormat::Json => export_to_json(records),
    }
}

/// CSV with a `Q,A` header row and one row per record
pub fn export_to_csv(records: &[QaRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).context("CSV output was not valid UTF-8")
}

/// Pretty-printed JSON array of `{"Q": ..., "A": ...}` objects
pub fn export_to_json(records: &[QaRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize records to JSON")
}

pub fn write_csv_file(records: &[QaRecord], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv(records, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("Wrote {} CSV row(s) to {}", records.len(), path.display());
    Ok(())
}

pub fn write_json_file(records: &[QaRecord], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("Failed to serialize records to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("Wrote {} JSON record(s) to {}", records.len(), path.display());
    Ok(())
}

fn write_csv<W: Write>(records: &[QaRecord], sink: W) -> Result<()> {
    // Records end in CRLF
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(sink);

    // Written explicitly so an empty record list still gets its header
    writer.write_record(["Q", "A"])?;
    for record in records {
        writer.write_record([record.question.as_str(), record.answer.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
