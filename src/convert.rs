//! Single-file conversion pipeline
//!
//! Loads one document, then writes its records next to the input as
//! `<stem><suffix>.csv` and `<stem><suffix>.json`.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::document::{load_document, output_paths, OutputPaths};
use crate::export::{write_csv_file, write_json_file};
use crate::Variant;

/// Conversion options
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub variant: Variant,
}

/// What a conversion produced
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub outputs: OutputPaths,
    pub record_count: usize,
}

impl ConversionSummary {
    /// Confirmation line printed after a successful run
    ///
    /// Names the outputs without the variant suffix.
    pub fn confirmation(&self) -> String {
        let stem = self.input.with_extension("");
        format!(
            "Converted {} to {}.csv and {}.json.",
            self.input.display(),
            stem.display(),
            stem.display()
        )
    }
}

/// Convert `input` and write both output files
///
/// Nothing is written when loading fails, including for unsupported
/// extensions.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<ConversionSummary> {
    let document = load_document(input, options.variant)?;
    let outputs = output_paths(input, options.variant.output_suffix());

    write_csv_file(&document.records, &outputs.csv)?;
    write_json_file(&document.records, &outputs.json)?;

    tracing::info!(
        "Wrote {} record(s) to {} and {}",
        document.records.len(),
        outputs.csv.display(),
        outputs.json.display()
    );

    Ok(ConversionSummary {
        input: input.to_path_buf(),
        outputs,
        record_count: document.records.len(),
    })
}
