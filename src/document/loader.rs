//! Document loading and orchestration
//!
//! This module contains the `load_document()` function that drives a single
//! input file through validation, text extraction and record parsing.

use anyhow::{Context, Result};
use std::path::Path;

use super::extract::extractor_for;
use super::io::resolve_source_format;
use super::models::*;
use super::parsing::lines::split_lines;
use super::parsing::qa::parse_qa_pairs;
use crate::Variant;

/// Load a document and parse its question/answer records
///
/// This function:
/// 1. Resolves the input format from its extension for `variant`
/// 2. Extracts the full text with the matching extractor
/// 3. Scans the text for `Q:`/`A:` records
///
/// An unsupported extension fails with [`super::DocumentError::UnsupportedFormat`]
/// before the file is opened.
pub fn load_document(file_path: &Path, variant: Variant) -> Result<Document> {
    let format = resolve_source_format(file_path, variant)?;

    let file_size = std::fs::metadata(file_path)
        .with_context(|| format!("Cannot access {}", file_path.display()))?
        .len();

    let extractor = extractor_for(format);
    tracing::info!(
        "Extracting {} text from {} with {}",
        format,
        file_path.display(),
        extractor.name()
    );
    let text = extractor.extract(file_path)?;

    let records = parse_qa_pairs(&text);
    if records.is_empty() {
        tracing::warn!("No question/answer pairs found in {}", file_path.display());
    }

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    let metadata = DocumentMetadata {
        file_path: file_path.to_string_lossy().to_string(),
        file_size,
        format,
        char_count: text.chars().count(),
        line_count: split_lines(&text).count(),
    };

    Ok(Document {
        title,
        metadata,
        records,
    })
}
