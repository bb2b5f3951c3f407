//! File naming and input validation
//!
//! This module decides how an input file is read and where its outputs land.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::error::DocumentError;
use super::models::SourceFormat;
use crate::Variant;

/// Resolve the source format of `file_path` for the given variant
///
/// Only the final extension counts and it is compared case-insensitively.
pub fn resolve_source_format(
    file_path: &Path,
    variant: Variant,
) -> Result<SourceFormat, DocumentError> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let format = match (extension.as_str(), variant) {
        ("pdf", _) => Some(SourceFormat::Pdf),
        ("doc" | "docx", Variant::PdfAndWord) => Some(SourceFormat::Word),
        _ => None,
    };

    format.ok_or(DocumentError::UnsupportedFormat { extension, variant })
}

/// Paths of the two files written next to the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Build `<input without extension><suffix>.csv` and `.json`
pub fn output_paths(input: &Path, suffix: &str) -> OutputPaths {
    OutputPaths {
        csv: stem_path(input, &format!("{suffix}.csv")),
        json: stem_path(input, &format!("{suffix}.json")),
    }
}

/// The input path with its extension swapped for `tail`
pub(crate) fn stem_path(input: &Path, tail: &str) -> PathBuf {
    let mut name: OsString = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(tail);
    input.with_file_name(name)
}
