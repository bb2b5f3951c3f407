//! qadoc: Question/answer extraction for PDF and plain-text Word documents
//!
//! This library pulls the text out of a document, scans it for lines marked
//! `Q:` and `A:`, and serializes the resulting records as CSV and JSON.

pub mod convert;
pub mod document;
pub mod export;

use std::fmt;

/// Export format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Converter variants, distinguished by accepted input types and output suffix
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// PDF input only, outputs named `<stem>_w_lib.*`
    #[value(name = "pdf")]
    PdfOnly,
    /// PDF plus `.doc`/`.docx` read as plain text, outputs named `<stem>_wo_lib.*`
    #[default]
    #[value(name = "word")]
    PdfAndWord,
}

impl Variant {
    /// Suffix appended to the input stem for both output files
    pub fn output_suffix(self) -> &'static str {
        match self {
            Variant::PdfOnly => "_w_lib",
            Variant::PdfAndWord => "_wo_lib",
        }
    }

    /// Diagnostic printed when the input extension is not accepted
    pub fn unsupported_message(self) -> &'static str {
        match self {
            Variant::PdfOnly => "Unsupported file type. Only PDF is supported in this script.",
            Variant::PdfAndWord => "Unsupported file type. Only PDF and Word files are supported.",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::PdfOnly => write!(f, "pdf"),
            Variant::PdfAndWord => write!(f, "word"),
        }
    }
}

// Re-export commonly used types
pub use convert::{convert_file, ConversionSummary, ConvertOptions};
pub use document::{load_document, parse_qa_pairs, Document, DocumentError, QaRecord};
