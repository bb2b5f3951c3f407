//! Document loading and question/answer parsing module
//!
//! This module turns a document file into plain text and scans that text
//! for `Q:`/`A:` records.

pub mod error;
pub mod extract;
pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

// Re-export all models and the public entry points
pub use error::DocumentError;
pub use extract::{extractor_for, PdfTextExtractor, PlainTextExtractor, TextExtractor};
pub use io::{output_paths, resolve_source_format, OutputPaths};
pub use loader::load_document;
pub use models::*;
pub use parsing::qa::parse_qa_pairs;
