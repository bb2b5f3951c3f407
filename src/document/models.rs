//! Core data structures for parsed documents
//!
//! This module defines the public types produced by a parse pass: the
//! question/answer records themselves and the document that carries them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed question/answer pair
///
/// Serializes as `{"Q": ..., "A": ...}` with the keys in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    #[serde(rename = "Q")]
    pub question: String,
    #[serde(rename = "A")]
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Input formats a document can be read as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Pdf,
    /// `.doc`/`.docx` files read as plain UTF-8 text
    Word,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Pdf => write!(f, "PDF"),
            SourceFormat::Word => write!(f, "Word"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub records: Vec<QaRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub format: SourceFormat,
    /// Characters of extracted text
    pub char_count: usize,
    pub line_count: usize,
}
