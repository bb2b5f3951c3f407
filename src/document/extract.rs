//! Text extraction backends
//!
//! Each supported input format has one extractor. All of them hand back the
//! document's text as a single string; the parser never sees the format.

use lopdf::content::Content;
use lopdf::{Object, ObjectId};
use std::collections::BTreeMap;
use std::path::Path;

use super::error::DocumentError;
use super::models::SourceFormat;

/// Converts a document file into plain text
pub trait TextExtractor {
    /// Short backend name for logging
    fn name(&self) -> &'static str;

    fn extract(&self, path: &Path) -> Result<String, DocumentError>;
}

/// Pick the extractor for a resolved source format
pub fn extractor_for(format: SourceFormat) -> Box<dyn TextExtractor> {
    match format {
        SourceFormat::Pdf => Box::new(PdfTextExtractor),
        SourceFormat::Word => Box::new(PlainTextExtractor),
    }
}

/// Page-by-page PDF text extraction backed by lopdf
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    /// Concatenates every text-bearing page followed by a newline, in page order
    fn extract(&self, path: &Path) -> Result<String, DocumentError> {
        let document =
            lopdf::Document::load(path).map_err(|e| DocumentError::extraction(path, e))?;

        let pages = document.get_pages();
        tracing::debug!("{} has {} page(s)", path.display(), pages.len());

        let mut text = String::new();
        // get_pages() is a BTreeMap keyed by page number, so iteration is in page order
        for (page_number, page_id) in &pages {
            let raw = page_text(&document, *page_id)
                .map_err(|e| DocumentError::extraction(path, e))?;
            let page = raw.trim_end_matches(['\r', '\n']);

            if page.is_empty() {
                tracing::debug!("Page {} yielded no text", page_number);
                continue;
            }
            text.push_str(page);
            text.push('\n');
        }

        Ok(text)
    }
}

/// Text shown on one page, one output line per text line
///
/// A line ends at `ET`, at `T*`, `'` and `"`, and at any `Td`/`TD` with a
/// vertical offset. Horizontal-only moves keep the current line.
fn page_text(document: &lopdf::Document, page_id: ObjectId) -> lopdf::Result<String> {
    let encodings: BTreeMap<Vec<u8>, &str> = document
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect();
    let content = Content::decode(&document.get_page_content(page_id)?)?;

    let mut text = String::new();
    let mut encoding = None;
    for operation in &content.operations {
        let operands = &operation.operands;
        match operation.operator.as_str() {
            "Tf" => {
                if let Some(font) = operands.first().and_then(|name| name.as_name().ok()) {
                    encoding = encodings.get(font).copied();
                }
            }
            "Td" | "TD" => {
                if operands.get(1).is_some_and(|ty| !is_zero(ty)) {
                    break_line(&mut text);
                }
            }
            "T*" | "ET" => break_line(&mut text),
            "'" | "\"" => {
                break_line(&mut text);
                if let Some(shown) = operands.last() {
                    push_shown_text(&mut text, encoding, shown);
                }
            }
            "Tj" | "TJ" => {
                for shown in operands {
                    push_shown_text(&mut text, encoding, shown);
                }
            }
            _ => {}
        }
    }

    Ok(text)
}

fn break_line(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

fn push_shown_text(text: &mut String, encoding: Option<&str>, operand: &Object) {
    match operand {
        Object::String(bytes, _) => {
            text.push_str(&lopdf::Document::decode_text(encoding, bytes));
        }
        // TJ arrays mix strings with kerning offsets
        Object::Array(items) => {
            for item in items {
                push_shown_text(text, encoding, item);
            }
        }
        _ => {}
    }
}

fn is_zero(operand: &Object) -> bool {
    match operand {
        Object::Integer(value) => *value == 0,
        Object::Real(value) => *value == 0.0,
        _ => false,
    }
}

/// Reads `.doc`/`.docx` files as plain UTF-8 text
///
/// This does not understand the binary Word formats. It only works for text
/// files that carry a Word extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn extract(&self, path: &Path) -> Result<String, DocumentError> {
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|e| DocumentError::extraction(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extractor_selection() {
        assert_eq!(extractor_for(SourceFormat::Pdf).name(), "lopdf");
        assert_eq!(extractor_for(SourceFormat::Word).name(), "plain-text");
    }

    #[test]
    fn test_plain_text_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Q: Où?\r\nA: Ici").unwrap();

        let text = PlainTextExtractor.extract(file.path()).unwrap();
        assert_eq!(text, "Q: Où?\r\nA: Ici");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x50, 0x4b, 0x03, 0x04, 0xff, 0xfe]).unwrap();

        let err = PlainTextExtractor.extract(file.path()).unwrap_err();
        assert!(matches!(err, DocumentError::Extraction { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/qadoc/missing.docx");
        assert!(matches!(
            PlainTextExtractor.extract(path),
            Err(DocumentError::Io { .. })
        ));
        assert!(matches!(
            PdfTextExtractor.extract(Path::new("/nonexistent/qadoc/missing.pdf")),
            Err(DocumentError::Extraction { .. })
        ));
    }
}
