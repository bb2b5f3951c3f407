use std::path::PathBuf;
use thiserror::Error;

use crate::Variant;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("{}", .variant.unsupported_message())]
    UnsupportedFormat { extension: String, variant: Variant },

    #[error("Failed to extract text from {}: {reason}", .path.display())]
    Extraction { path: PathBuf, reason: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    pub(crate) fn extraction(path: &std::path::Path, reason: impl ToString) -> Self {
        DocumentError::Extraction {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
