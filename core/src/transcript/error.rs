//! Error types for transcript input

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a transcript file
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to read transcript {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encoding error in transcript {path}: not valid UTF-8")]
    Encoding { path: PathBuf },
}
