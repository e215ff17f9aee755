//! Error types for report output

use std::path::PathBuf;
use thiserror::Error;

/// Errors while rendering or writing reports
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode CSV row")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV buffer")]
    Flush(#[source] std::io::Error),

    #[error("failed to write {stage} output {path}")]
    WriteFile {
        stage: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move {stage} output into place at {path}")]
    Rename {
        stage: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
