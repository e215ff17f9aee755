//! Error types for configuration and the run pipeline

use std::path::PathBuf;
use thiserror::Error;

use crate::bosses::BossError;
use crate::report::ReportError;
use crate::transcript::ReaderError;

/// Errors while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Anything that stops a `clean` run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error(transparent)]
    Boss(#[from] BossError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
