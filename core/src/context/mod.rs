mod config;
mod error;
mod pipeline;

pub use config::{AppConfig, DEFAULT_CSV_OUTPUT, DEFAULT_OUTPUT};
pub use error::{ConfigError, PipelineError};
pub use pipeline::{Analysis, RunOptions, RunSummary, analyze_transcript, run};
