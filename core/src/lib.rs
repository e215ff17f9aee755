//! Boss-attempt transcript parsing
//!
//! Turns a raid chat-bot transcript into ordered pulls with per-player
//! outcomes and non-player mechanic failures, then renders the cleaned text
//! report and CSV exports.

pub mod analysis;
pub mod bosses;
pub mod context;
pub mod report;
pub(crate) mod scan;
pub mod transcript;

pub use analysis::{CountTable, PlayerStats};
pub use bosses::{BossError, BossId, BossProfile, BossRegistry, PlayerOutcome};
pub use context::{
    AppConfig, ConfigError, PipelineError, RunOptions, RunSummary, analyze_transcript, run,
};
pub use report::{ExportMode, ReportError};
pub use scan::{format_duration, parse_attempt_duration, pull_number, strip_part_suffix};
pub use transcript::{
    Attempt, HeaderCensus, ReaderError, TimestampFormat, TimestampParser, Transcript,
    count_headers, resequence,
};
