//! End-to-end `clean` run: read, detect, segment, resequence, report.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use super::config::{AppConfig, DEFAULT_CSV_OUTPUT, DEFAULT_OUTPUT};
use super::error::PipelineError;
use crate::analysis::analyze_player_stats;
use crate::bosses::{BossError, BossProfile, BossRegistry};
use crate::report::{ExportMode, OutputFile, render_cleaned_report, render_csv, write_all_or_nothing};
use crate::transcript::{
    Attempt, LineNormalizer, SegmentStats, Segmenter, TimestampFormat, TimestampParser,
    Transcript, resequence,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub csv_output: PathBuf,
    pub export_mode: ExportMode,
    /// Boss slug; `None` detects from content
    pub boss: Option<String>,
    pub timestamp_formats: Vec<TimestampFormat>,
    /// Date that `Today at` and clock-only stamps resolve against
    pub today: NaiveDate,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self::from_config(input, today, &AppConfig::default())
    }

    pub fn from_config(input: impl Into<PathBuf>, today: NaiveDate, config: &AppConfig) -> Self {
        Self {
            input: input.into(),
            output: config
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            csv_output: config
                .csv_output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_OUTPUT)),
            export_mode: config.export_mode,
            boss: config.boss.clone(),
            timestamp_formats: config.timestamp_formats.clone(),
            today,
        }
    }

    pub fn timestamp_parser(&self) -> TimestampParser {
        TimestampParser::with_formats(self.today, self.timestamp_formats.clone())
    }
}

/// Segmented, resequenced pulls for one transcript.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub boss: &'static BossProfile,
    pub attempts: Vec<Attempt>,
    pub stats: SegmentStats,
}

pub fn analyze_transcript(
    transcript: &Transcript,
    registry: &BossRegistry,
    boss_slug: Option<&str>,
    timestamps: &TimestampParser,
) -> Result<Analysis, BossError> {
    let boss = registry.select(&transcript.content, boss_slug)?;
    let normalizer = LineNormalizer::for_boss(boss);

    let lines = transcript
        .lines()
        .filter_map(|line| normalizer.normalize(line));
    let report = Segmenter::new(boss, timestamps).segment(lines);

    Ok(Analysis {
        boss,
        attempts: resequence(report.attempts),
        stats: report.stats,
    })
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub boss: &'static BossProfile,
    pub attempts: usize,
    pub players: usize,
    pub non_player_mistakes: u32,
    pub stats: SegmentStats,
    pub output: PathBuf,
    pub csv_output: PathBuf,
    pub export_mode: ExportMode,
}

pub fn run(options: &RunOptions, registry: &BossRegistry) -> Result<RunSummary, PipelineError> {
    let transcript = Transcript::read(&options.input)?;
    let timestamps = options.timestamp_parser();
    let analysis = analyze_transcript(
        &transcript,
        registry,
        options.boss.as_deref(),
        &timestamps,
    )?;
    let boss = analysis.boss;

    let text = render_cleaned_report(&analysis.attempts, boss);
    let csv = render_csv(&analysis.attempts, boss, options.export_mode)?;
    write_all_or_nothing(&[
        OutputFile::new("text", &options.output, text),
        OutputFile::new("csv", &options.csv_output, csv),
    ])?;

    let summary = RunSummary {
        boss,
        attempts: analysis.attempts.len(),
        players: analyze_player_stats(&analysis.attempts).len(),
        non_player_mistakes: boss.analyze_non_player_mistakes(&analysis.attempts).total(),
        stats: analysis.stats,
        output: options.output.clone(),
        csv_output: options.csv_output.clone(),
        export_mode: options.export_mode,
    };

    info!(
        boss = boss.name,
        attempts = summary.attempts,
        players = summary.players,
        non_player_mistakes = summary.non_player_mistakes,
        output = %summary.output.display(),
        csv_output = %summary.csv_output.display(),
        export_mode = %summary.export_mode,
        "Cleaned transcript"
    );

    Ok(summary)
}
