//! CSV export
//!
//! Three report shapes are available; callers pick one explicitly:
//! - `attempts`: one row per pull
//! - `events`: one row per event line, with its attribution if any
//! - `players`: per-player tally with boss-specific mistake columns

use std::fmt;
use std::str::FromStr;

use csv::WriterBuilder;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::analysis::analyze_player_stats;
use crate::bosses::BossProfile;
use crate::transcript::Attempt;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    #[default]
    Attempts,
    Events,
    Players,
}

impl ExportMode {
    pub const ALL: [ExportMode; 3] = [ExportMode::Attempts, ExportMode::Events, ExportMode::Players];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportMode::Attempts => "attempts",
            ExportMode::Events => "events",
            ExportMode::Players => "players",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ExportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                format!("unknown export mode '{s}' (expected attempts, events or players)")
            })
    }
}

#[derive(Serialize)]
struct AttemptRow {
    pull: u32,
    date: String,
    duration: String,
    events: String,
    player_outcomes: String,
}

#[derive(Serialize)]
struct EventRow<'a> {
    pull: u32,
    date: &'a str,
    duration: &'a str,
    event: &'a str,
    player: &'a str,
    cause: &'a str,
}

/// Renders the chosen shape into an in-memory CSV document.
pub fn render_csv(
    attempts: &[Attempt],
    boss: &BossProfile,
    mode: ExportMode,
) -> Result<Vec<u8>, ReportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    match mode {
        ExportMode::Attempts => write_attempts(&mut writer, attempts)?,
        ExportMode::Events => write_events(&mut writer, attempts)?,
        ExportMode::Players => write_player_tally(&mut writer, attempts, boss)?,
    }

    writer
        .into_inner()
        .map_err(|err| ReportError::Flush(err.into_error()))
}

fn write_attempts(
    writer: &mut csv::Writer<Vec<u8>>,
    attempts: &[Attempt],
) -> Result<(), ReportError> {
    writer.write_record(["pull", "date", "duration", "events", "player_outcomes"])?;

    for attempt in attempts {
        let outcomes: Vec<String> = attempt
            .outcomes()
            .map(|outcome| format!("{}: {}", outcome.player, outcome.cause))
            .collect();
        writer.serialize(AttemptRow {
            pull: attempt.pull,
            date: attempt.timestamp.format(DATE_FORMAT).to_string(),
            duration: attempt.duration_display(),
            events: attempt.events.join(" | "),
            player_outcomes: outcomes.join("; "),
        })?;
    }
    Ok(())
}

fn write_events(
    writer: &mut csv::Writer<Vec<u8>>,
    attempts: &[Attempt],
) -> Result<(), ReportError> {
    writer.write_record(["pull", "date", "duration", "event", "player", "cause"])?;

    for attempt in attempts {
        let date = attempt.timestamp.format(DATE_FORMAT).to_string();
        let duration = attempt.duration_display();
        for event in &attempt.events {
            let outcome = attempt.boss.extract_player_outcome(event);
            let (player, cause) = outcome
                .as_ref()
                .map(|o| (o.player.as_str(), o.cause.as_str()))
                .unwrap_or(("", ""));
            writer.serialize(EventRow {
                pull: attempt.pull,
                date: &date,
                duration: &duration,
                event,
                player,
                cause,
            })?;
        }
    }
    Ok(())
}

/// `Player,Total_Deaths,<columns>,Other_Mistakes`, players by total desc.
fn write_player_tally(
    writer: &mut csv::Writer<Vec<u8>>,
    attempts: &[Attempt],
    boss: &BossProfile,
) -> Result<(), ReportError> {
    let mut header = vec!["Player", "Total_Deaths"];
    header.extend(boss.tally_columns.iter().map(|column| column.header));
    header.push("Other_Mistakes");
    writer.write_record(&header)?;

    let stats = analyze_player_stats(attempts);
    for (player, causes) in stats.sorted_desc() {
        let total = causes.total();
        if total == 0 {
            continue;
        }

        let column_counts: Vec<u32> = boss
            .tally_columns
            .iter()
            .map(|column| {
                causes
                    .iter()
                    .filter(|(cause, _)| cause.contains(column.needle))
                    .map(|(_, n)| n)
                    .sum()
            })
            .collect();
        let other = i64::from(total) - column_counts.iter().map(|&n| i64::from(n)).sum::<i64>();

        let mut record = vec![player.to_string(), total.to_string()];
        record.extend(column_counts.iter().map(u32::to_string));
        record.push(other.to_string());
        writer.write_record(&record)?;
    }
    Ok(())
}
