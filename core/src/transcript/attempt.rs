use chrono::NaiveDateTime;

use crate::bosses::{BossProfile, PlayerOutcome};
use crate::scan::{format_duration, parse_attempt_duration};

/// One pull, closed by its first timestamp line.
///
/// `pull` starts out as the number printed in the header and is relabelled by
/// [`resequence`](super::resequence); nothing else changes after creation.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub pull: u32,
    pub header: String,
    /// Event lines as they appeared, without output indentation
    pub events: Vec<String>,
    pub timestamp_line: String,
    pub timestamp: NaiveDateTime,
    /// Seconds from the header's `(M:SS)`; 0 if the header carries none
    pub duration_secs: u32,
    pub boss: &'static BossProfile,
}

impl PartialEq for Attempt {
    fn eq(&self, other: &Self) -> bool {
        self.pull == other.pull
            && self.header == other.header
            && self.events == other.events
            && self.timestamp_line == other.timestamp_line
            && self.timestamp == other.timestamp
            && self.duration_secs == other.duration_secs
            && self.boss.id == other.boss.id
    }
}

impl Attempt {
    pub fn new(
        pull: u32,
        header: String,
        events: Vec<String>,
        timestamp_line: String,
        timestamp: NaiveDateTime,
        boss: &'static BossProfile,
    ) -> Self {
        let duration_secs = parse_attempt_duration(&header).unwrap_or(0);
        Self {
            pull,
            header,
            events,
            timestamp_line,
            timestamp,
            duration_secs,
            boss,
        }
    }

    pub fn duration_display(&self) -> String {
        format_duration(self.duration_secs)
    }

    /// Header rendered with the current pull number.
    pub fn display_header(&self) -> String {
        self.boss.format_header(self.pull, self.duration_secs)
    }

    /// Attributed outcomes, one per event line the profile understands.
    pub fn outcomes(&self) -> impl Iterator<Item = PlayerOutcome> + '_ {
        self.events
            .iter()
            .filter_map(|event| self.boss.extract_player_outcome(event))
    }
}
