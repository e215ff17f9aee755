//! Boss profile type
//!
//! A profile is plain static data plus two function pointers. Every encounter
//! answers the same four questions (is this a header, is this an event, who
//! did what, which mechanics failed), so there is no trait object here.

use crate::analysis::CountTable;
use crate::scan::format_duration;
use crate::transcript::Attempt;

/// Closed set of supported encounters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BossId {
    NexusKing,
    Gallywix,
    MugZee,
    StixBunkjunker,
}

/// A single attributed outcome pulled out of an event line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOutcome {
    pub player: String,
    pub cause: String,
}

impl PlayerOutcome {
    pub fn new(player: &str, cause: impl Into<String>) -> Self {
        Self {
            player: player.to_string(),
            cause: cause.into(),
        }
    }
}

pub type OutcomeExtractor = fn(&str) -> Option<PlayerOutcome>;
pub type MistakeAnalyzer = fn(&[Attempt]) -> CountTable;

/// Column of the per-player tally export: causes containing `needle` are
/// counted under `header`.
#[derive(Debug)]
pub struct TallyColumn {
    pub header: &'static str,
    pub needle: &'static str,
}

#[derive(Debug)]
pub struct BossProfile {
    pub id: BossId,
    pub name: &'static str,
    /// Short identifier accepted by `--boss`
    pub slug: &'static str,
    /// Matched case-insensitively against the raw transcript
    pub detection_patterns: &'static [&'static str],
    /// Substring that marks a pull header, e.g. `"Gallywix #"`
    pub header_marker: &'static str,
    /// Any of these substrings marks a line as belonging to the pull
    pub event_markers: &'static [&'static str],
    pub mechanics: &'static [&'static str],
    pub death_causes: &'static [&'static str],
    pub non_player_mistakes: &'static [&'static str],
    pub tally_columns: &'static [TallyColumn],
    pub extract_outcome: OutcomeExtractor,
    pub analyze_mistakes: MistakeAnalyzer,
}

impl PartialEq for BossProfile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BossProfile {}

impl BossProfile {
    pub fn is_attempt_header(&self, line: &str) -> bool {
        line.contains(self.header_marker)
    }

    pub fn is_boss_event(&self, line: &str) -> bool {
        self.event_markers.iter().any(|marker| line.contains(marker))
    }

    /// Player and cause for an event line. Lines that carry no attribution,
    /// or whose shape doesn't match, yield `None`.
    pub fn extract_player_outcome(&self, line: &str) -> Option<PlayerOutcome> {
        (self.extract_outcome)(line).filter(|o| !o.player.is_empty() && !o.cause.is_empty())
    }

    pub fn analyze_non_player_mistakes(&self, attempts: &[Attempt]) -> CountTable {
        (self.analyze_mistakes)(attempts)
    }

    /// Header line for a renumbered pull.
    pub fn format_header(&self, number: u32, duration_secs: u32) -> String {
        format!("{} #{}   ({})", self.name, number, format_duration(duration_secs))
    }

    /// `content_lower` must already be lowercased.
    pub(crate) fn matches_content(&self, content_lower: &str) -> bool {
        self.detection_patterns
            .iter()
            .any(|pattern| content_lower.contains(&pattern.to_lowercase()))
    }
}
