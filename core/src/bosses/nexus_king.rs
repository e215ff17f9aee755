//! Nexus-King (current tier)

use super::profile::{BossId, BossProfile, PlayerOutcome, TallyColumn};
use crate::analysis::CountTable;
use crate::scan::{phrase_before_paren, subject_before};
use crate::transcript::Attempt;

pub static NEXUS_KING: BossProfile = BossProfile {
    id: BossId::NexusKing,
    name: "Nexus-King",
    slug: "nexus-king",
    detection_patterns: &["nexus-king"],
    header_marker: "Nexus-King #",
    event_markers: &[
        "got MC'd from",
        "died to",
        "failed to face their spirits",
        "No mistakes found",
    ],
    mechanics: &[
        "Vanquish (tank frontal)",
        "Besiege (sweeping breath)",
        "Spirits (face spirits)",
        "Rip (Behead fissure)",
    ],
    death_causes: &[
        "tank frontal",
        "sweeping breath",
        "standing on a fissure left by Behead",
        "failed to face their spirits",
    ],
    non_player_mistakes: &[
        "got MC'd from tank frontal",
        "got MC'd from sweeping breath",
        "failed to face their spirits",
    ],
    tally_columns: &[
        TallyColumn {
            header: "Beam_Mistakes",
            needle: "beam",
        },
        TallyColumn {
            header: "Spirits_Mistakes",
            needle: "spirits",
        },
        TallyColumn {
            header: "Tank_Frontal_Mistakes",
            needle: "tank frontal",
        },
    ],
    extract_outcome,
    analyze_mistakes,
};

/// Beam and frontal hits are reported the same way whether the player died
/// or got mind-controlled.
fn normalized_cause(cause: &str) -> Option<&'static str> {
    if cause.contains("sweeping breath") {
        Some("died to beam")
    } else if cause.contains("tank frontal") {
        Some("died to tank frontal")
    } else {
        None
    }
}

fn extract_outcome(line: &str) -> Option<PlayerOutcome> {
    if let Some((player, rest)) = subject_before(line, "died to ")
        && let Some(cause) = phrase_before_paren(rest)
    {
        let label = normalized_cause(cause)
            .map(str::to_string)
            .unwrap_or_else(|| format!("died to {cause}"));
        return Some(PlayerOutcome::new(player, label));
    }

    if let Some((player, _)) = subject_before(line, "failed to face their spirits") {
        return Some(PlayerOutcome::new(player, "failed to face their spirits"));
    }

    if let Some((player, rest)) = subject_before(line, "got MC'd from ")
        && let Some(cause) = phrase_before_paren(rest)
    {
        let label = normalized_cause(cause)
            .map(str::to_string)
            .unwrap_or_else(|| format!("MC'd from {cause}"));
        return Some(PlayerOutcome::new(player, label));
    }

    None
}

/// Every Nexus-King failure is attributed to a player; "No mistakes found"
/// lines contribute nothing.
fn analyze_mistakes(_attempts: &[Attempt]) -> CountTable {
    CountTable::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_death_causes_are_normalized() {
        let beam = NEXUS_KING
            .extract_player_outcome("Bredie died to sweeping breath (2:11.0)")
            .unwrap();
        assert_eq!(beam, PlayerOutcome::new("Bredie", "died to beam"));

        let other = NEXUS_KING
            .extract_player_outcome("Kal died to standing on a fissure left by Behead (3:40.2)")
            .unwrap();
        assert_eq!(other.cause, "died to standing on a fissure left by Behead");
    }

    #[test]
    fn test_spirits_and_mind_control() {
        let spirits = NEXUS_KING
            .extract_player_outcome("Bredie failed to face their spirits in set: 2 (1:29.7)")
            .unwrap();
        assert_eq!(spirits, PlayerOutcome::new("Bredie", "failed to face their spirits"));

        let mc = NEXUS_KING
            .extract_player_outcome("Ilya got MC'd from tank frontal (0:52.1)")
            .unwrap();
        assert_eq!(mc.cause, "died to tank frontal");

        let mc_other = NEXUS_KING
            .extract_player_outcome("Ilya got MC'd from Oblivion (0:52.1)")
            .unwrap();
        assert_eq!(mc_other.cause, "MC'd from Oblivion");
    }

    #[test]
    fn test_unattributed_lines() {
        assert!(NEXUS_KING.is_boss_event("No mistakes found"));
        assert_eq!(NEXUS_KING.extract_player_outcome("No mistakes found"), None);
        assert!(NEXUS_KING.analyze_non_player_mistakes(&[]).is_empty());
    }
}
