//! Stix Bunkjunker (previous tier)
//!
//! Scrapmaster assignments are posted with a raid-marker glyph
//! (`missed their Scrapmaster on :Star:`); the line normalizer keeps the
//! marker name for this boss so it survives into the cause label.

use super::profile::{BossId, BossProfile, PlayerOutcome, TallyColumn};
use crate::analysis::CountTable;
use crate::scan::{has_paren_body, leading_word, phrase_before_paren, subject_before};
use crate::transcript::Attempt;

pub static STIX_BUNKJUNKER: BossProfile = BossProfile {
    id: BossId::StixBunkjunker,
    name: "Stix Bunkjunker",
    slug: "stix",
    detection_patterns: &["stix bunkjunker"],
    header_marker: "Stix Bunkjunker #",
    event_markers: &[
        "died to",
        "ball expired",
        "hit a bombshell",
        "Bombshell did not die in time",
        "missed their Scrapmaster",
        "No mistakes found",
    ],
    mechanics: &["ball", "bombshell", "scrapmaster"],
    death_causes: &[
        "ball expired",
        "hit a bombshell",
        "Bombshell did not die in time",
        "missed their Scrapmaster",
    ],
    non_player_mistakes: &[
        "ball expired",
        "hit a bombshell",
        "Bombshell did not die in time",
        "missed their Scrapmaster",
    ],
    tally_columns: &[
        TallyColumn {
            header: "Scrapmaster_Mistakes",
            needle: "Scrapmaster",
        },
        TallyColumn {
            header: "Bombshell_Mistakes",
            needle: "bombshell",
        },
        TallyColumn {
            header: "Ball_Mistakes",
            needle: "ball expired",
        },
    ],
    extract_outcome,
    analyze_mistakes,
};

/// Phrase the normalizer splices raid markers after.
pub(crate) const SCRAPMASTER_MARKER_PHRASE: &str = "missed their Scrapmaster on";

fn extract_outcome(line: &str) -> Option<PlayerOutcome> {
    let trimmed = line.trim_start();

    if let Some((player, rest)) = leading_word(trimmed) {
        // `Alice missed their Scrapmaster on Star (1:02.3)`
        if let Some(rest) = rest.strip_prefix(" missed their Scrapmaster on ")
            && let Some((marker, rest)) = leading_word(rest)
            && let Some(rest) = rest.strip_prefix(' ')
            && has_paren_body(rest)
        {
            return Some(PlayerOutcome::new(
                player,
                format!("{SCRAPMASTER_MARKER_PHRASE} {marker}"),
            ));
        }

        // `Alice hit a bombshell (1:02.3)`
        if let Some(rest) = rest.strip_prefix(" hit a bombshell ")
            && has_paren_body(rest)
        {
            return Some(PlayerOutcome::new(player, "hit a bombshell"));
        }

        // `Alice's ball expired (1:02.3)`
        if let Some(rest) = rest.strip_prefix("'s ball expired ")
            && has_paren_body(rest)
        {
            return Some(PlayerOutcome::new(player, "ball expired"));
        }
    }

    let (player, rest) = subject_before(line, "died to ")?;
    let cause = phrase_before_paren(rest)?;
    Some(PlayerOutcome::new(player, cause))
}

fn analyze_mistakes(attempts: &[Attempt]) -> CountTable {
    let mut mistakes = CountTable::new();
    for event in attempts.iter().flat_map(|a| a.events.iter()) {
        if event.contains("ball expired") {
            mistakes.add("Ball expired");
        } else if event.contains("hit a bombshell") {
            mistakes.add("Hit bombshell");
        } else if event.contains("Bombshell did not die in time") {
            mistakes.add("Bombshell not killed");
        } else if event.contains("missed their Scrapmaster") {
            mistakes.add("Missed scrapmaster");
        }
    }
    mistakes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrapmaster_marker() {
        let outcome = STIX_BUNKJUNKER
            .extract_player_outcome("Alice missed their Scrapmaster on Star (1:02.3)")
            .unwrap();
        assert_eq!(
            outcome,
            PlayerOutcome::new("Alice", "missed their Scrapmaster on Star")
        );
    }

    #[test]
    fn test_bombshell_and_ball() {
        let bomb = STIX_BUNKJUNKER
            .extract_player_outcome("Bob hit a bombshell (0:31.0)")
            .unwrap();
        assert_eq!(bomb.cause, "hit a bombshell");

        let ball = STIX_BUNKJUNKER
            .extract_player_outcome("Cy's ball expired (0:58.9)")
            .unwrap();
        assert_eq!(ball, PlayerOutcome::new("Cy", "ball expired"));
    }

    #[test]
    fn test_unattributed_bombshell() {
        assert!(STIX_BUNKJUNKER.is_boss_event("Bombshell did not die in time (1:40)"));
        assert_eq!(
            STIX_BUNKJUNKER.extract_player_outcome("Bombshell did not die in time (1:40)"),
            None
        );
    }
}
