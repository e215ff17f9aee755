//! Mug'Zee (previous tier)

use super::profile::{BossId, BossProfile, PlayerOutcome};
use crate::analysis::CountTable;
use crate::scan::{phrase_before_paren, subject_before};
use crate::transcript::Attempt;

pub static MUG_ZEE: BossProfile = BossProfile {
    id: BossId::MugZee,
    name: "Mug'Zee",
    slug: "mugzee",
    detection_patterns: &["mug'zee"],
    header_marker: "Mug'Zee #",
    event_markers: &[
        "died to",
        "was not soaked",
        "was soaked by fewer than",
        "Boss enraged",
        "Goon enraged",
        "No mistakes found",
    ],
    mechanics: &[
        "Unstable Cluster Bomb",
        "Goblin-Guided Rocket",
        "Boss enrage",
        "Goon enrage",
    ],
    death_causes: &[
        "Frostshatter Spear",
        "Stormfury stun",
        "Goon's frontal",
        "Molten Golden Knuckles frontal",
        "electrocution line",
        "popping a mine",
    ],
    non_player_mistakes: &[
        "Unstable Cluster Bomb not soaked",
        "Goblin-Guided Rocket under-soaked",
        "Boss enrage",
        "Goon enrage",
        "popping mine",
    ],
    tally_columns: &[],
    extract_outcome,
    analyze_mistakes,
};

fn extract_outcome(line: &str) -> Option<PlayerOutcome> {
    let (player, rest) = subject_before(line, "died to ")?;
    let cause = phrase_before_paren(rest)?;
    Some(PlayerOutcome::new(player, cause))
}

fn analyze_mistakes(attempts: &[Attempt]) -> CountTable {
    let mut mistakes = CountTable::new();
    for event in attempts.iter().flat_map(|a| a.events.iter()) {
        if event.contains("was not soaked") {
            mistakes.add("Cluster bomb not soaked");
        } else if event.contains("was soaked by fewer than") {
            mistakes.add("Rocket under-soaked");
        } else if event.contains("Boss enraged") {
            mistakes.add("Boss enrage");
        } else if event.contains("Goon enraged") {
            mistakes.add("Goon enrage");
        }
    }
    mistakes
}
