//! Gallywix (previous tier)

use memchr::memmem;

use super::profile::{BossId, BossProfile, PlayerOutcome, TallyColumn};
use crate::analysis::CountTable;
use crate::scan::{
    has_paren_body, leading_number, leading_word, phrase_before_paren, skip_whitespace1,
    subject_before,
};
use crate::transcript::Attempt;

pub static GALLYWIX: BossProfile = BossProfile {
    id: BossId::Gallywix,
    name: "Gallywix",
    slug: "gallywix",
    detection_patterns: &["gallywix"],
    header_marker: "Gallywix #",
    event_markers: &[
        "died to",
        "was hit by",
        "died with",
        "was soaked by fewer than",
        "was enraged",
        "cast went off",
        "No mistakes found",
    ],
    mechanics: &[
        "Giga Blast",
        "Giga Blast Residue",
        "Overloaded Rockets",
        "Bigger Badder Bomb Blast",
        "Bad Belated Boom",
        "Cuff Bomb",
        "boss landing",
        "Sabotage Zone",
        "clicking a dud",
        "boss aggro",
        "Wrenchmonger enrage",
        "Sentry Shock Barrage",
        "Technicians' Juice It",
        "Haywire Workshop",
        "Mayhem Rockets",
    ],
    death_causes: &[
        "Giga Blast",
        "Giga Blast Residue",
        "Overloaded Rockets",
        "Bigger Badder Bomb Blast",
        "Bad Belated Boom",
        "Cuff Bomb",
        "boss landing",
        "Sabotage Zone",
        "clicking a dud",
        "boss aggro",
        "Wrenchmonger enrage",
        "Sentry Shock Barrage",
        "Haywire Workshop",
        "Mayhem Rockets",
    ],
    non_player_mistakes: &[
        "Canister under-soaked",
        "Wrenchmonger enrage",
        "Sentry Shock Barrage",
        "Technicians' Juice It",
        "No mistakes found",
    ],
    tally_columns: &[
        TallyColumn {
            header: "Hit_By_Mistakes",
            needle: "hit by",
        },
        TallyColumn {
            header: "Died_With_Mistakes",
            needle: "died with",
        },
        TallyColumn {
            header: "Enraged_Add_Deaths",
            needle: "enraged add",
        },
    ],
    extract_outcome,
    analyze_mistakes,
};

const UNDER_SOAKED: &str = "was soaked by fewer than";

fn extract_outcome(line: &str) -> Option<PlayerOutcome> {
    let attributed = [
        ("died to ", None),
        ("was hit by ", Some("hit by")),
        ("died with ", Some("died with")),
    ];
    for (marker, prefix) in attributed {
        if let Some((player, rest)) = subject_before(line, marker)
            && let Some(cause) = phrase_before_paren(rest)
        {
            let label = match prefix {
                Some(prefix) => format!("{prefix} {cause}"),
                None => cause.to_string(),
            };
            return Some(PlayerOutcome::new(player, label));
        }
    }

    if line.contains("was enraged") && line.contains("killed") {
        return enraged_add_victim(line)
            .map(|player| PlayerOutcome::new(player, "killed by enraged add"));
    }

    None
}

/// `[-] Wrenchmonger 2 was enraged and killed Bob (2:10.3)`
fn enraged_add_victim(line: &str) -> Option<&str> {
    let start = memmem::find(line.as_bytes(), b"[-]")?;
    let rest = skip_whitespace1(&line[start + 3..])?;
    let (_, rest) = leading_word(rest)?;
    let rest = skip_whitespace1(rest)?;
    let (_, rest) = leading_number(rest)?;

    memmem::find_iter(rest.as_bytes(), b"killed").find_map(|pos| {
        let after = skip_whitespace1(&rest[pos + "killed".len()..])?;
        let (victim, after) = leading_word(after)?;
        has_paren_body(skip_whitespace1(after)?).then_some(victim)
    })
}

/// `DPS Canister #2 was soaked by fewer than ...` -> `DPS Canister #2`
fn canister_instance(line: &str) -> Option<String> {
    let pos = memmem::find(line.as_bytes(), UNDER_SOAKED.as_bytes())?;
    let before = &line[..pos];
    let trimmed = before.trim_end();
    if trimmed.len() == before.len() {
        return None;
    }

    let digits = trimmed
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let number = &trimmed[trimmed.len() - digits..];
    let before_number = trimmed[..trimmed.len() - digits].strip_suffix('#')?;
    let before_hash = before_number.trim_end();
    if before_hash.len() == before_number.len() {
        return None;
    }
    let before_canister = before_hash.strip_suffix("Canister")?;
    let kind_part = before_canister.trim_end();
    if kind_part.len() == before_canister.len() {
        return None;
    }
    let kind = ["DPS", "Heal"]
        .into_iter()
        .find(|kind| kind_part.ends_with(kind))?;

    Some(format!("{kind} Canister #{number}"))
}

fn analyze_mistakes(attempts: &[Attempt]) -> CountTable {
    let mut mistakes = CountTable::new();
    let mut canisters = CountTable::new();

    for event in attempts.iter().flat_map(|a| a.events.iter()) {
        if event.contains(UNDER_SOAKED) {
            if let Some(canister) = canister_instance(event) {
                canisters.add(&canister);
            }
            mistakes.add("Canister under-soaked");
        } else if event.contains("was enraged") && event.contains("killed") {
            mistakes.add("Wrenchmonger enrage");
        } else if event.contains("Shock Barrage cast went off") {
            mistakes.add("Sentry Shock Barrage");
        } else if event.contains("Juice It cast(s) went off") {
            mistakes.add("Technicians' Juice It");
        }
    }

    for (canister, count) in canisters.iter() {
        mistakes.set(&format!("{canister} under-soaked"), count);
    }

    mistakes
}
