use super::CountTable;
use crate::bosses::BossProfile;
use crate::transcript::Attempt;

/// Mechanic failures nobody in particular is blamed for. The rules are
/// boss-specific and live on the profile.
pub fn analyze_non_player_mistakes(boss: &BossProfile, attempts: &[Attempt]) -> CountTable {
    boss.analyze_non_player_mistakes(attempts)
}

pub fn render_non_player_mistakes(mistakes: &CountTable) -> String {
    if mistakes.is_empty() {
        return "No non-player mistakes found.\n".to_string();
    }

    let mut lines = vec![
        "Non-Player Mistakes Summary:".to_string(),
        format!("Total non-player mistakes: {}", mistakes.total()),
        String::new(),
    ];
    for (label, count) in mistakes.sorted_desc() {
        lines.push(format!("{label}: {count} times"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
