use super::PlayerStats;
use crate::transcript::Attempt;

/// Fold every attributable event into `player -> cause -> count`. Lines the
/// owning profile can't attribute are skipped.
pub fn analyze_player_stats(attempts: &[Attempt]) -> PlayerStats {
    let mut stats = PlayerStats::new();
    for attempt in attempts {
        for outcome in attempt.outcomes() {
            stats.record(&outcome.player, &outcome.cause);
        }
    }
    stats
}

pub fn render_player_stats(stats: &PlayerStats) -> String {
    let mut lines = vec!["Player Statistics:".to_string(), String::new()];

    for (player, causes) in stats.sorted_desc() {
        let total = causes.total();
        if total == 0 {
            continue;
        }
        let cause_list: Vec<String> = causes
            .sorted_desc()
            .into_iter()
            .map(|(cause, count)| format!("{cause} x{count}"))
            .collect();
        lines.push(format!("{player} (Total deaths: {total})"));
        lines.push(format!("  {}", cause_list.join(", ")));
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
