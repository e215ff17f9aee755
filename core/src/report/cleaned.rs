use crate::analysis::{
    analyze_non_player_mistakes, analyze_player_stats, render_non_player_mistakes,
    render_player_stats,
};
use crate::bosses::BossProfile;
use crate::transcript::Attempt;

pub const SECTION_RULE_WIDTH: usize = 50;

/// The cleaned text report: renumbered pulls, then the player and
/// non-player summaries below a `=` rule.
pub fn render_cleaned_report(attempts: &[Attempt], boss: &BossProfile) -> String {
    let mut out = String::new();

    for attempt in attempts {
        out.push_str(&attempt.display_header());
        out.push('\n');
        for event in &attempt.events {
            out.push_str("  ");
            out.push_str(event);
            out.push('\n');
        }
        out.push_str(&attempt.timestamp_line);
        out.push_str("\n\n");
    }

    out.push('\n');
    out.push_str(&"=".repeat(SECTION_RULE_WIDTH));
    out.push_str("\n\n");

    out.push_str(&render_player_stats(&analyze_player_stats(attempts)));
    out.push_str(&render_non_player_mistakes(&analyze_non_player_mistakes(
        boss, attempts,
    )));
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::bosses::MUG_ZEE;

    #[test]
    fn test_render_single_attempt() {
        let timestamp = NaiveDate::from_ymd_opt(2025, 5, 24)
            .unwrap()
            .and_hms_opt(18, 40, 0)
            .unwrap();
        let attempt = Attempt::new(
            1,
            "Mug'Zee #4   (2:41)".to_string(),
            vec!["Alice died to Fire (0:45.2)".to_string()],
            "Today at 6:40 PM".to_string(),
            timestamp,
            &MUG_ZEE,
        );

        let report = render_cleaned_report(&[attempt], &MUG_ZEE);
        let expected = format!(
            "Mug'Zee #1   (2:41)\n  Alice died to Fire (0:45.2)\nToday at 6:40 PM\n\n\n{}\n\n\
             Player Statistics:\n\nAlice (Total deaths: 1)\n  Fire x1\n\n\
             No non-player mistakes found.\n",
            "=".repeat(50)
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_without_attempts() {
        let report = render_cleaned_report(&[], &MUG_ZEE);
        assert!(report.starts_with(&format!("\n{}\n\n", "=".repeat(50))));
        assert!(report.ends_with("No non-player mistakes found.\n"));
    }
}
