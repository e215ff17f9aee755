//! Line cleanup ahead of segmentation
//!
//! Chat bots decorate their output with `:emoji:` glyph markers and an
//! "experimental feature" banner. Both are noise for segmentation; the glyph
//! payload only matters for bosses whose callouts name a raid marker.

use memchr::memchr;

use crate::bosses::{BossId, BossProfile, SCRAPMASTER_MARKER_PHRASE};

pub const EXPERIMENTAL_BANNER: &str = ":warning: Experimental :warning:";

#[derive(Debug, Clone, Copy, Default)]
pub struct LineNormalizer {
    /// Phrases after which a glyph is kept as a plain word instead of removed
    splice_after: &'static [&'static str],
}

impl LineNormalizer {
    /// Strips every glyph.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn for_boss(boss: &BossProfile) -> Self {
        let splice_after: &'static [&'static str] = match boss.id {
            BossId::StixBunkjunker => &[SCRAPMASTER_MARKER_PHRASE],
            BossId::NexusKing | BossId::Gallywix | BossId::MugZee => &[],
        };
        Self { splice_after }
    }

    /// Cleaned line, or `None` if the line is a banner or nothing survives.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        if raw.contains(EXPERIMENTAL_BANNER) {
            return None;
        }

        let stripped = self.strip_glyphs(raw);
        let trimmed = stripped.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn strip_glyphs(&self, line: &str) -> String {
        let bytes = line.as_bytes();
        let mut out = String::with_capacity(line.len());
        let mut cursor = 0;

        while let Some(offset) = memchr(b':', &bytes[cursor..]) {
            let open = cursor + offset;
            out.push_str(&line[cursor..open]);

            let follows_digit = open > 0 && bytes[open - 1].is_ascii_digit();
            let Some(token) = glyph_token(&line[open + 1..], follows_digit) else {
                out.push(':');
                cursor = open + 1;
                continue;
            };
            cursor = open + token.len() + 2;

            if self.splices_after(&out) {
                let kept = out.trim_end().len();
                out.truncate(kept);
                out.push(' ');
                out.push_str(token);
            } else {
                cursor += line[cursor..].len() - line[cursor..].trim_start().len();
            }
        }

        out.push_str(&line[cursor..]);
        out
    }

    fn splices_after(&self, before: &str) -> bool {
        let before = before.trim_end();
        self.splice_after
            .iter()
            .any(|phrase| before.ends_with(phrase))
    }
}

/// Payload of a glyph whose opening colon was just consumed: runs up to the
/// closing colon and has no whitespace. A numeric payload right after a digit
/// is clock text (the `02` of `[00:02:15]`), not a glyph like `:100:`.
fn glyph_token(after_colon: &str, follows_digit: bool) -> Option<&str> {
    let close = memchr(b':', after_colon.as_bytes())?;
    let token = &after_colon[..close];
    if token.is_empty() {
        return None;
    }
    if follows_digit && token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.chars().any(char::is_whitespace) {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bosses::{MUG_ZEE, STIX_BUNKJUNKER};

    #[test]
    fn test_banner_lines_are_dropped() {
        let normalizer = LineNormalizer::plain();
        assert_eq!(
            normalizer.normalize(":warning: Experimental :warning: this report may be wrong"),
            None
        );
    }

    #[test]
    fn test_glyphs_are_stripped() {
        let normalizer = LineNormalizer::plain();
        assert_eq!(
            normalizer.normalize(":skull: :skull: Alice died to Fire (0:45.2)"),
            Some("Alice died to Fire (0:45.2)".to_string())
        );
        assert_eq!(
            normalizer.normalize("  Bob :x:died to Spear (1:02)  "),
            Some("Bob died to Spear (1:02)".to_string())
        );
        assert_eq!(normalizer.normalize(":skull::fire:"), None);
        assert_eq!(normalizer.normalize("   "), None);
    }

    #[test]
    fn test_symbol_and_number_glyphs_are_stripped() {
        let normalizer = LineNormalizer::plain();
        assert_eq!(
            normalizer.normalize(":+1: :100: Boss enraged (5:00.0)"),
            Some("Boss enraged (5:00.0)".to_string())
        );
        assert_eq!(
            normalizer.normalize("Alice died to Fire (0:45.2) :-1:"),
            Some("Alice died to Fire (0:45.2)".to_string())
        );
    }

    #[test]
    fn test_clock_text_survives() {
        let normalizer = LineNormalizer::plain();
        for line in [
            "[00:02:15]",
            "5/24/2025 6:40 PM",
            "Today at 6:40 PM",
            "[18:40:05.250]",
            "Mug'Zee #3   (2:41)",
        ] {
            assert_eq!(normalizer.normalize(line).as_deref(), Some(line));
        }
        assert_eq!(
            normalizer.normalize("Today at 6:40 PM :check:"),
            Some("Today at 6:40 PM".to_string())
        );
    }

    #[test]
    fn test_scrapmaster_marker_is_spliced() {
        let normalizer = LineNormalizer::for_boss(&STIX_BUNKJUNKER);
        assert_eq!(
            normalizer.normalize(":bomb: Alice missed their Scrapmaster on :Star: (1:02)"),
            Some("Alice missed their Scrapmaster on Star (1:02)".to_string())
        );

        // other bosses keep the generic rule
        let plain = LineNormalizer::for_boss(&MUG_ZEE);
        assert_eq!(
            plain.normalize("Alice missed their Scrapmaster on :Star: (1:02)"),
            Some("Alice missed their Scrapmaster on (1:02)".to_string())
        );
    }
}
