//! Small byte-level scanners shared by the transcript and boss modules
//!
//! Transcript lines are short and loosely formatted, so matching is done with
//! `memchr` lookups and a handful of anchored helpers instead of a general
//! pattern engine.

use memchr::memmem;
use memchr::{memchr, memchr_iter};

/// Word characters in the transcript sense: letters, digits and underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Leading run of ASCII digits, parsed. `None` if there are no digits or the
/// value overflows.
pub(crate) fn leading_number(input: &str) -> Option<(u32, &str)> {
    let len = input.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value = input[..len].parse::<u32>().ok()?;
    Some((value, &input[len..]))
}

/// Leading run of ASCII digits whose length lies in `min..=max`.
pub(crate) fn digits_between(input: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let len = input.bytes().take_while(u8::is_ascii_digit).count();
    if len < min || len > max {
        return None;
    }
    leading_number(input)
}

/// Leading run of word characters.
pub(crate) fn leading_word(input: &str) -> Option<(&str, &str)> {
    let len: usize = input
        .chars()
        .take_while(|c| is_word_char(*c))
        .map(char::len_utf8)
        .sum();
    if len == 0 {
        return None;
    }
    Some((&input[..len], &input[len..]))
}

/// Strips at least one leading whitespace character.
pub(crate) fn skip_whitespace1(input: &str) -> Option<&str> {
    let trimmed = input.trim_start();
    (trimmed.len() < input.len()).then_some(trimmed)
}

/// `(\w+)\s+<marker>`: the word right before the first occurrence of `marker`
/// that is separated from it by whitespace, plus the text after the marker.
pub(crate) fn subject_before<'a>(line: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let finder = memmem::Finder::new(marker.as_bytes());
    for pos in finder.find_iter(line.as_bytes()) {
        let before = &line[..pos];
        let trimmed = before.trim_end();
        if trimmed.len() == before.len() {
            continue;
        }
        let start = trimmed
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_word_char(*c))
            .last()
            .map(|(idx, _)| idx);
        if let Some(start) = start {
            return Some((&trimmed[start..], &line[pos + marker.len()..]));
        }
    }
    None
}

/// `(.*?)\s+\(([^)]+)\)`: the shortest phrase followed by whitespace and a
/// non-empty parenthesised suffix such as a fight clock `(1:29.7)`.
pub(crate) fn phrase_before_paren(rest: &str) -> Option<&str> {
    for open in memchr_iter(b'(', rest.as_bytes()) {
        let phrase = &rest[..open];
        let trimmed = phrase.trim_end();
        if trimmed.len() == phrase.len() {
            continue;
        }
        if has_paren_body(&rest[open..]) {
            return Some(trimmed);
        }
    }
    None
}

/// `\([^)]+\)` anchored at the start of `input`.
pub(crate) fn has_paren_body(input: &str) -> bool {
    let Some(inner) = input.strip_prefix('(') else {
        return false;
    };
    matches!(memchr(b')', inner.as_bytes()), Some(close) if close > 0)
}

/// Pull number: the first integer directly following a `#`.
pub fn pull_number(line: &str) -> Option<u32> {
    memchr_iter(b'#', line.as_bytes()).find_map(|hash| leading_number(&line[hash + 1..]).map(|(n, _)| n))
}

/// Attempt duration in seconds from the first `(M:SS)` group of a header.
pub fn parse_attempt_duration(header: &str) -> Option<u32> {
    memchr_iter(b'(', header.as_bytes()).find_map(|open| {
        let (minutes, rest) = leading_number(&header[open + 1..])?;
        let (seconds, rest) = leading_number(rest.strip_prefix(':')?)?;
        if !rest.starts_with(')') {
            return None;
        }
        minutes.checked_mul(60)?.checked_add(seconds)
    })
}

/// Removes every `\s*-\s*Part\s+\d+` run, the marker a chat bot leaves when it
/// splits one pull across several messages.
pub fn strip_part_suffix(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    let mut cursor = 0;

    for dash in memchr_iter(b'-', header.as_bytes()) {
        if dash < cursor {
            continue;
        }
        let Some(after_part) = header[dash + 1..].trim_start().strip_prefix("Part") else {
            continue;
        };
        let Some(number) = skip_whitespace1(after_part) else {
            continue;
        };
        let digit_len = number.bytes().take_while(u8::is_ascii_digit).count();
        if digit_len == 0 {
            continue;
        }

        let keep_until = cursor + header[cursor..dash].trim_end().len();
        out.push_str(&header[cursor..keep_until]);
        cursor = header.len() - number.len() + digit_len;
    }

    out.push_str(&header[cursor..]);
    out
}

/// `M:SS` rendering used by headers and exports.
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_before_skips_unseparated_marker() {
        let line = "Xdied to nothing; Alice died to Fire (0:45)";
        let (player, rest) = subject_before(line, "died to ").unwrap();
        assert_eq!(player, "Alice");
        assert_eq!(phrase_before_paren(rest), Some("Fire"));
    }

    #[test]
    fn test_phrase_before_paren_is_lazy() {
        assert_eq!(
            phrase_before_paren("Molten Golden Knuckles frontal (2:01.4) (again)"),
            Some("Molten Golden Knuckles frontal")
        );
        assert_eq!(phrase_before_paren("Fire ()"), None);
        assert_eq!(phrase_before_paren("Fire(0:45)"), None);
    }

    #[test]
    fn test_pull_number() {
        assert_eq!(pull_number("Nexus-King #12   (4:33)"), Some(12));
        assert_eq!(pull_number("Nexus-King # (4:33)"), None);
        assert_eq!(pull_number("#x then #3"), Some(3));
    }

    #[test]
    fn test_parse_attempt_duration() {
        assert_eq!(parse_attempt_duration("Gallywix #4 (4:33)"), Some(273));
        assert_eq!(parse_attempt_duration("Gallywix #4 (note) (0:07)"), Some(7));
        assert_eq!(parse_attempt_duration("Gallywix #4"), None);
    }

    #[test]
    fn test_strip_part_suffix() {
        assert_eq!(strip_part_suffix("Boss #7 (1:02) - Part 2"), "Boss #7 (1:02)");
        assert_eq!(strip_part_suffix("Boss #7 (1:02)-Part  13 tail"), "Boss #7 (1:02) tail");
        assert_eq!(strip_part_suffix("Nexus-King #7 (1:02)"), "Nexus-King #7 (1:02)");
        assert_eq!(strip_part_suffix("Boss #7 - Party"), "Boss #7 - Party");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(62), "1:02");
        assert_eq!(format_duration(600), "10:00");
    }
}
