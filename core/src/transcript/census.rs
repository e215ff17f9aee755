//! Header census
//!
//! Counts pull headers without segmenting: how many header lines a
//! transcript carries, which pull numbers they name, and how those pulls
//! spread over the dated `Log Analysis` sessions of a multi-night
//! export.

use std::collections::BTreeSet;

use memchr::memmem;

use super::reader::split_lines;
use crate::bosses::BossProfile;
use crate::scan::{has_paren_body, leading_number, skip_whitespace1};

const SESSION_MARKER: &str = "Log Analysis";
const SESSION_DASH: char = '\u{2014}';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCensus {
    /// Session date as written, e.g. `5/24/2025`
    pub date: String,
    pub pulls: BTreeSet<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCensus {
    /// Every header occurrence, duplicates included
    pub total_headers: usize,
    pub unique_pulls: BTreeSet<u32>,
    /// Sessions in first-seen order; a repeated date adds to its session
    pub sessions: Vec<SessionCensus>,
}

impl HeaderCensus {
    pub fn max_pull(&self) -> Option<u32> {
        self.unique_pulls.last().copied()
    }
}

pub fn count_headers(content: &str, boss: &BossProfile) -> HeaderCensus {
    let finder = memmem::Finder::new(boss.header_marker.as_bytes());
    let mut census = HeaderCensus::default();
    let mut current_session: Option<usize> = None;

    for line in split_lines(content) {
        if let Some(date) = session_date(line) {
            let index = match census.sessions.iter().position(|s| s.date == date) {
                Some(index) => index,
                None => {
                    census.sessions.push(SessionCensus {
                        date: date.to_string(),
                        pulls: BTreeSet::new(),
                    });
                    census.sessions.len() - 1
                }
            };
            current_session = Some(index);
        }

        let mut first_on_line = None;
        for pos in finder.find_iter(line.as_bytes()) {
            let Some(pull) = header_pull(&line[pos + boss.header_marker.len()..]) else {
                continue;
            };
            census.total_headers += 1;
            census.unique_pulls.insert(pull);
            first_on_line.get_or_insert(pull);
        }

        if let (Some(pull), Some(index)) = (first_on_line, current_session) {
            census.sessions[index].pulls.insert(pull);
        }
    }

    census
}

/// `N   (M:SS)` right after the header marker; a bare `#N` is a mention,
/// not a header.
fn header_pull(after_marker: &str) -> Option<u32> {
    let (pull, rest) = leading_number(after_marker)?;
    has_paren_body(skip_whitespace1(rest)?).then_some(pull)
}

/// Date following the dash of a `Log Analysis` session line, e.g. `5/24/2025`
fn session_date(line: &str) -> Option<&str> {
    if !line.contains(SESSION_MARKER) {
        return None;
    }
    let (_, after) = line.split_once(SESSION_DASH)?;
    let after = after.trim_start();

    let (_, rest) = leading_number(after)?;
    let (_, rest) = leading_number(rest.strip_prefix('/')?)?;
    let (_, rest) = leading_number(rest.strip_prefix('/')?)?;
    Some(&after[..after.len() - rest.len()])
}
