//! Attempt segmentation
//!
//! Walks normalized lines in file order and cuts them into pulls. A pull
//! opens on a header line and is closed by the first timestamp that follows
//! it; a pull that never sees a timestamp is dropped when the next header
//! (or end of input) arrives.

use chrono::NaiveDateTime;
use tracing::debug;

use super::attempt::Attempt;
use super::timestamp::TimestampParser;
use crate::bosses::BossProfile;
use crate::scan::{pull_number, strip_part_suffix};


/// Counters gathered while segmenting, reported by the CLI at debug level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    pub headers: usize,
    /// Headers repeating the open pull's number (paginated bot messages)
    pub duplicate_headers: usize,
    /// Pulls dropped because no timestamp closed them
    pub malformed_dropped: usize,
    /// Timestamped pulls dropped because they carried no events
    pub empty_dropped: usize,
}

#[derive(Debug, Clone)]
pub struct SegmentReport {
    /// Pulls in file order
    pub attempts: Vec<Attempt>,
    pub stats: SegmentStats,
}

#[derive(Debug)]
struct OpenAttempt {
    pull: u32,
    header: String,
    events: Vec<String>,
}

#[derive(Debug)]
enum State {
    Idle,
    OpenNoTimestamp(OpenAttempt),
    OpenTimestamped {
        open: OpenAttempt,
        timestamp_line: String,
        timestamp: NaiveDateTime,
    },
}

impl State {
    fn open_pull(&self) -> Option<u32> {
        match self {
            State::Idle => None,
            State::OpenNoTimestamp(open) | State::OpenTimestamped { open, .. } => Some(open.pull),
        }
    }
}

pub struct Segmenter<'a> {
    boss: &'static BossProfile,
    timestamps: &'a TimestampParser,
}

impl<'a> Segmenter<'a> {
    pub fn new(boss: &'static BossProfile, timestamps: &'a TimestampParser) -> Self {
        Self { boss, timestamps }
    }

    /// Segments already-normalized lines.
    pub fn segment<I, S>(&self, lines: I) -> SegmentReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = SegmentStats::default();
        let mut emitted = Vec::new();
        let mut state = State::Idle;

        for line in lines {
            let line = line.as_ref();
            state = self.step(state, line, &mut emitted, &mut stats);
        }
        self.close(state, &mut emitted, &mut stats);

        let before = emitted.len();
        emitted.retain(|attempt: &Attempt| !attempt.events.is_empty());
        stats.empty_dropped = before - emitted.len();

        debug!(
            boss = self.boss.name,
            attempts = emitted.len(),
            headers = stats.headers,
            duplicate_headers = stats.duplicate_headers,
            malformed_dropped = stats.malformed_dropped,
            empty_dropped = stats.empty_dropped,
            "Segmented transcript"
        );

        SegmentReport {
            attempts: emitted,
            stats,
        }
    }

    fn step(
        &self,
        state: State,
        line: &str,
        emitted: &mut Vec<Attempt>,
        stats: &mut SegmentStats,
    ) -> State {
        if self.boss.is_attempt_header(line) {
            let Some(pull) = pull_number(line) else {
                debug!(line, "Header without pull number, ignoring");
                return state;
            };
            stats.headers += 1;

            if state.open_pull() == Some(pull) {
                stats.duplicate_headers += 1;
                return state;
            }
            self.close(state, emitted, stats);
            return State::OpenNoTimestamp(OpenAttempt {
                pull,
                header: line.to_string(),
                events: Vec::new(),
            });
        }

        match state {
            State::Idle => State::Idle,
            State::OpenNoTimestamp(mut open) => {
                if let Some(timestamp) = self.timestamps.parse(line) {
                    State::OpenTimestamped {
                        open,
                        timestamp_line: line.to_string(),
                        timestamp,
                    }
                } else {
                    self.collect_event(&mut open, line);
                    State::OpenNoTimestamp(open)
                }
            }
            State::OpenTimestamped {
                mut open,
                timestamp_line,
                timestamp,
            } => {
                // later timestamps belong to nothing
                if !self.timestamps.is_timestamp(line) {
                    self.collect_event(&mut open, line);
                }
                State::OpenTimestamped {
                    open,
                    timestamp_line,
                    timestamp,
                }
            }
        }
    }

    fn collect_event(&self, open: &mut OpenAttempt, line: &str) {
        if self.boss.is_boss_event(line) {
            open.events.push(line.to_string());
        }
    }

    fn close(&self, state: State, emitted: &mut Vec<Attempt>, stats: &mut SegmentStats) {
        match state {
            State::Idle => {}
            State::OpenNoTimestamp(open) => {
                stats.malformed_dropped += 1;
                debug!(pull = open.pull, header = %open.header, "Dropping pull without timestamp");
            }
            State::OpenTimestamped {
                open,
                timestamp_line,
                timestamp,
            } => {
                emitted.push(Attempt::new(
                    open.pull,
                    strip_part_suffix(&open.header),
                    open.events,
                    timestamp_line,
                    timestamp,
                    self.boss,
                ));
            }
        }
    }
}
