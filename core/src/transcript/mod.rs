//! Transcript handling: reading, line cleanup, timestamps, and cutting the
//! text into ordered pulls.

mod attempt;
mod census;
mod error;
mod normalizer;
mod reader;
mod resequence;
mod segmenter;
mod timestamp;

pub use attempt::Attempt;
pub use census::{HeaderCensus, SessionCensus, count_headers};
pub use error::ReaderError;
pub use normalizer::{EXPERIMENTAL_BANNER, LineNormalizer};
pub use reader::Transcript;
pub use resequence::resequence;
pub use segmenter::{SegmentReport, SegmentStats, Segmenter};
pub use timestamp::{TimestampFormat, TimestampParser};
