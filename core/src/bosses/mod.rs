mod error;
mod gallywix;
mod mug_zee;
mod nexus_king;
mod profile;
mod registry;
mod stix_bunkjunker;

#[cfg(test)]
mod tests;

pub use error::BossError;
pub use gallywix::GALLYWIX;
pub use mug_zee::MUG_ZEE;
pub use nexus_king::NEXUS_KING;
pub use profile::{
    BossId, BossProfile, MistakeAnalyzer, OutcomeExtractor, PlayerOutcome, TallyColumn,
};
pub use registry::BossRegistry;
pub use stix_bunkjunker::STIX_BUNKJUNKER;

pub(crate) use stix_bunkjunker::SCRAPMASTER_MARKER_PHRASE;
