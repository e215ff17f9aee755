//! Boss registry and content-based detection
//!
//! The registry is an explicit value built once by the caller and handed to
//! the pipeline by reference. Registration order is detection priority.

use phf::phf_map;
use tracing::debug;

use super::error::BossError;
use super::gallywix::GALLYWIX;
use super::mug_zee::MUG_ZEE;
use super::nexus_king::NEXUS_KING;
use super::profile::{BossId, BossProfile};
use super::stix_bunkjunker::STIX_BUNKJUNKER;

/// Names accepted by `--boss`, lowercased.
static BOSS_SLUGS: phf::Map<&'static str, BossId> = phf_map! {
    "nexus-king" => BossId::NexusKing,
    "nexusking" => BossId::NexusKing,
    "gallywix" => BossId::Gallywix,
    "mugzee" => BossId::MugZee,
    "mug'zee" => BossId::MugZee,
    "stix" => BossId::StixBunkjunker,
    "stix-bunkjunker" => BossId::StixBunkjunker,
};

static BUILTIN_PROFILES: [&BossProfile; 4] =
    [&NEXUS_KING, &GALLYWIX, &MUG_ZEE, &STIX_BUNKJUNKER];

#[derive(Debug, Clone)]
pub struct BossRegistry {
    profiles: Vec<&'static BossProfile>,
}

impl Default for BossRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BossRegistry {
    /// Every profile shipped with the crate, current tier first.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PROFILES.to_vec())
    }

    pub fn new(profiles: Vec<&'static BossProfile>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &[&'static BossProfile] {
        &self.profiles
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.name).collect()
    }

    fn known(&self) -> String {
        self.names().join(", ")
    }

    /// First registered profile whose signature appears anywhere in the
    /// transcript (case-insensitive).
    pub fn detect(&self, content: &str) -> Result<&'static BossProfile, BossError> {
        let content_lower = content.to_lowercase();
        let found = self
            .profiles
            .iter()
            .copied()
            .find(|profile| profile.matches_content(&content_lower));

        match found {
            Some(profile) => {
                debug!(boss = profile.name, "detected boss from transcript content");
                Ok(profile)
            }
            None => Err(BossError::NotDetected {
                known: self.known(),
            }),
        }
    }

    /// Profile for a user-supplied slug or display name.
    pub fn by_slug(&self, slug: &str) -> Result<&'static BossProfile, BossError> {
        let key = slug.trim().to_lowercase();
        BOSS_SLUGS
            .get(key.as_str())
            .and_then(|id| self.profiles.iter().copied().find(|p| p.id == *id))
            .or_else(|| {
                self.profiles
                    .iter()
                    .copied()
                    .find(|p| p.name.to_lowercase() == key)
            })
            .ok_or_else(|| BossError::UnknownSlug {
                slug: slug.to_string(),
                known: self.known(),
            })
    }

    /// Explicit choice wins over detection.
    pub fn select(
        &self,
        content: &str,
        boss_override: Option<&str>,
    ) -> Result<&'static BossProfile, BossError> {
        match boss_override {
            Some(slug) => self.by_slug(slug),
            None => self.detect(content),
        }
    }
}
