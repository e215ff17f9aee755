//! Error types for boss selection

use thiserror::Error;

/// Errors while choosing the boss profile for a transcript
#[derive(Debug, Error)]
pub enum BossError {
    #[error("could not detect boss from transcript content; known bosses: {known}")]
    NotDetected { known: String },

    #[error("unknown boss '{slug}'; known bosses: {known}")]
    UnknownSlug { slug: String, known: String },
}
