//! Error types for the matching engine

use thiserror::Error;

/// Errors surfaced by the color matching engine.
///
/// Unknown user ids are deliberately not an error; wardrobe lookups for
/// them return empty results instead.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The uploaded bytes could not be decoded as an image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A request carried a missing or invalid field
    #[error("{0}")]
    Validation(String),
}

impl MatchError {
    pub fn validation(msg: impl Into<String>) -> Self {
        MatchError::Validation(msg.into())
    }
}
