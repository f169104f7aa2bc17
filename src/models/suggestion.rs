//! Suggestion and outfit models

use serde::Serialize;

use super::{Category, ClothingItem};

/// A single pairing suggestion shown to the user. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
}

impl Suggestion {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One selected piece of an assembled outfit
#[derive(Debug, Clone, Serialize)]
pub struct OutfitPiece {
    pub category: Category,
    pub item: ClothingItem,
}

/// An assembled outfit: at most one item per selected category, in
/// category priority order.
#[derive(Debug, Clone, Serialize)]
pub struct Outfit {
    pub pieces: Vec<OutfitPiece>,
    /// Number of pieces; kept as an explicit completeness score
    pub score: usize,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
