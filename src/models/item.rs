//! Clothing item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Rgb};

/// A clothing item stored in a wardrobe. Items are immutable once created
/// and live for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Display name, e.g. "Blue Polo Shirt"
    pub name: String,
    /// Clothing category
    pub category: Category,
    /// Nearest named color for the dominant color
    pub color: String,
    /// Dominant color extracted from the uploaded photo
    pub rgb: Rgb,
    /// Owning user id
    pub owner: String,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
}

impl ClothingItem {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        color: impl Into<String>,
        rgb: Rgb,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            color: color.into(),
            rgb,
            owner: owner.into(),
            uploaded_at: Utc::now(),
        }
    }
}
