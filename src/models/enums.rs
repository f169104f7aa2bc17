//! Enums for the outfit matcher

use serde::{Deserialize, Serialize};

/// Clothing categories, declared in outfit priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl Category {
    /// All categories in outfit priority order
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Dresses => "dresses",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tops" | "top" => Some(Category::Tops),
            "bottoms" | "bottom" => Some(Category::Bottoms),
            "dresses" | "dress" => Some(Category::Dresses),
            "outerwear" => Some(Category::Outerwear),
            "shoes" | "shoe" => Some(Category::Shoes),
            "accessories" | "accessory" => Some(Category::Accessories),
            _ => None,
        }
    }
}

/// Color harmony relationships, declared in suggestion display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    Complementary,
    Analogous,
    Triadic,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 3] = [
        HarmonyKind::Complementary,
        HarmonyKind::Analogous,
        HarmonyKind::Triadic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Triadic => "triadic",
        }
    }

    /// Capitalized name for suggestion titles
    pub fn title(&self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "Complementary",
            HarmonyKind::Analogous => "Analogous",
            HarmonyKind::Triadic => "Triadic",
        }
    }
}

/// Seasonal palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" | "fall" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

/// Style moods mapped to color sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Professional,
    Casual,
    Elegant,
    Playful,
    Romantic,
    Bold,
    Earthy,
    Minimalist,
}

impl Style {
    pub const ALL: [Style; 8] = [
        Style::Professional,
        Style::Casual,
        Style::Elegant,
        Style::Playful,
        Style::Romantic,
        Style::Bold,
        Style::Earthy,
        Style::Minimalist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Professional => "professional",
            Style::Casual => "casual",
            Style::Elegant => "elegant",
            Style::Playful => "playful",
            Style::Romantic => "romantic",
            Style::Bold => "bold",
            Style::Earthy => "earthy",
            Style::Minimalist => "minimalist",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Some(Style::Professional),
            "casual" => Some(Style::Casual),
            "elegant" => Some(Style::Elegant),
            "playful" => Some(Style::Playful),
            "romantic" => Some(Style::Romantic),
            "bold" => Some(Style::Bold),
            "earthy" => Some(Style::Earthy),
            "minimalist" => Some(Style::Minimalist),
            _ => None,
        }
    }
}

/// Perceived color temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}
