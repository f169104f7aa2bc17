//! Data models for the outfit matcher
//!
//! This module contains the core data structures used throughout the
//! application.

mod color;
mod enums;
mod item;
mod stats;
mod suggestion;

pub use color::{NamedColor, Rgb};
pub use enums::{Category, HarmonyKind, Season, Style, Temperature};
pub use item::ClothingItem;
pub use stats::TableCounts;
pub use suggestion::{Outfit, OutfitPiece, Suggestion};
