//! Static color tables and in-memory wardrobe storage

mod color_tables;
mod wardrobe;

pub use color_tables::ColorTables;
pub use wardrobe::{MemoryWardrobe, WardrobeStore};
