//! Stats models

use serde::Serialize;

/// Entry counts for the static lookup tables, reported by the stats endpoint
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableCounts {
    pub named_colors: usize,
    pub compatibility_rules: usize,
    pub category_rules: usize,
    pub harmony_rules: usize,
    pub seasons: usize,
    pub styles: usize,
}
