//! Static color lookup tables
//!
//! Read-only mappings built once at startup: named reference colors,
//! color compatibility, category compatibility, color harmony, seasonal
//! palettes, and style palettes. Lookups on unknown keys return empty
//! slices, never a silent default.

use std::collections::HashMap;

use crate::models::{Category, HarmonyKind, NamedColor, Rgb, Season, Style, TableCounts};

/// Named reference colors. Declaration order is load-bearing: nearest-color
/// ties resolve to the earliest entry.
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    // Basic colors
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("pink", (255, 192, 203)),
    // Neutrals
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("gray", (128, 128, 128)),
    ("light_gray", (211, 211, 211)),
    ("dark_gray", (64, 64, 64)),
    // Earth tones
    ("brown", (165, 42, 42)),
    ("tan", (210, 180, 140)),
    ("beige", (245, 245, 220)),
    ("cream", (255, 253, 208)),
    ("khaki", (240, 230, 140)),
    // Blues
    ("navy", (0, 0, 128)),
    ("royal_blue", (65, 105, 225)),
    ("sky_blue", (135, 206, 235)),
    ("teal", (0, 128, 128)),
    // Greens
    ("forest_green", (34, 139, 34)),
    ("olive", (128, 128, 0)),
    ("mint", (189, 252, 201)),
    // Reds
    ("maroon", (128, 0, 0)),
    ("burgundy", (128, 0, 32)),
    ("coral", (255, 127, 80)),
    // Others
    ("gold", (255, 215, 0)),
    ("silver", (192, 192, 192)),
    ("lavender", (230, 230, 250)),
];

/// Which colors go well together. Not symmetric; preserved as configured.
const COMPATIBLE_COLORS: &[(&str, &[&str])] = &[
    ("red", &["black", "white", "navy", "gray", "beige", "cream"]),
    ("blue", &["white", "gray", "beige", "black", "brown", "cream"]),
    ("green", &["brown", "black", "white", "beige", "navy"]),
    ("black", &["white", "gray", "red", "blue", "green", "beige", "pink", "yellow"]),
    ("white", &["black", "navy", "gray", "red", "blue", "green", "brown"]),
    ("navy", &["white", "beige", "gray", "red", "brown"]),
    ("gray", &["white", "black", "red", "blue", "pink", "yellow"]),
    ("brown", &["beige", "white", "green", "blue", "cream"]),
    ("beige", &["brown", "white", "blue", "green", "navy"]),
    ("pink", &["gray", "black", "white", "navy"]),
    ("yellow", &["black", "gray", "navy", "brown"]),
    ("purple", &["gray", "black", "white"]),
    ("orange", &["black", "brown", "navy", "white"]),
    ("cream", &["brown", "navy", "black", "red"]),
];

/// Which categories combine into an outfit. Not symmetric either: dresses
/// pair with shoes, but shoes only anchor against tops and bottoms.
const CATEGORY_PAIRS: &[(Category, &[Category])] = &[
    (
        Category::Tops,
        &[Category::Bottoms, Category::Outerwear, Category::Shoes, Category::Accessories],
    ),
    (
        Category::Bottoms,
        &[Category::Tops, Category::Outerwear, Category::Shoes, Category::Accessories],
    ),
    (Category::Outerwear, &[Category::Tops, Category::Bottoms]),
    (Category::Shoes, &[Category::Tops, Category::Bottoms]),
    (Category::Accessories, &[Category::Tops, Category::Bottoms]),
    (
        Category::Dresses,
        &[Category::Outerwear, Category::Shoes, Category::Accessories],
    ),
];

const COMPLEMENTARY: &[(&str, &[&str])] = &[
    ("red", &["green", "teal"]),
    ("blue", &["orange", "coral"]),
    ("yellow", &["purple", "lavender"]),
    ("green", &["red", "pink"]),
    ("orange", &["blue", "navy"]),
    ("purple", &["yellow", "gold"]),
];

const ANALOGOUS: &[(&str, &[&str])] = &[
    ("red", &["orange", "pink", "burgundy"]),
    ("blue", &["teal", "purple", "navy"]),
    ("yellow", &["orange", "gold", "cream"]),
    ("green", &["teal", "olive", "mint"]),
    ("orange", &["red", "yellow", "coral"]),
    ("purple", &["blue", "pink", "lavender"]),
];

const TRIADIC: &[(&str, &[&str])] = &[
    ("red", &["blue", "yellow"]),
    ("blue", &["red", "yellow"]),
    ("yellow", &["red", "blue"]),
    ("green", &["orange", "purple"]),
    ("orange", &["green", "purple"]),
    ("purple", &["green", "orange"]),
];

const SEASONAL: &[(Season, &[&str])] = &[
    (Season::Spring, &["coral", "mint", "sky_blue", "lavender", "cream", "light_gray"]),
    (Season::Summer, &["navy", "white", "sky_blue", "pink", "silver", "light_gray"]),
    (Season::Autumn, &["burgundy", "forest_green", "gold", "brown", "orange", "cream"]),
    (Season::Winter, &["black", "white", "navy", "red", "royal_blue", "silver"]),
];

const STYLES: &[(Style, &[&str])] = &[
    (Style::Professional, &["navy", "black", "white", "gray", "dark_gray"]),
    (Style::Casual, &["blue", "green", "brown", "beige", "khaki"]),
    (Style::Elegant, &["black", "white", "navy", "burgundy", "silver"]),
    (Style::Playful, &["yellow", "orange", "pink", "sky_blue", "mint"]),
    (Style::Romantic, &["pink", "lavender", "cream", "coral", "white"]),
    (Style::Bold, &["red", "orange", "royal_blue", "purple", "gold"]),
    (Style::Earthy, &["brown", "olive", "forest_green", "tan", "cream"]),
    (Style::Minimalist, &["white", "black", "gray", "beige", "cream"]),
];

/// Immutable lookup tables for color matching. Built once in `main` and
/// shared with handlers through `web::Data`.
pub struct ColorTables {
    named: Vec<NamedColor>,
    named_index: HashMap<&'static str, Rgb>,
    compatible: HashMap<&'static str, Vec<&'static str>>,
    categories: HashMap<Category, Vec<Category>>,
    harmony: HashMap<HarmonyKind, HashMap<&'static str, Vec<&'static str>>>,
    seasonal: HashMap<Season, Vec<&'static str>>,
    styles: HashMap<Style, Vec<&'static str>>,
}

impl ColorTables {
    pub fn new() -> Self {
        let named: Vec<NamedColor> = NAMED_COLORS
            .iter()
            .map(|(name, (r, g, b))| NamedColor {
                name: *name,
                rgb: Rgb(*r, *g, *b),
            })
            .collect();

        let named_index = named.iter().map(|c| (c.name, c.rgb)).collect();

        let compatible = COMPATIBLE_COLORS
            .iter()
            .map(|(name, colors)| (*name, colors.to_vec()))
            .collect();

        let categories = CATEGORY_PAIRS
            .iter()
            .map(|(category, partners)| (*category, partners.to_vec()))
            .collect();

        let mut harmony = HashMap::new();
        for (kind, table) in [
            (HarmonyKind::Complementary, COMPLEMENTARY),
            (HarmonyKind::Analogous, ANALOGOUS),
            (HarmonyKind::Triadic, TRIADIC),
        ] {
            let entries: HashMap<&'static str, Vec<&'static str>> =
                table.iter().map(|(name, colors)| (*name, colors.to_vec())).collect();
            harmony.insert(kind, entries);
        }

        let seasonal = SEASONAL
            .iter()
            .map(|(season, palette)| (*season, palette.to_vec()))
            .collect();

        let styles = STYLES
            .iter()
            .map(|(style, colors)| (*style, colors.to_vec()))
            .collect();

        Self {
            named,
            named_index,
            compatible,
            categories,
            harmony,
            seasonal,
            styles,
        }
    }

    /// All named colors in declaration order
    pub fn named_colors(&self) -> &[NamedColor] {
        &self.named
    }

    /// RGB value for a named color
    pub fn rgb_of(&self, name: &str) -> Option<Rgb> {
        self.named_index.get(name).copied()
    }

    /// Colors that pair well with the given color; empty if unknown
    pub fn compatible_colors(&self, name: &str) -> &[&'static str] {
        self.compatible.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories that combine with the given category; empty if unknown
    pub fn compatible_categories(&self, category: Category) -> &[Category] {
        self.categories.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Base colors that have entries under a harmony kind
    pub fn harmony_bases(&self, kind: HarmonyKind) -> Vec<&'static str> {
        self.harmony
            .get(&kind)
            .map(|entries| entries.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Harmony partners of the given color under one harmony kind
    pub fn harmony_colors(&self, kind: HarmonyKind, name: &str) -> &[&'static str] {
        self.harmony
            .get(&kind)
            .and_then(|entries| entries.get(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Palette for a season
    pub fn seasonal_palette(&self, season: Season) -> &[&'static str] {
        self.seasonal.get(&season).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Color set for a style mood
    pub fn style_colors(&self, style: Style) -> &[&'static str] {
        self.styles.get(&style).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn compatibility_rules(&self) -> &HashMap<&'static str, Vec<&'static str>> {
        &self.compatible
    }

    pub fn category_rules(&self) -> &HashMap<Category, Vec<Category>> {
        &self.categories
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            named_colors: self.named.len(),
            compatibility_rules: self.compatible.len(),
            category_rules: self.categories.len(),
            harmony_rules: self.harmony.values().map(HashMap::len).sum(),
            seasons: self.seasonal.len(),
            styles: self.styles.len(),
        }
    }
}

impl Default for ColorTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_colors_match_configuration() {
        let tables = ColorTables::new();
        assert_eq!(
            tables.compatible_colors("red"),
            &["black", "white", "navy", "gray", "beige", "cream"]
        );
        assert_eq!(tables.compatible_colors("cream"), &["brown", "navy", "black", "red"]);
    }

    #[test]
    fn unknown_keys_return_empty() {
        let tables = ColorTables::new();
        assert!(tables.compatible_colors("chartreuse").is_empty());
        assert!(tables.compatible_colors("teal").is_empty());
        assert!(tables.harmony_colors(HarmonyKind::Triadic, "navy").is_empty());
        assert!(tables.rgb_of("chartreuse").is_none());
    }

    #[test]
    fn category_rules_are_asymmetric() {
        let tables = ColorTables::new();
        assert!(tables
            .compatible_categories(Category::Dresses)
            .contains(&Category::Shoes));
        assert!(!tables
            .compatible_categories(Category::Shoes)
            .contains(&Category::Dresses));
    }

    #[test]
    fn table_counts() {
        let counts = ColorTables::new().counts();
        assert_eq!(counts.named_colors, 30);
        assert_eq!(counts.compatibility_rules, 14);
        assert_eq!(counts.category_rules, 6);
        assert_eq!(counts.harmony_rules, 18);
        assert_eq!(counts.seasons, 4);
        assert_eq!(counts.styles, 8);
    }

    #[test]
    fn every_referenced_color_is_named() {
        let tables = ColorTables::new();

        let mut referenced: Vec<&str> = Vec::new();
        for (_, colors) in COMPATIBLE_COLORS {
            referenced.extend_from_slice(colors);
        }
        for table in [COMPLEMENTARY, ANALOGOUS, TRIADIC] {
            for (name, colors) in table {
                referenced.push(*name);
                referenced.extend_from_slice(colors);
            }
        }
        for (_, palette) in SEASONAL {
            referenced.extend_from_slice(palette);
        }
        for (_, colors) in STYLES {
            referenced.extend_from_slice(colors);
        }

        for name in referenced {
            assert!(tables.rgb_of(name).is_some(), "unknown color in tables: {name}");
        }
    }

    #[test]
    fn named_order_is_stable() {
        let tables = ColorTables::new();
        assert_eq!(tables.named_colors()[0].name, "red");
        assert_eq!(tables.named_colors().last().unwrap().name, "lavender");
    }
}
