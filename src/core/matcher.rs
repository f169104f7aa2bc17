//! Nearest-color matching and suggestion assembly

use palette::{FromColor, Hsv, Srgb};

use crate::models::{
    Category, ClothingItem, HarmonyKind, NamedColor, Rgb, Season, Style, Suggestion, Temperature,
};
use crate::stores::{ColorTables, WardrobeStore};

/// Find the nearest named color by Euclidean distance in RGB space.
/// Strict comparison keeps ties on the earliest declared entry.
pub fn nearest_named<'a>(tables: &'a ColorTables, rgb: Rgb) -> &'a NamedColor {
    let named = tables.named_colors();

    let mut best = &named[0];
    let mut best_distance = i64::MAX;

    for color in named {
        let distance = rgb.distance_squared(&color.rgb);
        if distance < best_distance {
            best = color;
            best_distance = distance;
        }
    }

    best
}

/// Classify a color as warm, cool, or neutral from its HSV hue.
/// Low-saturation colors read as neutral regardless of hue.
pub fn temperature(rgb: Rgb) -> Temperature {
    let hsv = Hsv::from_color(Srgb::new(rgb.0, rgb.1, rgb.2).into_format::<f32>());

    if hsv.saturation < 0.3 {
        return Temperature::Neutral;
    }

    let hue = hsv.hue.into_positive_degrees();
    if hue <= 60.0 || hue >= 300.0 {
        Temperature::Warm
    } else if (120.0..=300.0).contains(&hue) {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

/// Assemble ranked pairing suggestions for a named color worn in the given
/// category. Output is grouped: harmony kinds in declared order, then
/// classic pairings, then seasonal and style memberships; table insertion
/// order within each group. Unknown colors simply yield an empty list.
pub fn build_suggestions(tables: &ColorTables, name: &str, category: Category) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for kind in HarmonyKind::ALL {
        for color in tables.harmony_colors(kind, name) {
            suggestions.push(Suggestion::new(
                format!("{} match: {}", kind.title(), pretty(color)),
                harmony_description(kind, name, color),
            ));
        }
    }

    let partner_hint = join_categories(tables.compatible_categories(category));
    for color in tables.compatible_colors(name) {
        let description = if partner_hint.is_empty() {
            format!("{} is a classic pairing for {}.", capitalize(&pretty(color)), pretty(name))
        } else {
            format!(
                "{} is a classic pairing for {}; look through your {}.",
                capitalize(&pretty(color)),
                pretty(name),
                partner_hint
            )
        };
        suggestions.push(Suggestion::new(
            format!("Classic pairing: {}", pretty(color)),
            description,
        ));
    }

    for season in Season::ALL {
        let palette = tables.seasonal_palette(season);
        if palette.iter().any(|c| *c == name) {
            suggestions.push(Suggestion::new(
                format!("Seasonal palette: {}", season.as_str()),
                format!(
                    "{} anchors the {} palette alongside {}.",
                    capitalize(&pretty(name)),
                    season.as_str(),
                    join_colors(palette, name)
                ),
            ));
        }
    }

    for style in Style::ALL {
        let colors = tables.style_colors(style);
        if colors.iter().any(|c| *c == name) {
            suggestions.push(Suggestion::new(
                format!("Style match: {}", style.as_str()),
                format!(
                    "{} reads as {}; it blends with {}.",
                    capitalize(&pretty(name)),
                    style.as_str(),
                    join_colors(colors, name)
                ),
            ));
        }
    }

    suggestions
}

/// Items already in the user's wardrobe that pair with the given color,
/// scanning compatible categories in table order
pub fn wardrobe_matches(
    tables: &ColorTables,
    store: &dyn WardrobeStore,
    user: &str,
    base_category: Category,
    base_color: &str,
) -> Vec<ClothingItem> {
    let compatible = tables.compatible_colors(base_color);
    let mut matches = Vec::new();

    for category in tables.compatible_categories(base_category) {
        for item in store.items(user, Some(*category)) {
            if compatible.iter().any(|c| *c == item.color) {
                matches.push(item);
            }
        }
    }

    matches
}

fn harmony_description(kind: HarmonyKind, base: &str, color: &str) -> String {
    let base = pretty(base);
    let color = pretty(color);

    match kind {
        HarmonyKind::Complementary => format!(
            "{} sits opposite {} on the color wheel and makes a bold contrast.",
            capitalize(&color),
            base
        ),
        HarmonyKind::Analogous => format!(
            "{} neighbors {} on the color wheel for a soft, blended look.",
            capitalize(&color),
            base
        ),
        HarmonyKind::Triadic => format!(
            "{} balances {} as one corner of an evenly spaced color trio.",
            capitalize(&color),
            base
        ),
    }
}

/// Table keys use underscores; prose should not
fn pretty(name: &str) -> String {
    name.replace('_', " ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_colors(colors: &[&str], exclude: &str) -> String {
    colors
        .iter()
        .filter(|c| **c != exclude)
        .map(|c| pretty(c))
        .collect::<Vec<_>>()
        .join(", ")
}
