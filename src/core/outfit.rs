//! Outfit assembly from stored wardrobe items

use crate::models::{Outfit, OutfitPiece};
use crate::stores::{ColorTables, WardrobeStore};

/// Colors that rescue a piece even when the compatibility table says
/// nothing; dark neutrals go with almost anything
const NEUTRAL_FALLBACKS: &[&str] = &["black", "brown"];

/// Build at most one outfit for a user.
///
/// The first stocked category in priority order anchors the outfit with
/// its first-inserted item (arbitrary but deterministic). Each later
/// compatible category contributes its first item whose color pairs with
/// the anchor, if any. An empty wardrobe yields no outfit.
pub fn suggest_outfit(
    tables: &ColorTables,
    store: &dyn WardrobeStore,
    user: &str,
) -> Option<Outfit> {
    let wardrobe = store.wardrobe(user);

    let (_, anchor_items) = wardrobe.first()?;
    let anchor = anchor_items.first()?.clone();

    let compatible_colors = tables.compatible_colors(&anchor.color);
    let compatible_categories = tables.compatible_categories(anchor.category);

    let mut pieces = vec![OutfitPiece {
        category: anchor.category,
        item: anchor,
    }];

    for (category, items) in wardrobe.iter().skip(1) {
        if !compatible_categories.contains(category) {
            continue;
        }

        let found = items.iter().find(|item| {
            compatible_colors.iter().any(|c| *c == item.color)
                || NEUTRAL_FALLBACKS.iter().any(|c| *c == item.color)
        });

        if let Some(item) = found {
            pieces.push(OutfitPiece {
                category: *category,
                item: item.clone(),
            });
        }
    }

    let complete = pieces.len() > 1;
    let note = (!complete)
        .then(|| "Outfit is incomplete; no compatible items were found in other categories.".to_string());

    Some(Outfit {
        score: pieces.len(),
        pieces,
        complete,
        note,
    })
}
