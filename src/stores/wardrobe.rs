//! In-memory wardrobe storage
//!
//! Wardrobes are keyed by user id, then category, with insertion order
//! preserved per category. There is no update or delete; items live until
//! the process exits.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::models::{Category, ClothingItem};

/// Storage abstraction over wardrobe persistence. The in-memory store is
/// the only implementation shipped; a persistent one can be substituted
/// without touching the matching logic.
pub trait WardrobeStore: Send + Sync {
    /// Append an item to its owner's per-category list, creating the user
    /// and category entries if absent
    fn add(&self, item: ClothingItem);

    /// Items for a user, optionally filtered by category, in insertion
    /// order. Unknown users get an empty list, not an error.
    fn items(&self, user: &str, category: Option<Category>) -> Vec<ClothingItem>;

    /// A user's full wardrobe, categories in fixed priority order
    fn wardrobe(&self, user: &str) -> Vec<(Category, Vec<ClothingItem>)>;

    fn user_count(&self) -> usize;

    fn item_count(&self) -> usize;

    /// How many stored items carry each color name, across all users
    fn color_distribution(&self) -> BTreeMap<String, usize>;
}

/// Process-local wardrobe store. A single lock guards all wardrobes;
/// expected concurrency is low enough that per-user locking is not worth
/// the bookkeeping.
pub struct MemoryWardrobe {
    users: RwLock<HashMap<String, HashMap<Category, Vec<ClothingItem>>>>,
}

impl MemoryWardrobe {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryWardrobe {
    fn default() -> Self {
        Self::new()
    }
}

impl WardrobeStore for MemoryWardrobe {
    fn add(&self, item: ClothingItem) {
        let mut users = self.users.write().unwrap();
        users
            .entry(item.owner.clone())
            .or_default()
            .entry(item.category)
            .or_default()
            .push(item);
    }

    fn items(&self, user: &str, category: Option<Category>) -> Vec<ClothingItem> {
        let users = self.users.read().unwrap();
        let Some(wardrobe) = users.get(user) else {
            return Vec::new();
        };

        match category {
            Some(category) => wardrobe.get(&category).cloned().unwrap_or_default(),
            None => Category::ALL
                .iter()
                .filter_map(|c| wardrobe.get(c))
                .flatten()
                .cloned()
                .collect(),
        }
    }

    fn wardrobe(&self, user: &str) -> Vec<(Category, Vec<ClothingItem>)> {
        let users = self.users.read().unwrap();
        let Some(wardrobe) = users.get(user) else {
            return Vec::new();
        };

        Category::ALL
            .iter()
            .filter_map(|c| wardrobe.get(c).map(|items| (*c, items.clone())))
            .collect()
    }

    fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    fn item_count(&self) -> usize {
        self.users
            .read()
            .unwrap()
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    fn color_distribution(&self) -> BTreeMap<String, usize> {
        let users = self.users.read().unwrap();
        let mut distribution = BTreeMap::new();

        for wardrobe in users.values() {
            for items in wardrobe.values() {
                for item in items {
                    *distribution.entry(item.color.clone()).or_insert(0) += 1;
                }
            }
        }

        distribution
    }
}
