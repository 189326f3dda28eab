use crate::catalog::{Category, Recipe};
use itertools::Itertools;

/// Merges the ranked recipes' item lists for one category into a single
/// deduplicated sequence.
///
/// Recipes are scanned in rank order and each recipe's items in their stored
/// order; only the first occurrence of an item is kept. The result is what
/// the packing rules number: deterministic, duplicate-free, and never longer
/// than the per-recipe lists combined.
pub fn category_sequence(recipes: &[&Recipe], category: Category) -> Vec<String> {
    recipes
        .iter()
        .flat_map(|recipe| recipe.items(category))
        .unique()
        .cloned()
        .collect()
}
