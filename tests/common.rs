//! Common test utilities for building catalogs and ranked picks.
use haichi::prelude::*;

/// Builds a recipe from string slices.
#[allow(dead_code)]
pub fn recipe(name: &str, ingredients: &[&str], cookers: &[&str], condiments: &[&str]) -> Recipe {
    Recipe {
        name: name.to_string(),
        slug: String::new(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        cookers: cookers.iter().map(|s| s.to_string()).collect(),
        condiments: condiments.iter().map(|s| s.to_string()).collect(),
    }
}

/// Creates a six-recipe breakfast catalog covering all three categories,
/// with plenty of shared items so deduplication paths get exercised.
#[allow(dead_code)]
pub fn create_sample_catalog() -> Catalog {
    Catalog::from_recipes(vec![
        recipe(
            "Pancakes",
            &["Egg", "Flour", "Milk"],
            &["Pan"],
            &["Syrup"],
        ),
        recipe("Omelette", &["Egg", "Butter"], &["Pan"], &["Ketchup"]),
        recipe("Porridge", &["Oats", "Milk"], &["Pot"], &["Honey"]),
        recipe("Toast", &["Bread", "Butter"], &["Grill"], &[]),
        recipe(
            "Waffles",
            &["Egg", "Flour", "Sugar"],
            &["Waffle Iron"],
            &["Syrup", "Berries"],
        ),
        recipe(
            "Shakshuka",
            &["Egg", "Tomato", "Pepper"],
            &["Pan", "Pot"],
            &["Parsley"],
        ),
    ])
    .expect("Failed to build sample catalog")
}

/// Creates the four-recipe catalog whose rank-ordered ingredients merge to
/// [Egg, Flour, Milk, Sugar, Butter], the canonical packing walkthrough.
#[allow(dead_code)]
pub fn create_walkthrough_catalog() -> Catalog {
    Catalog::from_recipes(vec![
        recipe("Crepes", &["Egg", "Flour"], &["Pan"], &[]),
        recipe("Batter", &["Flour", "Milk"], &["Bowl"], &[]),
        recipe("Glaze", &["Sugar"], &["Pot"], &[]),
        recipe("Brioche", &["Butter"], &["Oven"], &[]),
    ])
    .expect("Failed to build walkthrough catalog")
}

/// Creates four picks ranked 1 through 4 in the order the names are given.
#[allow(dead_code)]
pub fn create_picks(names: [&str; 4]) -> Vec<RecipePick> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| RecipePick::new(*name, (index + 1) as u8))
        .collect()
}

/// Creates a validated order ranked 1 through 4 in the order the names are given.
#[allow(dead_code)]
pub fn create_order(names: [&str; 4]) -> RankedOrder {
    RankedOrder::new(create_picks(names)).expect("Failed to build ranked order")
}
