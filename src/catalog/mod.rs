pub mod conversion;
pub mod recipe;

pub use conversion::*;
pub use recipe::*;

use crate::error::CatalogError;
use ahash::AHashMap;
use std::fs;
use std::path::Path;

/// The read-only recipe lookup a station is configured with.
///
/// A catalog is built once at startup and never mutated afterwards, so it can
/// be shared across threads (e.g. behind an `Arc`) without locking. Recipes
/// keep their source order, which listing surfaces rely on; lookups by name
/// go through a hash index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    index: AHashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from already-parsed recipes, rejecting duplicate names.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut index = AHashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if index.insert(recipe.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateEntry(recipe.name.clone()));
            }
        }
        Ok(Self { recipes, index })
    }

    /// Parses a catalog from its canonical JSON form, an array of recipes.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParse(e.to_string()))?;
        Self::from_recipes(recipes)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(
            "Loaded {} recipes from catalog file {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Looks up a recipe by its display name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.index.get(name).map(|&position| &self.recipes[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All recipes in their source order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipe names in their source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|recipe| recipe.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
