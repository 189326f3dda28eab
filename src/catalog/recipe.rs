use serde::{Deserialize, Serialize};
use std::fmt;

/// The three item groups a station displays, each with its own packing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ingredient,
    Cooker,
    Condiment,
}

impl Category {
    /// All categories, in the order a station lays them out.
    pub const ALL: [Category; 3] = [Category::Ingredient, Category::Cooker, Category::Condiment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ingredient => "ingredient",
            Category::Cooker => "cooker",
            Category::Condiment => "condiment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dish the minigame can serve: its display name, the asset slug
/// used to locate its artwork, and the ordered item lists per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, alias = "raw_ingredients")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cookers: Vec<String>,
    #[serde(default)]
    pub condiments: Vec<String>,
}

impl Recipe {
    /// The item list for the given category, in the recipe's stored order.
    pub fn items(&self, category: Category) -> &[String] {
        match category {
            Category::Ingredient => &self.ingredients,
            Category::Cooker => &self.cookers,
            Category::Condiment => &self.condiments,
        }
    }

    /// The slug that names this recipe's artwork files. Falls back to a
    /// slugified form of the display name when no explicit slug is set.
    pub fn image_slug(&self) -> String {
        if !self.slug.is_empty() {
            return self.slug.clone();
        }
        self.name
            .chars()
            .filter_map(|c| {
                if c.is_whitespace() {
                    Some('-')
                } else if c.is_alphanumeric() || c == '-' || c == '_' {
                    Some(c.to_ascii_lowercase())
                } else {
                    None
                }
            })
            .collect()
    }
}
