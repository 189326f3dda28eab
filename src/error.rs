use crate::catalog::Category;
use crate::order::ORDER_SIZE;
use thiserror::Error;

/// Errors that can occur while validating a player's recipe selection.
#[derive(Error, Debug, Clone)]
pub enum OrderError {
    #[error("An order selects exactly {} recipes, but {found} were provided", ORDER_SIZE)]
    SelectionCount { found: usize },

    #[error("Recipe '{name}' appears more than once in the selection")]
    DuplicateRecipe { name: String },

    #[error("Rank {rank} is assigned to both '{first}' and '{second}'")]
    DuplicateRank {
        rank: u8,
        first: String,
        second: String,
    },

    #[error("Recipe '{name}' has rank {rank}, but ranks must lie within 1..={}", ORDER_SIZE)]
    RankOutOfRange { name: String, rank: u8 },
}

/// Errors that can occur while building or querying the recipe catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {message}")]
    FileRead { path: String, message: String },

    #[error("Failed to parse catalog JSON: {0}")]
    JsonParse(String),

    #[error("Recipe '{0}' was not found in the catalog")]
    RecipeNotFound(String),

    #[error("Recipe '{0}' is defined more than once in the catalog")]
    DuplicateEntry(String),
}

/// Errors that can occur during the layout planning phase.
#[derive(Error, Debug, Clone)]
pub enum LayoutError {
    #[error("Order validation failed: {0}")]
    Order(#[from] OrderError),

    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("The {category} area holds at most {capacity} items, but the selection requires {count}")]
    CapacityExceeded {
        category: Category,
        count: usize,
        capacity: usize,
    },
}

impl LayoutError {
    /// Returns `true` when the player can fix the failure by changing their
    /// selection, and `false` for catalog problems the operator must fix.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Order(_) | Self::CapacityExceeded { .. } => true,
            Self::Catalog(_) => false,
        }
    }
}
