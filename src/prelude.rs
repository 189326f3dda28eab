//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the haichi crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use haichi::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load the recipe catalog the station is configured with
//! let catalog = Catalog::from_file("path/to/recipes.json")?;
//!
//! // Validate the player's ranked picks and plan the station
//! let order = RankedOrder::from_pairs([
//!     ("Pancakes", 1),
//!     ("Omelette", 2),
//!     ("Toast", 3),
//!     ("Porridge", 4),
//! ])?;
//! let layout = LayoutPlanner::new(&catalog).plan(&order)?;
//!
//! println!("{}", LayoutFormatter::format_layout(&layout));
//! # Ok(())
//! # }
//! ```

// Catalog and recipe types
pub use crate::catalog::{Catalog, Category, IntoCatalog, Recipe};

// Order validation and sequencing
pub use crate::order::{ORDER_SIZE, RankedOrder, RecipePick};

// Layout planning
pub use crate::layout::{LayoutPlanner, PositionMap, StationLayout};

// Error types
pub use crate::error::{CatalogError, LayoutError, OrderError};

// Text formatting
pub use crate::preview::LayoutFormatter;

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
