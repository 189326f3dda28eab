pub mod aggregate;
pub mod packing;
pub mod position;

pub use aggregate::*;
pub use packing::*;
pub use position::*;

use crate::catalog::{Catalog, Category, Recipe};
use crate::error::LayoutError;
use crate::order::{RankedOrder, RecipePick};
use serde::Serialize;

/// The computed station layout for one order: the recipe names in rank order
/// plus one position map per display category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationLayout {
    pub order: Vec<String>,
    pub ingredients: PositionMap,
    pub cookers: PositionMap,
    pub condiments: PositionMap,
}

impl StationLayout {
    /// The position map for the given category.
    pub fn positions(&self, category: Category) -> &PositionMap {
        match category {
            Category::Ingredient => &self.ingredients,
            Category::Cooker => &self.cookers,
            Category::Condiment => &self.condiments,
        }
    }
}

/// Plans station layouts from validated orders against a single catalog.
///
/// The planner borrows its catalog and holds no per-request state, so one
/// instance serves any number of `plan` calls, concurrently or not.
pub struct LayoutPlanner<'c> {
    catalog: &'c Catalog,
    column_rows: Option<usize>,
}

/// Configures a [`LayoutPlanner`] before use.
pub struct LayoutPlannerBuilder<'c> {
    catalog: &'c Catalog,
    column_rows: Option<usize>,
}

impl<'c> LayoutPlannerBuilder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            column_rows: None,
        }
    }

    /// Caps the paired ingredient and condiment columns at `rows` rows each.
    /// Without a cap those columns grow as tall as the selection demands and
    /// the renderer decides what to do with the height.
    pub fn with_column_rows(mut self, rows: usize) -> Self {
        self.column_rows = Some(rows);
        self
    }

    pub fn build(self) -> LayoutPlanner<'c> {
        LayoutPlanner {
            catalog: self.catalog,
            column_rows: self.column_rows,
        }
    }
}

impl<'c> LayoutPlanner<'c> {
    /// A planner with default capacity policy: cookers capped at
    /// [`COOKER_SLOTS`], paired columns uncapped.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            column_rows: None,
        }
    }

    pub fn builder(catalog: &'c Catalog) -> LayoutPlannerBuilder<'c> {
        LayoutPlannerBuilder::new(catalog)
    }

    /// Plans the full station layout for a validated order.
    ///
    /// The stages run in a fixed sequence: resolve the picks against the
    /// catalog, merge and deduplicate each category's items in rank order,
    /// then number every sequence 1-based under its packing rule. Any
    /// failure surfaces before a layout is produced; there are no partial
    /// results.
    pub fn plan(&self, order: &RankedOrder) -> Result<StationLayout, LayoutError> {
        let recipes = order.resolve(self.catalog)?;

        let ingredients = self.paired_positions(&recipes, Category::Ingredient)?;
        let cookers = self.cooker_positions(&recipes)?;
        let condiments = self.paired_positions(&recipes, Category::Condiment)?;

        let layout = StationLayout {
            order: order.names_by_rank().map(str::to_owned).collect(),
            ingredients,
            cookers,
            condiments,
        };
        tracing::debug!(
            "Planned layout with {} ingredients, {} cookers, {} condiments",
            layout.ingredients.len(),
            layout.cookers.len(),
            layout.condiments.len()
        );
        Ok(layout)
    }

    /// Validates a raw selection and plans it in one call.
    pub fn plan_picks(&self, picks: Vec<RecipePick>) -> Result<StationLayout, LayoutError> {
        let order = RankedOrder::new(picks)?;
        self.plan(&order)
    }

    fn paired_positions(
        &self,
        recipes: &[&Recipe],
        category: Category,
    ) -> Result<PositionMap, LayoutError> {
        let sequence = category_sequence(recipes, category);
        if let Some(rows) = self.column_rows
            && paired_rows(sequence.len()) > rows
        {
            return Err(LayoutError::CapacityExceeded {
                category,
                count: sequence.len(),
                capacity: rows * ITEMS_PER_ROW,
            });
        }
        Ok(PositionMap::from_sequence(sequence))
    }

    fn cooker_positions(&self, recipes: &[&Recipe]) -> Result<PositionMap, LayoutError> {
        let sequence = category_sequence(recipes, Category::Cooker);
        if sequence.len() > COOKER_SLOTS {
            return Err(LayoutError::CapacityExceeded {
                category: Category::Cooker,
                count: sequence.len(),
                capacity: COOKER_SLOTS,
            });
        }
        Ok(PositionMap::from_sequence(sequence))
    }
}
