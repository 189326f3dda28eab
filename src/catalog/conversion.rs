use super::Catalog;
use crate::error::CatalogError;

/// A trait for custom data models that can be converted into a Haichi `Catalog`.
///
/// This is the extension point for making Haichi source-agnostic. By implementing
/// this trait on your own configuration structs, you provide a translation layer
/// that lets the layout planner work from whatever recipe format your game or
/// pipeline already produces.
///
/// # Example
///
/// ```rust,no_run
/// use haichi::catalog::{Catalog, IntoCatalog, Recipe};
/// use haichi::error::CatalogError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyDish { title: String, parts: Vec<String> }
/// struct MyMenu { dishes: Vec<MyDish> }
///
/// // 2. Implement `IntoCatalog` for your top-level struct.
/// impl IntoCatalog for MyMenu {
///     fn into_catalog(self) -> Result<Catalog, CatalogError> {
///         let recipes = self
///             .dishes
///             .into_iter()
///             .map(|dish| Recipe {
///                 name: dish.title,
///                 ingredients: dish.parts,
///                 // ... fill in the remaining lists ...
/// #                slug: String::new(),
/// #                cookers: vec![],
/// #                condiments: vec![],
///             })
///             .collect();
///
///         Catalog::from_recipes(recipes)
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a Haichi-compatible catalog.
    fn into_catalog(self) -> Result<Catalog, CatalogError>;
}
