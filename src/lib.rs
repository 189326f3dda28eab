//! # Haichi - Station Layout Planner
//!
//! **Haichi** is a deterministic layout planner for cooking-minigame stations. Given the
//! four recipes a player picked and the rank they assigned each one, it computes which
//! ingredients, cookware pieces, and condiments the station shows and which slot every
//! item occupies, merging the recipes' item lists in rank order and deduplicating
//! repeats along the way.
//!
//! ## Core Workflow
//!
//! The planner is source-agnostic: it operates on a canonical in-memory `Catalog` of
//! recipes. The primary workflow is:
//!
//! 1.  **Load Your Catalog**: Parse the canonical recipe JSON with `Catalog::from_file`, or implement the `IntoCatalog` trait for whatever format your game pipeline already produces.
//! 2.  **Validate the Order**: Turn the player's raw picks into a `RankedOrder`. Construction validates that exactly four distinct recipes carry the ranks 1 through 4; holding the value is proof the selection is well-formed.
//! 3.  **Plan**: Use `LayoutPlanner::plan` to resolve the picks, merge and deduplicate each item category in rank order, and number every item 1-based under its packing rule.
//! 4.  **Render**: Serialize the resulting `StationLayout` for a client, sketch it as text with `LayoutFormatter`, or composite a preview image from icon assets (feature `image-export`).
//!
//! ## Quick Start
//!
//! The following example demonstrates the end-to-end process.
//!
//! ```rust,no_run
//! use haichi::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = Catalog::from_json(
//!         r#"[
//!             {"name": "Pancakes", "ingredients": ["Egg", "Flour", "Milk"], "cookers": ["Pan"], "condiments": ["Syrup"]},
//!             {"name": "Omelette", "ingredients": ["Egg", "Butter"], "cookers": ["Pan"], "condiments": ["Ketchup"]},
//!             {"name": "Porridge", "ingredients": ["Oats", "Milk"], "cookers": ["Pot"], "condiments": ["Honey"]},
//!             {"name": "Toast", "ingredients": ["Bread", "Butter"], "cookers": ["Grill"], "condiments": []}
//!         ]"#,
//!     )?;
//!
//!     // The player's picks: rank 1 is served first and wins every tie.
//!     let order = RankedOrder::from_pairs([
//!         ("Omelette", 1),
//!         ("Pancakes", 2),
//!         ("Toast", 3),
//!         ("Porridge", 4),
//!     ])?;
//!
//!     let planner = LayoutPlanner::new(&catalog);
//!     let layout = planner.plan(&order)?;
//!
//!     // "Egg" first appears in the rank-1 omelette, so it takes slot 1.
//!     assert_eq!(layout.ingredients.position("Egg"), Some(1));
//!
//!     println!("{}", LayoutFormatter::format_layout(&layout));
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod layout;
pub mod order;
pub mod prelude;
pub mod preview;
