use crate::layout::{ITEMS_PER_ROW, PositionMap, StationLayout, paired_rows};
use itertools::Itertools;

/// Formats station layouts into human-readable text sketches.
pub struct LayoutFormatter;

impl LayoutFormatter {
    /// Renders the full layout: the rank-ordered recipes, the numbered
    /// cooker row, and both paired columns drawn top row first so the text
    /// reads like the screen.
    pub fn format_layout(layout: &StationLayout) -> String {
        let mut lines = Vec::new();

        let orders = layout
            .order
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{}. {}", index + 1, name))
            .join("  ");
        lines.push(format!("Orders: {}", orders));

        lines.push(Self::cooker_line(&layout.cookers));
        Self::push_paired_column(&mut lines, "Ingredients", &layout.ingredients);
        Self::push_paired_column(&mut lines, "Condiments", &layout.condiments);

        lines.join("\n")
    }

    /// Formats the cooker row as numbered slots, left to right.
    fn cooker_line(cookers: &PositionMap) -> String {
        if cookers.is_empty() {
            return "Cookers: (none)".to_string();
        }
        let slots = cookers
            .iter()
            .map(|(name, position)| format!("[{}] {}", position, name))
            .join("  ");
        format!("Cookers: {}", slots)
    }

    /// Appends a paired column, one line per row from the top, with "-"
    /// marking the unused right slot of an odd-sized column.
    fn push_paired_column(lines: &mut Vec<String>, label: &str, items: &PositionMap) {
        if items.is_empty() {
            lines.push(format!("{}: (none)", label));
            return;
        }
        lines.push(format!("{} (top to bottom):", label));
        let names: Vec<&str> = items.names().collect();
        for row in (0..paired_rows(names.len())).rev() {
            let left = names.get(row * ITEMS_PER_ROW).copied().unwrap_or("-");
            let right = names.get(row * ITEMS_PER_ROW + 1).copied().unwrap_or("-");
            lines.push(format!("  {} | {}", left, right));
        }
    }
}
