use crate::catalog::Catalog;
use crate::layout::{ITEMS_PER_ROW, PositionMap, StationLayout, paired_slot};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Vertical padding above the order card row.
pub const ORDER_MARGIN: u32 = 10;

/// Canvas geometry and palette for composited previews.
///
/// The defaults give a 1024x600 parchment canvas with 128px icons.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub icon_size: u32,
    pub background: [u8; 4],
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1024,
            canvas_height: 600,
            icon_size: 128,
            background: [240, 234, 214, 255],
        }
    }
}

/// Composites a station preview from per-item icon files in `assets`.
///
/// Order cards (`order-{slug}.png`) run along the top center, the cooker row
/// sits centered mid-canvas, the ingredient column fills the bottom-left
/// corner upward and the condiment column the bottom-right, two items per
/// row. Item icons load as `{name}.png` with a `{name}.jpg` fallback; a
/// missing or unreadable icon is logged and its slot left empty, never a
/// failure.
pub fn compose_preview(
    layout: &StationLayout,
    catalog: &Catalog,
    assets: &Path,
    config: &PreviewConfig,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        config.canvas_width,
        config.canvas_height,
        Rgba(config.background),
    );

    paste_order_cards(&mut canvas, layout, catalog, assets, config);
    paste_cooker_row(&mut canvas, &layout.cookers, assets, config);

    paste_paired_column(&mut canvas, &layout.ingredients, assets, config, 0);
    let condiment_x = config.canvas_width as i64 - ITEMS_PER_ROW as i64 * config.icon_size as i64;
    paste_paired_column(&mut canvas, &layout.condiments, assets, config, condiment_x);

    canvas
}

/// One card per ordered recipe, left to right in rank order, top center.
fn paste_order_cards(
    canvas: &mut RgbaImage,
    layout: &StationLayout,
    catalog: &Catalog,
    assets: &Path,
    config: &PreviewConfig,
) {
    let start = centered_start(config.canvas_width, layout.order.len(), config.icon_size);
    for (index, name) in layout.order.iter().enumerate() {
        let Some(recipe) = catalog.get(name) else {
            tracing::warn!("Recipe '{}' is not in the catalog, skipping its order card", name);
            continue;
        };
        let card_path = assets.join(format!("order-{}.png", recipe.image_slug()));
        match load_icon(&card_path, config.icon_size) {
            Some(card) => {
                let x = start + index as i64 * config.icon_size as i64;
                imageops::overlay(canvas, &card, x, ORDER_MARGIN as i64);
            }
            None => tracing::warn!("Order card not found at {}", card_path.display()),
        }
    }
}

/// The cooker icons in slot order, centered on both canvas axes.
fn paste_cooker_row(
    canvas: &mut RgbaImage,
    cookers: &PositionMap,
    assets: &Path,
    config: &PreviewConfig,
) {
    let start = centered_start(config.canvas_width, cookers.len(), config.icon_size);
    let y = (config.canvas_height as i64 - config.icon_size as i64) / 2;
    for (index, name) in cookers.names().enumerate() {
        match load_item_icon(assets, name, config.icon_size) {
            Some(icon) => {
                let x = start + index as i64 * config.icon_size as i64;
                imageops::overlay(canvas, &icon, x, y);
            }
            None => tracing::warn!("No icon for cooker '{}' in {}", name, assets.display()),
        }
    }
}

/// A paired column growing from the canvas bottom, anchored at `x_start`.
fn paste_paired_column(
    canvas: &mut RgbaImage,
    items: &PositionMap,
    assets: &Path,
    config: &PreviewConfig,
    x_start: i64,
) {
    let bottom = config.canvas_height as i64 - config.icon_size as i64;
    let count = items.len();
    for (index, name) in items.names().enumerate() {
        let Some(icon) = load_item_icon(assets, name, config.icon_size) else {
            tracing::warn!("No icon for item '{}' in {}", name, assets.display());
            continue;
        };
        let slot = paired_slot(index, count);
        let x = x_start + slot.column as i64 * config.icon_size as i64;
        let y = bottom - slot.row_from_bottom as i64 * config.icon_size as i64;
        imageops::overlay(canvas, &icon, x, y);
    }
}

/// The x coordinate that centers a row of `count` icons. May go negative
/// when the row is wider than the canvas; `overlay` clips as needed.
fn centered_start(canvas_width: u32, count: usize, icon_size: u32) -> i64 {
    (canvas_width as i64 - count as i64 * icon_size as i64) / 2
}

fn load_item_icon(assets: &Path, name: &str, size: u32) -> Option<RgbaImage> {
    let png = assets.join(format!("{}.png", name));
    let jpg = assets.join(format!("{}.jpg", name));
    load_icon(&png, size).or_else(|| load_icon(&jpg, size))
}

fn load_icon(path: &Path, size: u32) -> Option<RgbaImage> {
    let loaded = image::open(path).ok()?;
    Some(imageops::resize(
        &loaded.to_rgba8(),
        size,
        size,
        FilterType::Lanczos3,
    ))
}
