#![cfg(feature = "image-export")]
//! Pixel-level tests for the composited station preview.
mod common;
use common::*;
use haichi::prelude::*;
use haichi::preview::image::{ORDER_MARGIN, PreviewConfig, compose_preview};
use image::{Rgb, RgbImage, Rgba, RgbaImage};

fn solid_png(path: &std::path::Path, color: [u8; 4]) {
    RgbaImage::from_pixel(10, 10, Rgba(color))
        .save(path)
        .expect("Failed to write icon");
}

#[test]
fn test_compose_places_icons_on_the_station() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let assets = dir.path();

    solid_png(&assets.join("Egg.png"), [255, 0, 0, 255]);
    solid_png(&assets.join("Flour.png"), [0, 255, 0, 255]);
    solid_png(&assets.join("Butter.png"), [0, 0, 255, 255]);
    solid_png(&assets.join("Mayo.png"), [255, 0, 255, 255]);
    solid_png(&assets.join("Pan.png"), [255, 255, 0, 255]);
    solid_png(&assets.join("order-crepes.png"), [0, 255, 255, 255]);

    let catalog = Catalog::from_recipes(vec![
        recipe("Crepes", &["Egg", "Flour"], &["Pan"], &["Mayo"]),
        recipe("Batter", &["Flour", "Milk"], &["Pan"], &[]),
        recipe("Glaze", &["Sugar"], &["Pan"], &[]),
        recipe("Brioche", &["Butter"], &["Pan"], &[]),
    ])
    .expect("Catalog builds");

    let layout = LayoutPlanner::new(&catalog)
        .plan(&create_order(["Crepes", "Batter", "Glaze", "Brioche"]))
        .expect("Plan succeeds");

    let config = PreviewConfig::default();
    let preview = compose_preview(&layout, &catalog, assets, &config);
    assert_eq!(preview.dimensions(), (1024, 600));

    // The ingredient column anchors bottom-left: Egg takes the bottom-left
    // slot with Flour to its right.
    let bottom = 600 - 128;
    assert_eq!(preview.get_pixel(0, bottom).0, [255, 0, 0, 255]);
    assert_eq!(preview.get_pixel(128, bottom).0, [0, 255, 0, 255]);

    // Sugar has no icon on disk, so its slot keeps the parchment background.
    assert_eq!(preview.get_pixel(128, bottom - 128).0, [240, 234, 214, 255]);

    // Butter opens the third row up.
    assert_eq!(preview.get_pixel(0, bottom - 256).0, [0, 0, 255, 255]);

    // The deduplicated single cooker is centered on both axes.
    let cooker_x = (1024 - 128) / 2;
    let cooker_y = (600 - 128) / 2;
    assert_eq!(preview.get_pixel(cooker_x, cooker_y).0, [255, 255, 0, 255]);

    // The condiment column anchors bottom-right.
    let condiment_x = 1024 - 2 * 128;
    assert_eq!(preview.get_pixel(condiment_x, bottom).0, [255, 0, 255, 255]);

    // The rank-1 order card sits top-center across four card widths; the
    // other ranks have no card files and stay skipped.
    let order_x = (1024 - 4 * 128) / 2;
    assert_eq!(
        preview.get_pixel(order_x, ORDER_MARGIN).0,
        [0, 255, 255, 255]
    );
    assert_eq!(
        preview.get_pixel(order_x + 128, ORDER_MARGIN).0,
        [240, 234, 214, 255]
    );

    // Corners outside every area stay parchment.
    assert_eq!(preview.get_pixel(1023, 0).0, [240, 234, 214, 255]);
}

#[test]
fn test_item_icons_fall_back_to_jpg() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let assets = dir.path();

    // Only a JPEG exists for the pot.
    RgbImage::from_pixel(10, 10, Rgb([200, 120, 40]))
        .save(assets.join("Pot.jpg"))
        .expect("Failed to write jpg icon");

    let catalog = Catalog::from_recipes(vec![
        recipe("Stew", &[], &["Pot"], &[]),
        recipe("Soup", &[], &["Pot"], &[]),
        recipe("Broth", &[], &["Pot"], &[]),
        recipe("Chili", &[], &["Pot"], &[]),
    ])
    .expect("Catalog builds");

    let layout = LayoutPlanner::new(&catalog)
        .plan(&create_order(["Stew", "Soup", "Broth", "Chili"]))
        .expect("Plan succeeds");

    let preview = compose_preview(&layout, &catalog, assets, &PreviewConfig::default());

    // JPEG decoding may shift the color slightly; allow a small tolerance.
    let pixel = preview.get_pixel((1024 - 128) / 2, (600 - 128) / 2).0;
    assert!(
        pixel[0].abs_diff(200) <= 12 && pixel[1].abs_diff(120) <= 12 && pixel[2].abs_diff(40) <= 12,
        "Unexpected cooker color {:?}",
        pixel
    );
    assert_eq!(pixel[3], 255);
}

#[test]
fn test_preview_config_controls_canvas() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let catalog = create_walkthrough_catalog();
    let layout = LayoutPlanner::new(&catalog)
        .plan(&create_order(["Crepes", "Batter", "Glaze", "Brioche"]))
        .expect("Plan succeeds");

    let config = PreviewConfig {
        canvas_width: 512,
        canvas_height: 300,
        icon_size: 64,
        background: [10, 20, 30, 255],
    };

    // No icons exist, so every slot is skipped and the canvas stays blank.
    let preview = compose_preview(&layout, &catalog, dir.path(), &config);
    assert_eq!(preview.dimensions(), (512, 300));
    assert_eq!(preview.get_pixel(256, 150).0, [10, 20, 30, 255]);
    assert_eq!(preview.get_pixel(0, 299).0, [10, 20, 30, 255]);
}
