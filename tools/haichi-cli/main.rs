use clap::Parser;
use haichi::prelude::*;
use serde::Deserialize;
use std::io::{self, Write};
use std::time::Instant;

#[cfg(feature = "image-export")]
use haichi::preview::image::{PreviewConfig, compose_preview};

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the game's recipes.json dump and are only used here for conversion.

#[derive(Deserialize)]
struct RawGameRecipe {
    name: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    raw_ingredients: Vec<String>,
    #[serde(default)]
    cookers: Vec<String>,
    #[serde(default)]
    cookers_layout: Vec<String>,
    #[serde(default)]
    condiments: Vec<String>,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct GameRecipeDump(Vec<RawGameRecipe>);

// --- Converter Implementation ---
// This implements the conversion from the game's dump model to Haichi's canonical Catalog.

impl IntoCatalog for GameRecipeDump {
    fn into_catalog(self) -> std::result::Result<Catalog, CatalogError> {
        let recipes = self
            .0
            .into_iter()
            .map(|raw| {
                // The dump carries the cookers twice; `cookers_layout` is the
                // on-screen list and wins when present.
                let cookers = if raw.cookers_layout.is_empty() {
                    raw.cookers
                } else {
                    raw.cookers_layout
                };
                Recipe {
                    name: raw.name,
                    slug: raw.slug,
                    ingredients: raw.raw_ingredients,
                    cookers,
                    condiments: raw.condiments,
                }
            })
            .collect();

        Catalog::from_recipes(recipes)
    }
}

/// A deterministic station-layout planner for cooking-minigame recipe orders
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the recipe catalog JSON file
    catalog_path: Option<String>,

    /// A ranked pick as RANK=NAME, given once per recipe (e.g. --pick 1=Pancakes)
    #[arg(short = 'p', long = "pick", value_name = "RANK=NAME")]
    picks: Vec<String>,

    /// Parse the catalog file as a game recipe dump instead of the canonical format
    #[arg(long)]
    game_dump: bool,

    /// Print the layout as pretty JSON instead of the text sketch
    #[arg(long)]
    json: bool,

    /// Write a composited preview image to this path (requires the 'image-export' feature)
    #[arg(long, value_name = "PNG")]
    image: Option<String>,

    /// Directory holding the per-item icon assets
    #[arg(long, default_value = "images")]
    assets: String,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_plan(
    catalog_path: String,
    game_dump: bool,
    raw_picks: Vec<String>,
    as_json: bool,
    image: Option<String>,
    assets: String,
) {
    let total_start = Instant::now();

    // --- 1. Catalog Loading ---
    let load_start = Instant::now();
    let catalog = load_catalog(&catalog_path, game_dump);
    let load_duration = load_start.elapsed();
    println!(
        "Loaded {} recipes from '{}' in {:?}",
        catalog.len(),
        catalog_path,
        load_duration
    );

    // --- 2. Pick Parsing ---
    let picks: Vec<RecipePick> = raw_picks.iter().map(|raw| parse_pick(raw)).collect();

    // --- 3. Layout Planning ---
    let plan_start = Instant::now();
    let planner = LayoutPlanner::new(&catalog);
    let layout = planner.plan_picks(picks).unwrap_or_else(|e| {
        if e.is_user_error() {
            exit_with_error(&format!("{}\nAdjust your selection and try again.", e))
        } else {
            exit_with_error(&format!(
                "{}\nThe catalog looks inconsistent; report this to the operator.",
                e
            ))
        }
    });
    let plan_duration = plan_start.elapsed();

    // --- 4. Output ---
    println!();
    if as_json {
        let rendered = serde_json::to_string_pretty(&layout)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize layout: {}", e)));
        println!("{}", rendered);
    } else {
        println!("{}", LayoutFormatter::format_layout(&layout));
    }

    if let Some(image_path) = &image {
        export_preview(&layout, &catalog, image_path, &assets);
    }

    // --- 5. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("Catalog Loading:   {:?}", load_duration);
    println!("Layout Planning:   {:?}", plan_duration);
    println!("---------------------------");
    println!("Total Execution:   {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let catalog_path = cli.catalog_path.unwrap_or_else(|| {
        exit_with_error("Catalog path is required in non-interactive mode.");
    });

    run_plan(
        catalog_path,
        cli.game_dump,
        cli.picks,
        cli.json,
        cli.image,
        cli.assets,
    );
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Haichi Interactive Mode ---");

    let catalog_path = prompt_for_input("Enter recipe catalog path", Some("recipes.json"));
    let dump_answer = prompt_for_input("Is this a game recipe dump? (y/n)", Some("n"));
    let game_dump = matches!(dump_answer.trim(), "y" | "Y" | "yes");

    // Load once up front so the player can pick from the listed names.
    let catalog = load_catalog(&catalog_path, game_dump);
    println!("\nAvailable recipes:");
    for name in catalog.names() {
        println!("  - {}", name);
    }
    println!();

    let mut raw_picks = Vec::with_capacity(ORDER_SIZE);
    for rank in 1..=ORDER_SIZE {
        let name = prompt_for_input(&format!("Enter the recipe for rank {}", rank), None);
        raw_picks.push(format!("{}={}", rank, name));
    }

    let image_path = prompt_for_input("Enter preview image output path (optional)", None);
    let image = if image_path.is_empty() {
        None
    } else {
        Some(image_path)
    };
    let assets = prompt_for_input("Enter icon asset directory", Some("images"));

    run_plan(catalog_path, game_dump, raw_picks, false, image, assets);
}

/// Loads the catalog in either the canonical or the game dump format.
fn load_catalog(path: &str, game_dump: bool) -> Catalog {
    if game_dump {
        let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read catalog file '{}': {}", path, e))
        });
        let dump: GameRecipeDump = serde_json::from_str(&content)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse game recipe dump: {}", e)));
        dump.into_catalog()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert game recipe dump: {}", e)))
    } else {
        Catalog::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
    }
}

/// Parses a single RANK=NAME pick argument.
fn parse_pick(raw: &str) -> RecipePick {
    let Some((rank, name)) = raw.split_once('=') else {
        exit_with_error(&format!(
            "Invalid pick '{}': expected RANK=NAME, e.g. 1=Pancakes",
            raw
        ));
    };
    let rank: u8 = rank.trim().parse().unwrap_or_else(|_| {
        exit_with_error(&format!(
            "Invalid rank '{}' in pick '{}': expected a number",
            rank, raw
        ))
    });
    RecipePick::new(name.trim(), rank)
}

#[cfg(feature = "image-export")]
fn export_preview(layout: &StationLayout, catalog: &Catalog, image_path: &str, assets: &str) {
    let config = PreviewConfig::default();
    let preview = compose_preview(layout, catalog, Path::new(assets), &config);
    match preview.save(image_path) {
        Ok(()) => println!("\nPreview image written to {}", image_path),
        Err(e) => exit_with_error(&format!(
            "Failed to write preview image '{}': {}",
            image_path, e
        )),
    }
}

#[cfg(not(feature = "image-export"))]
fn export_preview(_layout: &StationLayout, _catalog: &Catalog, _image_path: &str, _assets: &str) {
    exit_with_error("Preview image export requires building with the 'image-export' feature.");
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
