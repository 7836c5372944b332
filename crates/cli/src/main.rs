#![deny(unsafe_code)]
//! CLI binary for the spritegen procedural sprite toolkit.
//!
//! Subcommands:
//! - `generate` — synthesize a sprite from flags, write PNG
//! - `recipe <file.json>` — replay a saved recipe, write PNG

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use spritegen_core::{GradientSpec, NoiseConfig, Recipe, Srgb, Xorshift64};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Upper bound (exclusive) for randomly drawn sprite seeds.
const RANDOM_SEED_RANGE: u64 = 99_999;

#[derive(Parser)]
#[command(name = "spritegen", about = "Procedural sprite generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize a sprite and write it as a PNG.
    Generate {
        /// Sprite name; also the output file name (collisions get _1, _2, ...).
        #[arg(short, long, default_value = "NewSprite")]
        name: String,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 64)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 64)]
        height: usize,

        /// Noise scale (coordinate step size, conventionally in (0, 1]).
        #[arg(long, default_value_t = 0.1)]
        scale: f64,

        /// Noise seed. Omit to draw a fresh random seed.
        #[arg(long)]
        seed: Option<i64>,

        /// Gradient low stop as a hex color.
        #[arg(long, default_value = "#0000ff")]
        low: String,

        /// Gradient base stop as a hex color.
        #[arg(long, default_value = "#ffffff")]
        base: String,

        /// Gradient high stop as a hex color.
        #[arg(long, default_value = "#ff0000")]
        high: String,

        /// Threshold splitting the low/base and base/high segments.
        #[arg(short, long, default_value_t = 0.5)]
        threshold: f64,

        /// Output directory.
        #[arg(short, long, default_value = "sprites")]
        dir: PathBuf,
    },
    /// Replay a saved recipe JSON file and write the PNG.
    Recipe {
        /// Path to the recipe JSON file.
        file: PathBuf,

        /// Output directory.
        #[arg(short, long, default_value = "sprites")]
        dir: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate {
            name,
            width,
            height,
            scale,
            seed,
            low,
            base,
            high,
            threshold,
            dir,
        } => {
            let seed = seed
                .unwrap_or_else(|| Xorshift64::from_entropy().next_below(RANDOM_SEED_RANGE) as i64);

            let gradient = GradientSpec::new(
                Srgb::from_hex(&low).map_err(|e| CliError::Input(e.to_string()))?,
                Srgb::from_hex(&base).map_err(|e| CliError::Input(e.to_string()))?,
                Srgb::from_hex(&high).map_err(|e| CliError::Input(e.to_string()))?,
            );
            let noise = NoiseConfig { scale, seed };

            let canvas = spritegen_synth::synthesize(width, height, &noise, &gradient, threshold)?;
            let path = spritegen_raster::snapshot::save_unique(&canvas, &dir, &name)?;

            report(cli.json, &name, width, height, seed, threshold, &path)?;
        }
        Command::Recipe { file, dir } => {
            let text = fs::read_to_string(&file)
                .map_err(|e| CliError::Input(format!("cannot read {}: {e}", file.display())))?;
            let recipe: Recipe = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid recipe JSON: {e}")))?;

            let canvas = spritegen_synth::synthesize_recipe(&recipe)?;
            let path = spritegen_raster::snapshot::save_unique(&canvas, &dir, &recipe.name)?;

            report(
                cli.json,
                &recipe.name,
                recipe.width,
                recipe.height,
                recipe.noise.seed,
                recipe.threshold,
                &path,
            )?;
        }
    }

    Ok(())
}

fn report(
    json: bool,
    name: &str,
    width: usize,
    height: usize,
    seed: i64,
    threshold: f64,
    path: &std::path::Path,
) -> Result<(), CliError> {
    if json {
        let info = serde_json::json!({
            "name": name,
            "width": width,
            "height": height,
            "seed": seed,
            "threshold": threshold,
            "output": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!("generated {name} ({width}x{height}, seed {seed}) -> {}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
