#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! CLI tool for dumping a generated mock dataset as JSON.
//!
//! Useful for inspecting the distributions the dashboard renders and
//! for producing fixture files. Pass `--seed` for a reproducible
//! dataset; without it the dataset differs on every run.

use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;
use school_map_generate::{GeneratorConfig, generate, generate_seeded};

#[derive(Parser)]
#[command(name = "school_map_generate", about = "Mock dataset generation tool")]
struct Cli {
    /// Seed for reproducible output; omit for OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Number of schools to generate
    #[arg(long, default_value_t = school_map_generate::DEFAULT_SCHOOL_COUNT)]
    schools: usize,

    /// Number of factories to generate
    #[arg(long, default_value_t = school_map_generate::DEFAULT_FACTORY_COUNT)]
    factories: usize,

    /// Output file; omit to write to stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = GeneratorConfig {
        school_count: cli.schools,
        factory_count: cli.factories,
        ..GeneratorConfig::default()
    };

    let dataset = match cli.seed {
        Some(seed) => {
            log::info!("Generating dataset with seed {seed}...");
            generate_seeded(&config, seed)?
        }
        None => {
            log::info!("Generating dataset from OS entropy...");
            let mut rng = ChaCha8Rng::from_entropy();
            generate(&config, &mut rng)?
        }
    };

    log::info!(
        "Generated {} locations ({} schools, {} factories)",
        dataset.locations.len(),
        dataset.schools().count(),
        dataset.factories().count()
    );

    let json = serde_json::to_string_pretty(&dataset)?;
    match cli.output {
        Some(path) => {
            std::fs::write(&path, json)?;
            log::info!("Dataset written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
