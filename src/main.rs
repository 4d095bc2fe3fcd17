use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use traderules::config::ConfigManager;
use traderules::data::CsvConnector;
use traderules::engines::generation::{ConsoleProgressCallback, EvolutionEngine, SimpleSplitter};
use traderules::ml::FeatureEngineer;

/// Output format for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Discover IF-indicators-THEN-direction rules from daily price data
#[derive(Parser, Debug)]
#[command(name = "traderules")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Price CSV: close price and 0/1 direction label per day
    #[arg(short, long)]
    data: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the number of generations
    #[arg(short, long)]
    generations: Option<usize>,

    /// Override the population size
    #[arg(short, long)]
    population: Option<usize>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Write the effective configuration (file, environment and flags) to this TOML path
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Log progress of every generation
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let manager = ConfigManager::load(args.config.as_deref()).context("Failed to load configuration")?;
    manager
        .update(|config| {
            if let Some(seed) = args.seed {
                config.evolution.seed = Some(seed);
            }
            if let Some(generations) = args.generations {
                config.evolution.max_generations = generations;
            }
            if let Some(population) = args.population {
                config.evolution.population_size = population;
            }
        })
        .context("Invalid configuration")?;
    if let Some(path) = &args.save_config {
        manager
            .save_to_file(path)
            .with_context(|| format!("Failed to save configuration to {}", path.display()))?;
        log::info!("Saved configuration to {}", path.display());
    }
    let config = manager.get();

    let series = CsvConnector::load(&args.data, &config.dataset)
        .with_context(|| format!("Failed to load price data from {}", args.data.display()))?;
    let features = FeatureEngineer::new(config.features.clone())
        .extract(&series)
        .context("Feature extraction failed")?;
    log::info!("Extracted {} feature vectors from {} days", features.len(), series.len());

    let splitter = SimpleSplitter::new(config.dataset.training_fraction);
    let mut engine = EvolutionEngine::new(config.evolution.clone(), Box::new(splitter));
    let outcome = engine
        .run(&features, ConsoleProgressCallback)
        .context("Evolution failed")?;

    match args.format {
        OutputFormat::Text => {
            println!("Best Individual: {}", outcome.best_index);
            println!("{}", outcome.report);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
