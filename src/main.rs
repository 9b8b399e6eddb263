//! Terminal frontend for pajamagrams.

mod tui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pajamagrams::{GameConfig, GameStore, PuzzleCatalog};

#[derive(Parser, Debug)]
#[command(name = "pajamagrams")]
#[command(about = "A birthday anagram puzzle game for the terminal", long_about = None)]
struct Cli {
    /// Puzzle dataset (JSON). Defaults to the built-in birthday set.
    #[arg(short, long, value_name = "FILE")]
    puzzles: Option<PathBuf>,

    /// Game configuration (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for tile layouts; overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log file (set RUST_LOG to control the level)
    #[arg(long, value_name = "FILE", default_value = "pajamagrams.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let catalog = load_catalog(cli.puzzles.as_deref())?;

    let store = GameStore::new(catalog, config);
    info!(seed = store.seed(), "Starting pajamagrams (rerun with --seed to replay layouts)");

    tui::run(store)
}

/// TUI apps can't log to stdout, so logs go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: GameConfig =
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?;
    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn load_catalog(path: Option<&Path>) -> Result<PuzzleCatalog> {
    let Some(path) = path else {
        return Ok(PuzzleCatalog::builtin());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read puzzles {}", path.display()))?;
    let catalog =
        PuzzleCatalog::from_json(&json).with_context(|| format!("invalid puzzles {}", path.display()))?;
    info!(path = %path.display(), puzzles = catalog.len(), "Loaded puzzles");
    Ok(catalog)
}
