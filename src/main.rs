use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};
use pacsnek::game::{DEFAULT_LEVEL, GameConfig, GameEngine, Level};
use pacsnek::modes::{HumanMode, level_summary};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pacsnek")]
#[command(version, about = "Snake in a scrolling maze, chased by enemies")]
struct Cli {
    /// What to do with the level
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Level file (defaults to the built-in level)
    #[arg(long)]
    level: Option<PathBuf>,

    /// JSON file overriding game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "pacsnek.log")]
    log_file: PathBuf,

    /// Log debug messages too
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play in the terminal
    Play,
    /// Validate the level and print a summary
    Check,
}

fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    WriteLogger::init(filter, Config::default(), file).context("Failed to initialize logger")?;
    Ok(())
}

fn load_level(path: Option<&Path>) -> Result<Level> {
    match path {
        Some(path) => Level::load(path),
        None => Level::parse(DEFAULT_LEVEL).context("Invalid built-in level"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file, cli.verbose)?;
    info!("Starting pacsnek");

    let config = match &cli.config {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
    .inspect_err(|e| error!("{:#}", e))?;

    let level = load_level(cli.level.as_deref()).inspect_err(|e| error!("{:#}", e))?;
    info!("Loaded {}x{} level", level.width, level.height);

    match cli.mode {
        Mode::Play => {
            let mut human_mode = HumanMode::new(GameEngine::new(config, level));
            human_mode.run().await?;
        }
        Mode::Check => {
            println!("{}", level_summary(&level));
        }
    }

    Ok(())
}
