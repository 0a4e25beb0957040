use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardswipe_core::{AppConfig, Deck};

mod commands;

#[derive(Parser)]
#[command(name = "cardswipe")]
#[command(author, version, about = "A swipeable card carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to show (overrides `general.deck` from the config)
    #[arg(short = 'd', long = "deck", global = true)]
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Feed a JSON event script through the carousel and print each outcome
    Replay {
        /// Script file: `{ "viewport_width": 400, "events": [...] }`
        script: PathBuf,
        /// Print one JSON object per event instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // The TUI owns the terminal, so it logs to a file
    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run) | None => {
            let deck = load_deck(&config, cli.deck.as_ref())?;
            commands::run::run(config, deck)
        }
        Some(Commands::Replay { script, json }) => {
            let deck = load_deck(&config, cli.deck.as_ref())?;
            commands::replay::run(&config, deck, &script, json)
        }
        Some(Commands::Config) => commands::config::show(&config),
        Some(Commands::InitConfig { force }) => commands::config::init(force),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Deck from the command line, then the config, then the built-in sample
fn load_deck(config: &AppConfig, override_path: Option<&PathBuf>) -> Result<Deck> {
    match override_path.cloned().or_else(|| config.deck_path()) {
        Some(path) => Deck::from_file(&path)
            .with_context(|| format!("loading deck {}", path.display())),
        None => {
            debug!("No deck configured, using the sample deck");
            Ok(Deck::sample())
        }
    }
}
