use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use connect_four::config::{AppConfig, PlayerKind};
use connect_four::console::render_grid;
use connect_four::game::{Color, Game};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override who plays Red
    #[arg(long, value_enum)]
    red: Option<PlayerKind>,

    /// Override who plays Yellow
    #[arg(long, value_enum)]
    yellow: Option<PlayerKind>,

    /// Override which color moves first
    #[arg(long, value_enum)]
    first: Option<Color>,

    /// Seed random players for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "connect_four=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    if let Some(red) = cli.red {
        config.red = red;
    }
    if let Some(yellow) = cli.yellow {
        config.yellow = yellow;
    }
    if let Some(first) = cli.first {
        config.first = first;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;

    let mut game = Game::new(config.player(Color::Red), config.player(Color::Yellow));
    tracing::info!(
        red = game.player(Color::Red).name(),
        yellow = game.player(Color::Yellow).name(),
        first = %config.first,
        "starting game"
    );

    let mut status = game
        .start_by_playing(config.first)
        .context("failed to play the opening move")?;
    announce_move(&game);
    while !status.is_terminated() {
        status = game.play().context("failed to play a move")?;
        announce_move(&game);
    }

    let winner = status.winner();
    println!();
    print!("{}", render_grid(game.grid(), winner.map(|w| &w.alignment)));
    match winner {
        Some(winner) => println!("{} has won", winner.color),
        None => println!("No winner"),
    }

    Ok(())
}

fn announce_move(game: &Game) {
    if let Some(last) = game.last_move() {
        println!("{} played column {}", last.color, last.position.column);
    }
}
