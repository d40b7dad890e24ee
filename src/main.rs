//! Terminal Wordle - CLI
//!
//! Six tries to guess a five-letter word, with a full-screen TUI mode and
//! a plain line-oriented mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use wordle_tui::{
    commands::run_simple,
    config::{self, Theme},
    game::Game,
    interactive::{App, run_tui},
    wordlists,
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Terminal Wordle: six tries to guess a five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom word list: one five-letter word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Theme for this session: light or dark (overrides the saved preference)
    #[arg(short, long, global = true)]
    theme: Option<String>,

    /// Seed for the secret-word picker (deterministic games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line-oriented mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The word list is ready (or substituted) before any input is processed
    let loaded = wordlists::load(cli.wordlist.as_deref());

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let game = Game::new(loaded.list, rng);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let theme = resolve_theme(cli.theme.as_deref());
            let app = App::new(game, theme, loaded.warning);
            run_tui(app)
        }
        Commands::Simple => run_simple(game, loaded.warning).map_err(|e| anyhow::anyhow!(e)),
    }
}

/// Flag value first, then the saved preference, then the default
fn resolve_theme(flag: Option<&str>) -> Theme {
    flag.and_then(Theme::parse)
        .or_else(config::load_theme)
        .unwrap_or_default()
}
