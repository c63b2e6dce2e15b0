//! Connect Four
//!
//! Play against the minimax computer in a window or in the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::cli::run_terminal;
use connect_four::config::{FrontEnd, GameConfig};
use connect_four::ui::ConnectFourApp;
use connect_four::Game;

/// Play Connect Four against a minimax computer opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the search depth (1-8)
    #[arg(long)]
    depth: Option<u8>,

    /// Let the computer move first
    #[arg(long)]
    computer_first: bool,

    /// Play in the terminal instead of a window
    #[arg(long)]
    terminal: bool,

    /// Log filter, e.g. `debug` or `connect_four=trace` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter '{level}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search_depth = depth;
    }
    if cli.computer_first {
        config.human_first = false;
    }
    if cli.terminal {
        config.front_end = FrontEnd::Terminal;
    }
    config.validate()?;

    info!(
        depth = config.search_depth,
        human_first = config.human_first,
        front_end = ?config.front_end,
        "starting"
    );

    match config.front_end {
        FrontEnd::Terminal => {
            let mut game = Game::new(&config);
            let stdin = std::io::stdin();
            run_terminal(&mut game, stdin.lock(), std::io::stdout())?;
            Ok(())
        }
        FrontEnd::Gui => run_gui(config),
    }
}

fn run_gui(config: GameConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(move |cc| Ok(Box::new(ConnectFourApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
