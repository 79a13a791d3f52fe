//! Terminal console demo runner (default binary).
//!
//! Drives the demo application with the crossterm-backed terminal surface and
//! terminal key input. Screen size and cell size come from `TUI_CONSOLE_*`
//! environment variables, overridable on the command line.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use tui_console::engine::{Engine, EngineConfig};
use tui_console::input::TerminalInput;
use tui_console::term::TerminalSurface;
use tui_console::types::StopHandle;

mod demo;

/// Real-time character-cell rendering demo
#[derive(Parser)]
#[command(name = "tui-console")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Screen width in cells
    #[arg(long)]
    width: Option<u16>,

    /// Screen height in cells
    #[arg(long)]
    height: Option<u16>,

    /// Glyph width in pixels
    #[arg(long)]
    cell_width: Option<u16>,

    /// Glyph height in pixels
    #[arg(long)]
    cell_height: Option<u16>,

    /// Application name shown in the title bar
    #[arg(short, long)]
    name: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file (the terminal itself is the display)
    #[arg(long, env = "TUI_CONSOLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, mut config: EngineConfig) -> EngineConfig {
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(w) = self.cell_width {
            config.cell_width = w;
        }
        if let Some(h) = self.cell_height {
            config.cell_height = h;
        }
        if let Some(name) = &self.name {
            config.app_name = name.clone();
        }
        config
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let file = std::fs::File::create(path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.apply(EngineConfig::from_env());
    let stop = StopHandle::new();
    let input = TerminalInput::new()
        .with_stop_handle(stop.clone())
        .with_release_events();

    let engine = Engine::construct(&config, demo::Demo::new(), TerminalSurface::new(), input)?
        .with_stop_handle(stop);
    let outcome = engine.start()?;

    tracing::info!(ticks = outcome.ticks, reason = ?outcome.reason, "demo exited");
    Ok(())
}
