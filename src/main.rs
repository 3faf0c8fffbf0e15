//! CityPulse CLI entry point

use anyhow::{Context, Result};
use citypulse::cli::{self, Cli};
use citypulse::ui::TUI;
use citypulse::{App, ClockMount, Config};
use clap::Parser;
use std::process::ExitCode;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config)?;

    if let Some(command) = &args.command {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let mut stdout = std::io::stdout().lock();
        let ok = cli::execute(command, &mut stdout)?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    init_tui_logger(&config)?;
    log::info!("🚀 CityPulse v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Starting on {} ({} ms clock)", config.start_view.path(), config.tick_ms);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut clock = ClockMount::new(config.tick_period(), event_tx);
    let mut app = App::new(config.start_view);

    let mut tui = TUI::new(config.mouse)?;
    tui.run(&mut app, &mut event_rx, &mut clock)?;

    log::info!("Bye");
    Ok(ExitCode::SUCCESS)
}

/// While the TUI owns the screen, log to a file or keep stderr quiet
fn init_tui_logger(config: &Config) -> Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .init();
        }
    }
    Ok(())
}
