use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info, warn};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use config::Config;
use numguess::game::{GameState, MAX_ATTEMPTS, SECRET_RANGE, Session};

fn setup_logging() -> Result<()> {
    // Log to a file so nothing interleaves with the game on stdout
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("numguess")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("numguess.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Everything passes the filter; the configured level is applied later via max level
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Apply the configured level unless RUST_LOG already chose one
fn apply_log_level(config: &Config) {
    if env::var_os("RUST_LOG").is_some() {
        return;
    }
    match config.log_level.parse::<LevelFilter>() {
        Ok(level) => log::set_max_level(level),
        Err(e) => warn!("Ignoring log level {:?}: {}", config.log_level, e),
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if !config.color {
        colored::control::set_override(false);
    }

    if cli.is_verbose() {
        println!(
            "{} range {}..={}, {} attempts, invalid input: {:?}",
            "Settings:".yellow(),
            SECRET_RANGE.start(),
            SECRET_RANGE.end(),
            MAX_ATTEMPTS,
            config.invalid_input
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(GameState::new(), stdin.lock(), stdout.lock())
        .with_policy(config.invalid_input)
        .with_color(config.color);

    let outcome = session.run().context("Game aborted")?;
    info!("Outcome: {:?}", outcome);
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first so config loading is recorded
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration, then let flags override it
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let config = cli.apply(config);
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
