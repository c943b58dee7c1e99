//! Terminal client entry point.
//!
//! Reads one command per line from stdin, advances the game by one tick per
//! command and prints the level after each tick.
mod config;
mod input;
mod presentation;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use bomb_content::{Campaign, CampaignLoader, demo_levels};
use bomb_core::GameConfig;
use bomb_runtime::{GameEvent, Runtime};
use config::CliConfig;
use input::Command;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    let campaign = load_campaign(&config)?;
    let mut runtime = Runtime::builder().campaign(campaign).build()?;

    run(&mut runtime, &config)
}

/// Logs go to stderr so the board on stdout stays readable.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn load_campaign(config: &CliConfig) -> Result<Campaign> {
    match &config.campaign {
        Some(path) => {
            tracing::info!("Loading campaign from {}", path.display());
            CampaignLoader::load(path)
        }
        None => {
            tracing::info!("No campaign configured, playing the built-in demo");
            let levels = demo_levels().context("built-in demo levels are invalid")?;
            Ok(Campaign {
                config: GameConfig::default(),
                levels,
            })
        }
    }
}

fn run(runtime: &mut Runtime, config: &CliConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    draw(runtime, &mut stdout)?;
    writeln!(stdout, "commands: {}", command_list())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(_) => {
                writeln!(stdout, "unknown command {:?}; try {}", line.trim(), command_list())?;
                continue;
            }
        };

        let events = runtime.step_with(config.tick, command.intent())?;
        draw(runtime, &mut stdout)?;

        if let Some(message) = events.iter().find_map(|event| match event {
            GameEvent::GameOver { message, .. } => Some(message),
            _ => None,
        }) {
            writeln!(stdout, "{message}")?;
            return Ok(());
        }
    }

    tracing::info!(ticks = runtime.ticks(), "input closed");
    Ok(())
}

fn draw(runtime: &mut Runtime, out: &mut impl Write) -> io::Result<()> {
    let snapshot = runtime.snapshot();
    writeln!(out, "{}", presentation::render_grid(&snapshot))?;
    writeln!(out, "{}", presentation::status_line(&snapshot))?;
    out.flush()?;
    runtime.acknowledge_render();
    Ok(())
}

fn command_list() -> &'static str {
    "up, down, left, right, interact, bomb, exit, or blank to wait"
}
