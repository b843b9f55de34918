//! Tic-tac-toe with a browsable move history - CLI entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use tictactoe_history::{AppConfig, GameSession, Position, TracingObserver};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run_tui(&config),
        Command::Replay {
            moves,
            jump,
            format,
        } => {
            init_stderr_tracing(&config);
            run_replay(&config, &moves, jump, format)
        }
    }
}

/// Builds the filter from `RUST_LOG`, falling back to the configured directive.
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

fn init_stderr_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}

/// Plays `moves` in order, optionally rewinds, and prints the final view.
#[instrument(skip(config))]
fn run_replay(
    config: &AppConfig,
    moves: &[String],
    jump: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut session = GameSession::new();
    session.subscribe(Box::new(TracingObserver));

    for raw in moves {
        let position = Position::from_label_or_number(raw)
            .with_context(|| format!("Not a square: {:?}", raw))?;
        if let Err(e) = session.try_play(position.to_index()) {
            warn!(error = %e, square = %raw, "Move ignored");
        }
    }

    if let Some(move_number) = jump {
        if let Err(e) = session.try_jump_to(move_number) {
            warn!(error = %e, "Jump ignored");
        }
    }

    let view = session.view();
    info!(status = %view.status_line(), "Replay finished");

    match format {
        OutputFormat::Text => print!("{}", view.render_text(*config.show_square_numbers())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}
