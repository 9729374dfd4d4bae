//! nyan-statusline CLI
//!
//! With no arguments, reads a session snapshot from stdin and prints the
//! status line. `config` opens the field editor; `--state` records the
//! processing indicator from assistant hooks.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nyan_statusline::platform::binary_dir;
use nyan_statusline::preferences;
use nyan_statusline::processing::{ProcessingState, set_status};
use nyan_statusline::session;
use nyan_statusline::statusline::{gather, render};
use nyan_statusline::theme::Theme;
use nyan_statusline::tui::{self, Outcome};

#[derive(Parser)]
#[command(name = "nyan-statusline")]
#[command(about = "Nyan Cat status line for AI coding sessions")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Record the processing state (used from hooks)
    #[arg(long, value_enum)]
    state: Option<ProcessingState>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose which status-line fields are shown
    Config,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match (cli.command, cli.state) {
        (Some(Commands::Config), _) => cmd_config(),
        (None, Some(state)) => cmd_state(state),
        (None, None) => cmd_render(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; stdout carries only the status line.
fn init_logging() {
    let filter = EnvFilter::try_from_env("NYAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_config() -> Result<(), String> {
    let dir = binary_dir().map_err(|e| format!("Cannot locate executable: {}", e))?;
    match tui::run(&dir).map_err(|e| e.to_string())? {
        Outcome::Saved => info!(dir = %dir.display(), "preferences saved"),
        Outcome::Cancelled => debug!("editor cancelled"),
    }
    Ok(())
}

fn cmd_state(state: ProcessingState) -> Result<(), String> {
    let dir = binary_dir().map_err(|e| format!("Cannot locate executable: {}", e))?;
    set_status(&dir, state).map_err(|e| format!("Failed to write state: {}", e))
}

fn cmd_render() -> Result<(), String> {
    let session = session::parse(io::stdin().lock()).map_err(|e| format!("parse error: {}", e))?;
    let dir = binary_dir().map_err(|e| format!("Cannot locate executable: {}", e))?;

    let prefs = preferences::load(&dir);
    let ctx = gather(&dir, &session, &prefs, chrono::Local::now());
    print!("{}", render(&session, &prefs, &ctx, &Theme::default()));
    Ok(())
}
