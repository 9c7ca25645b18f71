//! termynal - CLI entry point

mod commands;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termynal::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter (EnvFilter syntax).
const LOG_ENV: &str = "TERMYNAL_LOG";

/// Install the log subscriber.
///
/// Logs go to `log_file` when given. Otherwise they go to stderr, except
/// while the interactive player owns the screen, where only errors are
/// let through.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let default = if interactive && log_file.is_none() {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, Commands::Play { .. });
    init_logging(cli.log_file.as_deref(), interactive)?;

    match cli.command {
        Commands::Play {
            document,
            all,
            theme,
        } => commands::play::handle(&document, all, theme.as_deref()),
        Commands::Render {
            document,
            timeline,
            fast,
        } => commands::render::handle(&document, timeline, fast),
        Commands::Inspect { document, json } => commands::inspect::handle(&document, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
