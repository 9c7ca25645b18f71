//! Command handlers for the termynal CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod inspect;
pub mod play;
pub mod render;

use anyhow::{Context, Result};
use std::path::Path;

use termynal::cli::DocumentArgs;
use termynal::sequencer::Sequencer;
use termynal::{source, Config, LoadOptions};

/// Load a document and build one sequencer per terminal, none of them
/// initialized yet.
pub fn load_sequencers(document: &DocumentArgs, config: &Config) -> Result<Vec<Sequencer>> {
    let explicit = document.options.to_options();
    let load = LoadOptions {
        selector: document
            .selector
            .clone()
            .unwrap_or_else(|| config.player.selector.clone()),
        prefix: explicit.prefix_or(&config.defaults).to_string(),
    };
    let sources = source::load(&document.file, &load)
        .with_context(|| format!("Failed to load {}", document.file.display()))?;
    tracing::debug!(terminals = sources.len(), "Document loaded");
    Ok(sources
        .into_iter()
        .map(|source| source.build(&explicit, &config.defaults))
        .collect())
}

/// File name for messages, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
