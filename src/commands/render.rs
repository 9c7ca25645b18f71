//! Render command handler

use anyhow::Result;

use termynal::cli::DocumentArgs;
use termynal::{render_document, Config, RenderOptions};

use super::load_sequencers;

/// Play every terminal headlessly and print the transcript or timeline.
pub fn handle(document: &DocumentArgs, timeline: bool, fast: bool) -> Result<()> {
    let config = Config::load()?;
    let mut sequencers = load_sequencers(document, &config)?;
    let output = render_document(&mut sequencers, RenderOptions { fast, timeline });
    print!("{}", output);
    Ok(())
}
