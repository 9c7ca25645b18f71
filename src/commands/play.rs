//! Play command handler

use anyhow::{bail, Result};

use termynal::cli::DocumentArgs;
use termynal::theme::Theme;
use termynal::{play_page, Config, Page, PlaybackResult, PlayerOptions};

use super::{display_name, load_sequencers};

/// Play every terminal of a document in the interactive player.
#[cfg(not(tarpaulin_include))]
pub fn handle(document: &DocumentArgs, all: bool, theme: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let theme = match theme {
        Some(name) => match Theme::by_name(name) {
            Some(theme) => theme,
            None => bail!(
                "Unknown theme '{}' (expected one of: {})",
                name,
                Theme::NAMES.join(", ")
            ),
        },
        None => config.theme(),
    };

    let sequencers = load_sequencers(document, &config)?;
    let page = Page::new(sequencers, config.page_settings(!all));
    let options = PlayerOptions {
        tick_rate: config.tick_rate(),
        theme,
        classes: config.class_colors(),
    };

    let result = match play_page(page, &display_name(&document.file), &options) {
        Ok(result) => result,
        Err(e) => PlaybackResult::Error(format!("{:#}", e)),
    };
    println!("{}", result.message());
    if let PlaybackResult::Error(_) = result {
        std::process::exit(1);
    }
    Ok(())
}
