//! Configuration management for termynal

mod io;
mod types;

pub use io::{InitResult, CONFIG_ENV};
pub use types::*;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::page::PageSettings;
use crate::sequencer::parse::{valid_length, MAX_PROGRESS_LENGTH};
use crate::theme::{ClassColors, Theme};

impl Config {
    /// Get the config file path (`$TERMYNAL_CONFIG` or ~/.config/termynal/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Write a default config file unless one exists (or `force`)
    pub fn init_at(path: &Path, force: bool) -> Result<InitResult> {
        io::init_at(path, force)
    }

    /// Reject values the player cannot work with.
    pub fn validate(&self) -> Result<()> {
        let d = &self.defaults;
        if d.prefix.is_empty() {
            bail!("Invalid config: [defaults].prefix must not be empty");
        }
        for (name, value) in [
            ("start_delay", d.start_delay),
            ("type_delay", d.type_delay),
            ("line_delay", d.line_delay),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("Invalid config: [defaults].{} must be a non-negative number", name);
            }
        }
        if !valid_length(d.progress_length) {
            bail!(
                "Invalid config: [defaults].progress_length must be at most {}",
                MAX_PROGRESS_LENGTH
            );
        }
        if !(1.0..=100.0).contains(&d.progress_percent) {
            bail!("Invalid config: [defaults].progress_percent must be between 1 and 100");
        }
        for (name, value) in [
            ("progress_char", &d.progress_char),
            ("cursor", &d.cursor),
            ("prompt", &d.prompt),
        ] {
            if value.is_empty() {
                bail!("Invalid config: [defaults].{} must not be empty", name);
            }
        }
        if self.player.tick_ms == 0 {
            bail!("Invalid config: [player].tick_ms must be at least 1");
        }
        if Theme::by_name(&self.player.theme).is_none() {
            bail!(
                "Invalid config: unknown theme '{}' (expected one of: {})",
                self.player.theme,
                Theme::NAMES.join(", ")
            );
        }
        Ok(())
    }

    /// The configured theme preset.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.player.theme).unwrap_or_default()
    }

    pub fn class_colors(&self) -> ClassColors {
        ClassColors::parse(&self.classes)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.player.tick_ms.max(1))
    }

    pub fn page_settings(&self, autostart: bool) -> PageSettings {
        PageSettings {
            autostart,
            root_margin: self.player.root_margin,
        }
    }
}
