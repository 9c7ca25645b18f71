//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::markup::DEFAULT_SELECTOR;
use crate::sequencer::Defaults;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Replaces the built-in default layer of every sequencer.
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub player: PlayerConfig,
    /// Line class -> color name or `#rrggbb`.
    #[serde(default)]
    pub classes: BTreeMap<String, String>,
}

/// Interactive player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Run loop period in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Inward viewport margin (rows) a terminal must cross to autostart
    #[serde(default = "default_root_margin")]
    pub root_margin: usize,
    /// CSS selector matching terminal containers in HTML documents
    #[serde(default = "default_selector")]
    pub selector: String,
    /// Theme preset: classic, ocean or mono
    #[serde(default = "default_theme")]
    pub theme: String,
}

pub fn default_tick_ms() -> u64 {
    16
}

pub fn default_root_margin() -> usize {
    2
}

pub fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

pub fn default_theme() -> String {
    "classic".to_string()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            root_margin: default_root_margin(),
            selector: default_selector(),
            theme: default_theme(),
        }
    }
}
